//! Tournament record and TournamentError.

use crate::models::game::GameMatch;
use crate::models::player::{Player, PlayerId};
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament setup and persistence.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A bracket needs at least 2 teams.
    NotEnoughTeams { count: usize },
    /// Team and player names must not be blank.
    EmptyName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Player refers to a team that is not in the tournament.
    TeamNotFound(TeamId),
    /// Roster CSV could not be read.
    InvalidRoster(String),
    /// Loading or saving a snapshot failed.
    Storage(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughTeams { count } => {
                write!(f, "Need at least 2 teams to build a bracket (got {})", count)
            }
            TournamentError::EmptyName => write!(f, "Name must not be empty"),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::InvalidRoster(msg) => write!(f, "Invalid roster: {}", msg),
            TournamentError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<std::io::Error> for TournamentError {
    fn from(e: std::io::Error) -> Self {
        TournamentError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for TournamentError {
    fn from(e: serde_json::Error) -> Self {
        TournamentError::Storage(e.to_string())
    }
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::InvalidRoster(e.to_string())
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Full tournament state: teams in seed order, the flat match tree, and players.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Insertion order is seed order.
    pub teams: Vec<Team>,
    /// Round-major flat bracket; the third-place match is last.
    pub matches: Vec<GameMatch>,
    pub players: Vec<Player>,
    /// Lowest round that still has an undecided match.
    pub current_round: u32,
    pub total_rounds: u32,
}

impl Tournament {
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn players_of_team(&self, team_id: TeamId) -> Vec<&Player> {
        self.players.iter().filter(|p| p.team_id == team_id).collect()
    }

    pub fn match_by_id(&self, id: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Position of a match in the flat list.
    pub fn match_index(&self, id: &str) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }

    /// Matches of one round, in match-number order (the third-place match belongs to the last round).
    pub fn matches_in_round(&self, round: u32) -> Vec<&GameMatch> {
        self.matches.iter().filter(|m| m.round == round).collect()
    }

    pub fn final_match(&self) -> Option<&GameMatch> {
        self.matches
            .iter()
            .find(|m| m.round == self.total_rounds && !m.is_third_place)
    }

    pub fn third_place_match(&self) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.is_third_place)
    }

    /// True once the final has a winner.
    pub fn is_complete(&self) -> bool {
        self.final_match().is_some_and(GameMatch::is_decided)
    }

    pub fn champion(&self) -> Option<&Team> {
        self.final_match()
            .and_then(|m| m.winner_id)
            .and_then(|id| self.team(id))
    }

    pub fn third_place_winner(&self) -> Option<&Team> {
        self.third_place_match()
            .and_then(|m| m.winner_id)
            .and_then(|id| self.team(id))
    }

    pub fn mvp(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_mvp)
    }

    /// Add a team (names must be unique, case-insensitive). The bracket is left as generated.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        logo: Option<String>,
    ) -> Result<TeamId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed, logo.filter(|l| !l.trim().is_empty()));
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Add a player to an existing team.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        team_id: TeamId,
    ) -> Result<PlayerId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if self.team(team_id).is_none() {
            return Err(TournamentError::TeamNotFound(team_id));
        }
        let player = Player::new(name_trimmed, team_id);
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Recompute `current_round`: the lowest round holding an undecided, playable match.
    pub(crate) fn refresh_current_round(&mut self) {
        self.current_round = self
            .matches
            .iter()
            .filter(|m| !m.is_third_place && !m.is_bye && !m.is_decided())
            .map(|m| m.round)
            .min()
            .unwrap_or(self.total_rounds);
    }
}
