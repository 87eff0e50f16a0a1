//! Roster import from CSV: `team,player[,logo]`, one row per player.

use crate::logic::setup::create_tournament;
use crate::models::{Player, Team, Tournament, TournamentError};
use serde::Deserialize;
use std::io::Read;

/// Teams (in first-appearance order) and their players, ready for `create_tournament`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
}

impl Roster {
    pub fn into_tournament(self, name: impl Into<String>) -> Result<Tournament, TournamentError> {
        create_tournament(name, self.teams, self.players)
    }
}

#[derive(Deserialize)]
struct RosterRow {
    team: String,
    #[serde(default)]
    player: Option<String>,
    #[serde(default)]
    logo: Option<String>,
}

/// Parse a roster. A row with a blank player cell registers the team only.
/// Team names match case-insensitively; the first row naming a team fixes its seed and logo.
pub fn parse_roster<R: Read>(reader: R) -> Result<Roster, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut roster = Roster::default();

    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        if row.team.is_empty() {
            // +2: header line, 1-based
            return Err(TournamentError::InvalidRoster(format!(
                "line {}: team name is empty",
                i + 2
            )));
        }
        let existing = roster
            .teams
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(&row.team))
            .map(|t| t.id);
        let team_id = match existing {
            Some(id) => id,
            None => {
                let team = Team::new(row.team, row.logo.filter(|l| !l.is_empty()));
                let id = team.id;
                roster.teams.push(team);
                id
            }
        };
        if let Some(name) = row.player.filter(|p| !p.is_empty()) {
            roster.players.push(Player::new(name, team_id));
        }
    }

    log::debug!(
        "Parsed roster: {} teams, {} players",
        roster.teams.len(),
        roster.players.len()
    );
    Ok(roster)
}
