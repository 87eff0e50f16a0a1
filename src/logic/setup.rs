//! Setup phase: create a tournament and its bracket from teams and players.

use crate::logic::bracket::{generate_initial_matches, total_rounds};
use crate::models::{Player, Team, Tournament, TournamentError};
use uuid::Uuid;

/// Create a tournament: validate the roster, generate the bracket (teams seeded in slice order).
pub fn create_tournament(
    name: impl Into<String>,
    teams: Vec<Team>,
    players: Vec<Player>,
) -> Result<Tournament, TournamentError> {
    for (i, team) in teams.iter().enumerate() {
        if team.name.trim().is_empty() {
            return Err(TournamentError::EmptyName);
        }
        if teams[..i]
            .iter()
            .any(|t| t.name.trim().eq_ignore_ascii_case(team.name.trim()))
        {
            return Err(TournamentError::DuplicateTeamName);
        }
    }
    if let Some(p) = players.iter().find(|p| !teams.iter().any(|t| t.id == p.team_id)) {
        return Err(TournamentError::TeamNotFound(p.team_id));
    }

    let matches = generate_initial_matches(&teams)?;
    let rounds = total_rounds(teams.len());
    let mut tournament = Tournament {
        id: Uuid::new_v4(),
        name: name.into().trim().to_string(),
        teams,
        matches,
        players,
        current_round: 1,
        total_rounds: rounds,
    };
    tournament.refresh_current_round();

    log::info!(
        "Created tournament {} '{}' with {} teams, {} rounds",
        tournament.id,
        tournament.name,
        tournament.teams.len(),
        rounds
    );
    Ok(tournament)
}
