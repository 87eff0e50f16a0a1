//! Player statistics: goals, MVP, and the scorer table.

use crate::models::{Player, PlayerId, Tournament};

/// Default length of the top-scorer table.
pub const TOP_SCORERS: usize = 5;

/// Credit one goal to a player. Unknown ids leave the tournament unchanged.
pub fn add_goal(mut tournament: Tournament, player_id: PlayerId) -> Tournament {
    match tournament.player_mut(player_id) {
        Some(p) => p.add_goal(),
        None => log::debug!("add_goal: no player {}", player_id),
    }
    tournament
}

/// Make `player_id` the tournament's only MVP. Unknown ids leave the tournament unchanged,
/// including any existing MVP.
pub fn set_mvp(mut tournament: Tournament, player_id: PlayerId) -> Tournament {
    if tournament.player(player_id).is_none() {
        log::debug!("set_mvp: no player {}", player_id);
        return tournament;
    }
    for p in &mut tournament.players {
        p.is_mvp = p.id == player_id;
    }
    tournament
}

/// Up to `n` players by goals, most first; ties keep roster order.
pub fn top_scorers(tournament: &Tournament, n: usize) -> Vec<&Player> {
    let mut players: Vec<&Player> = tournament.players.iter().collect();
    players.sort_by(|a, b| b.goals.cmp(&a.goals));
    players.truncate(n);
    players
}
