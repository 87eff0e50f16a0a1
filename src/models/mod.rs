//! Data structures for the knockout tournament: teams, players, matches, tournament record.

mod game;
mod player;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, MatchTime, Slot};
pub use player::{Player, PlayerId};
pub use team::{Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentId};
