//! Futsal knockout tournament: library with models, bracket logic, and snapshot storage.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    add_goal, create_tournament, decide_winner, generate_initial_matches, parse_roster,
    progress_percent, record_result, round_to_five_minutes, set_match_time, set_mvp, top_scorers,
    total_rounds, Roster, MATCH_DURATION_MINUTES, TOP_SCORERS,
};
pub use models::{
    GameMatch, MatchId, MatchTime, Player, PlayerId, Slot, Team, TeamId, Tournament,
    TournamentError, TournamentId,
};
pub use storage::{JsonFileStore, MemoryStore, TournamentStore};
