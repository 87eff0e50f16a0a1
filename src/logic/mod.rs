//! Tournament business logic: setup, bracket generation, results, stats, scheduling.

mod bracket;
mod progress;
mod progression;
mod roster;
mod schedule;
mod setup;
mod stats;

pub use bracket::{flat_index, generate_initial_matches, match_id, matches_in_round, total_rounds};
pub use progress::progress_percent;
pub use progression::{decide_winner, record_result};
pub use roster::{parse_roster, Roster};
pub use schedule::{round_to_five_minutes, set_match_time, MATCH_DURATION_MINUTES};
pub use setup::create_tournament;
pub use stats::{add_goal, set_mvp, top_scorers, TOP_SCORERS};
