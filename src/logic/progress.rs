//! Tournament progress as a whole-number percentage.

use crate::models::Tournament;

/// Share of matches with a winner, rounded half up; byes and the third-place match count.
pub fn progress_percent(tournament: &Tournament) -> u8 {
    let total = tournament.matches.len();
    if total == 0 {
        return 0;
    }
    let decided = tournament.matches.iter().filter(|m| m.is_decided()).count();
    ((200 * decided + total) / (2 * total)) as u8
}
