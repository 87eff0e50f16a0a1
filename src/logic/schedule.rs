//! Match scheduling: kick-off times on a five-minute grid.

use crate::models::{MatchTime, Tournament};
use chrono::{DateTime, Duration, Timelike, Utc};

/// Every scheduled match is booked for one hour.
pub const MATCH_DURATION_MINUTES: u32 = 60;

/// Round to the nearest multiple of five minutes (halfway rounds up), zeroing seconds.
/// Seconds do not take part in the rounding: 12:02:59 becomes 12:00.
pub fn round_to_five_minutes(date: DateTime<Utc>) -> DateTime<Utc> {
    let minute = i64::from(date.minute());
    let rounded = (minute + 2) / 5 * 5;
    let offset = Duration::minutes(rounded - minute)
        - Duration::seconds(i64::from(date.second()))
        - Duration::nanoseconds(i64::from(date.nanosecond()));
    date + offset
}

/// Schedule a match. The date is rounded here, so callers pass the raw picker value.
/// Unknown match ids leave the tournament unchanged.
pub fn set_match_time(mut tournament: Tournament, match_id: &str, date: DateTime<Utc>) -> Tournament {
    match tournament.matches.iter_mut().find(|m| m.id == match_id) {
        Some(m) => {
            m.match_time = Some(MatchTime {
                date: round_to_five_minutes(date),
                duration_minutes: MATCH_DURATION_MINUTES,
            });
        }
        None => log::debug!("set_match_time: no match {}", match_id),
    }
    tournament
}
