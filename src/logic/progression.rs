//! Match results: decide winner/loser, advance the winner, and feed semifinal losers into the
//! third-place match.

use crate::logic::bracket::next_slot;
use crate::models::{GameMatch, Slot, TeamId, Tournament};

/// Which slot won, or `None` when level with no (or incomplete) penalty shoot-out.
pub fn decide_winner(
    score1: u32,
    score2: u32,
    penalties1: Option<u32>,
    penalties2: Option<u32>,
) -> Option<Slot> {
    if score1 > score2 {
        return Some(Slot::One);
    }
    if score2 > score1 {
        return Some(Slot::Two);
    }
    match (penalties1, penalties2) {
        (Some(p1), Some(p2)) if p1 > p2 => Some(Slot::One),
        (Some(p1), Some(p2)) if p2 > p1 => Some(Slot::Two),
        _ => None,
    }
}

/// Record a played result and return the updated tournament.
///
/// Unknown match ids and bye matches leave the tournament unchanged. A winner and loser are only
/// set when both slots are filled. Recording again replaces the previous outcome: the winner is
/// rewritten into the next match's slot (odd match number → team 1, even → team 2), or that slot
/// is cleared if the match is now undecided. A later match whose line-up changes this way loses
/// its own result, and so on down the bracket.
pub fn record_result(
    mut tournament: Tournament,
    match_id: &str,
    score1: u32,
    score2: u32,
    penalties1: Option<u32>,
    penalties2: Option<u32>,
) -> Tournament {
    let Some(index) = tournament.match_index(match_id) else {
        log::debug!("record_result: no match {} in tournament {}", match_id, tournament.id);
        return tournament;
    };
    if tournament.matches[index].is_bye {
        log::debug!("record_result: {} is a bye, nothing to record", match_id);
        return tournament;
    }

    let total_rounds = tournament.total_rounds;
    let matches = &mut tournament.matches;
    let m = &mut matches[index];
    let previous_winner = m.winner_id;
    let previous_loser = m.loser_id;

    m.score1 = Some(score1);
    m.score2 = Some(score2);
    m.penalties1 = penalties1;
    m.penalties2 = penalties2;
    let both_present = m.team1_id.is_some() && m.team2_id.is_some();
    let (winner, loser) = match decide_winner(score1, score2, penalties1, penalties2) {
        Some(slot) if both_present => (m.team(slot), m.team(slot.other())),
        _ => (None, None),
    };
    m.winner_id = winner;
    m.loser_id = loser;

    if let Some((next, slot)) = next_slot(matches, index) {
        if winner.is_some() {
            set_slot(matches, next, slot, winner, total_rounds);
        } else if previous_winner.is_some() && matches[next].team(slot) == previous_winner {
            set_slot(matches, next, slot, None, total_rounds);
        }
    }

    if is_semifinal(&matches[index], total_rounds) {
        feed_third_place(matches, previous_loser, loser, total_rounds);
    }

    log::debug!(
        "Recorded {}-{} in {} (winner {:?})",
        score1,
        score2,
        match_id,
        winner
    );
    tournament.refresh_current_round();
    tournament
}

fn is_semifinal(m: &GameMatch, total_rounds: u32) -> bool {
    !m.is_third_place && m.round + 1 == total_rounds
}

/// Put `team` into `slot` of match `index`. If that changes the line-up of a decided match, its
/// result is wiped and the teams it sent on are withdrawn.
fn set_slot(
    matches: &mut [GameMatch],
    index: usize,
    slot: Slot,
    team: Option<TeamId>,
    total_rounds: u32,
) {
    let m = &mut matches[index];
    if m.team(slot) == team {
        return;
    }
    m.set_team(slot, team);
    if !m.is_decided() {
        return;
    }

    let old_winner = m.winner_id.take();
    let old_loser = m.loser_id.take();
    m.score1 = None;
    m.score2 = None;
    m.penalties1 = None;
    m.penalties2 = None;
    log::debug!("Line-up of {} changed, result cleared", m.id);

    if let Some((next, next_side)) = next_slot(matches, index) {
        if matches[next].team(next_side) == old_winner {
            set_slot(matches, next, next_side, None, total_rounds);
        }
    }
    if is_semifinal(&matches[index], total_rounds) {
        feed_third_place(matches, old_loser, None, total_rounds);
    }
}

/// Move a semifinal's loser into the third-place match: vacate its previous loser, then fill
/// team 1 if empty, else team 2 if empty. A loser that finds both slots taken is dropped.
fn feed_third_place(
    matches: &mut [GameMatch],
    previous_loser: Option<TeamId>,
    loser: Option<TeamId>,
    total_rounds: u32,
) {
    let Some(third_place) = matches.iter().position(|m| m.is_third_place) else {
        return;
    };

    if let Some(previous) = previous_loser.filter(|p| Some(*p) != loser) {
        for slot in [Slot::One, Slot::Two] {
            if matches[third_place].team(slot) == Some(previous) {
                set_slot(matches, third_place, slot, None, total_rounds);
            }
        }
    }

    let Some(loser) = loser else {
        return;
    };
    let tp = &matches[third_place];
    if tp.involves(loser) {
        return;
    }
    if tp.team1_id.is_none() {
        set_slot(matches, third_place, Slot::One, Some(loser), total_rounds);
    } else if tp.team2_id.is_none() {
        set_slot(matches, third_place, Slot::Two, Some(loser), total_rounds);
    } else {
        log::warn!(
            "Third-place match {} already has both teams; dropping semifinal loser {}",
            tp.id,
            loser
        );
    }
}
