//! Bracket generation: the flat match tree for N teams, first-round seeding, and byes.
//!
//! The tree lives in one `Vec<GameMatch>` ordered round by round (round 1 first). Round `r` of
//! an `R`-round bracket holds `2^(R-r)` matches, so match `m` of round `r` sits at flat position
//! `2^R - 2^(R-r+1) + m` and feeds match `ceil(m/2)` of round `r+1`. The third-place match is
//! appended after the final.

use crate::models::{GameMatch, MatchId, Slot, Team, TournamentError};

/// Rounds needed for `team_count` teams: `ceil(log2(team_count))`.
pub fn total_rounds(team_count: usize) -> u32 {
    if team_count <= 1 {
        return 0;
    }
    usize::BITS - (team_count - 1).leading_zeros()
}

/// Number of matches in `round` of a bracket with `total_rounds` rounds.
pub fn matches_in_round(total_rounds: u32, round: u32) -> usize {
    1 << (total_rounds - round)
}

/// 0-based index in the flat list of match `match_number` (1-based) of `round`.
pub fn flat_index(total_rounds: u32, round: u32, match_number: usize) -> usize {
    (1usize << total_rounds) - (1usize << (total_rounds - round + 1)) + match_number - 1
}

/// Id of the match stored at a 0-based flat index.
pub fn match_id(index: usize) -> MatchId {
    format!("match-{}", index + 1)
}

/// Build the complete bracket for `teams` (seed order = slice order).
///
/// 1. Allocate `2^R - 1` empty matches with round, match number, and next-match links.
/// 2. Append the third-place match (round `R`, match number 2).
/// 3. Seed round 1: the first `N - 2^(R-1)` matches get two teams, the rest get one team and
///    become byes whose winner is advanced immediately.
pub fn generate_initial_matches(teams: &[Team]) -> Result<Vec<GameMatch>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams { count: teams.len() });
    }
    let rounds = total_rounds(teams.len());
    let mut matches = Vec::with_capacity(1 << rounds);

    for round in 1..=rounds {
        for match_number in 1..=matches_in_round(rounds, round) {
            let next_match_id = (round < rounds)
                .then(|| match_id(flat_index(rounds, round + 1, (match_number + 1) / 2)));
            matches.push(GameMatch::new(
                match_id(matches.len()),
                round,
                match_number,
                next_match_id,
            ));
        }
    }
    matches.push(GameMatch::third_place(match_id(matches.len()), rounds));

    seed_first_round(&mut matches, teams, rounds);
    Ok(matches)
}

fn seed_first_round(matches: &mut [GameMatch], teams: &[Team], rounds: u32) {
    let opening = matches_in_round(rounds, 1);
    // rounds = ceil(log2 N) guarantees N > opening, so every opening match gets a team.
    let paired = teams.len() - opening;
    let mut seeds = teams.iter().map(|t| t.id);

    for index in 0..opening {
        matches[index].team1_id = seeds.next();
        if index < paired {
            matches[index].team2_id = seeds.next();
        } else if let Some(team) = matches[index].team1_id {
            matches[index].is_bye = true;
            matches[index].winner_id = Some(team);
            if let Some((next, slot)) = next_slot(matches, index) {
                matches[next].set_team(slot, Some(team));
            }
        }
    }
}

/// Index of the match that `index` feeds, and the slot its winner takes there.
pub(crate) fn next_slot(matches: &[GameMatch], index: usize) -> Option<(usize, Slot)> {
    let current = &matches[index];
    let next_id = current.next_match_id.as_deref()?;
    let next = matches.iter().position(|m| m.id == next_id)?;
    Some((next, Slot::fed_by(current.match_number)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_rounds_is_ceil_log2() {
        assert_eq!(total_rounds(2), 1);
        assert_eq!(total_rounds(3), 2);
        assert_eq!(total_rounds(4), 2);
        assert_eq!(total_rounds(5), 3);
        assert_eq!(total_rounds(8), 3);
        assert_eq!(total_rounds(9), 4);
        assert_eq!(total_rounds(16), 4);
    }

    #[test]
    fn flat_index_is_round_major() {
        // 3 rounds: 4 + 2 + 1 matches
        assert_eq!(flat_index(3, 1, 1), 0);
        assert_eq!(flat_index(3, 1, 4), 3);
        assert_eq!(flat_index(3, 2, 1), 4);
        assert_eq!(flat_index(3, 2, 2), 5);
        assert_eq!(flat_index(3, 3, 1), 6);
    }

    #[test]
    fn odd_match_numbers_feed_slot_one() {
        assert_eq!(Slot::fed_by(1), Slot::One);
        assert_eq!(Slot::fed_by(2), Slot::Two);
        assert_eq!(Slot::fed_by(3), Slot::One);
    }

    #[test]
    fn links_point_to_parent_match() {
        let teams: Vec<Team> = (0..8).map(|i| Team::new(format!("T{i}"), None)).collect();
        let matches = generate_initial_matches(&teams).unwrap();
        let next: Vec<Option<&str>> = matches.iter().map(|m| m.next_match_id.as_deref()).collect();
        assert_eq!(
            next,
            vec![
                Some("match-5"),
                Some("match-5"),
                Some("match-6"),
                Some("match-6"),
                Some("match-7"),
                Some("match-7"),
                None,
                None,
            ]
        );
    }
}
