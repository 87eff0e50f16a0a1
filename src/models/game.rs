//! Match (game), Slot, and MatchTime for the knockout bracket.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a match: `match-{k}` where `k` is its 1-based position in the flat list.
pub type MatchId = String;

/// Which side of a match a team occupies (and which side a winner advances into).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Slot in the next round fed by the match with this number: odd → One, even → Two.
    pub fn fed_by(match_number: usize) -> Self {
        if match_number % 2 == 1 {
            Slot::One
        } else {
            Slot::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

/// Scheduled kick-off of a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTime {
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
}

/// A single bracket match between two teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// 1 is the opening round; the final is round `total_rounds`.
    pub round: u32,
    /// 1-based position within the round.
    pub match_number: usize,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub score1: Option<u32>,
    pub score2: Option<u32>,
    #[serde(default)]
    pub penalties1: Option<u32>,
    #[serde(default)]
    pub penalties2: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_time: Option<MatchTime>,
    pub winner_id: Option<TeamId>,
    pub loser_id: Option<TeamId>,
    pub next_match_id: Option<MatchId>,
    #[serde(default)]
    pub is_bye: bool,
    #[serde(default)]
    pub is_third_place: bool,
}

impl GameMatch {
    /// An empty bracket match with no teams or scores yet.
    pub fn new(id: MatchId, round: u32, match_number: usize, next_match_id: Option<MatchId>) -> Self {
        Self {
            id,
            round,
            match_number,
            team1_id: None,
            team2_id: None,
            score1: None,
            score2: None,
            penalties1: None,
            penalties2: None,
            match_time: None,
            winner_id: None,
            loser_id: None,
            next_match_id,
            is_bye: false,
            is_third_place: false,
        }
    }

    /// The bronze match, played in the final round between the semifinal losers.
    pub fn third_place(id: MatchId, round: u32) -> Self {
        Self {
            is_third_place: true,
            ..Self::new(id, round, 2, None)
        }
    }

    pub fn team(&self, slot: Slot) -> Option<TeamId> {
        match slot {
            Slot::One => self.team1_id,
            Slot::Two => self.team2_id,
        }
    }

    pub fn set_team(&mut self, slot: Slot, team: Option<TeamId>) {
        match slot {
            Slot::One => self.team1_id = team,
            Slot::Two => self.team2_id = team,
        }
    }

    /// Whether the team occupies either slot.
    pub fn involves(&self, team: TeamId) -> bool {
        self.team1_id == Some(team) || self.team2_id == Some(team)
    }

    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some()
    }
}
