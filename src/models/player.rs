//! Player data structure.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used for goal and MVP lookups).
pub type PlayerId = Uuid;

/// A player on one of the tournament's teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team_id: TeamId,
    pub goals: u32,
    #[serde(default, rename = "isMVP")]
    pub is_mvp: bool,
}

impl Player {
    /// Create a new player on the given team with no goals.
    pub fn new(name: impl Into<String>, team_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            team_id,
            goals: 0,
            is_mvp: false,
        }
    }

    /// Record one goal for this player.
    pub fn add_goal(&mut self) {
        self.goals += 1;
    }
}
