//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in match slots and player membership).
pub type TeamId = Uuid;

/// A team entered in the tournament. Position in `Tournament::teams` is its seed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Opaque logo reference (URL or data URI), never interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl Team {
    pub fn new(name: impl Into<String>, logo: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo,
        }
    }
}
