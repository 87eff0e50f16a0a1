//! Persistence boundary. The logic layer never touches a store; callers load a tournament,
//! apply value transforms, and save the result.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::{Tournament, TournamentError, TournamentId};

/// Snapshot storage for whole tournament records.
pub trait TournamentStore: Send + Sync {
    /// `Ok(None)` when no tournament with this id was saved.
    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, TournamentError>;

    /// Insert or replace the snapshot for `tournament.id`.
    fn save(&self, tournament: &Tournament) -> Result<(), TournamentError>;

    /// Returns whether a snapshot was removed.
    fn remove(&self, id: TournamentId) -> Result<bool, TournamentError>;
}
