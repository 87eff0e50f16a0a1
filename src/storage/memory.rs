//! In-memory store with per-tournament activity tracking for idle cleanup.

use super::TournamentStore;
use crate::models::{Tournament, TournamentError, TournamentId};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Tournament data + last activity time.
struct Entry {
    tournament: Tournament,
    last_activity: Instant,
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<TournamentId, Entry>>,
}

fn lock_error() -> TournamentError {
    TournamentError::Storage("lock poisoned".to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, TournamentError> {
        Ok(self.entries.read().map_err(|_| lock_error())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, TournamentError> {
        Ok(self.len()? == 0)
    }

    /// Drop tournaments not loaded or saved within `max_idle`. Returns how many were removed.
    pub fn evict_idle(&self, max_idle: Duration) -> Result<usize, TournamentError> {
        let mut g = self.entries.write().map_err(|_| lock_error())?;
        let before = g.len();
        g.retain(|_, entry| entry.last_activity.elapsed() < max_idle);
        Ok(before - g.len())
    }
}

impl TournamentStore for MemoryStore {
    /// Loading counts as activity.
    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, TournamentError> {
        let mut g = self.entries.write().map_err(|_| lock_error())?;
        Ok(g.get_mut(&id).map(|entry| {
            entry.last_activity = Instant::now();
            entry.tournament.clone()
        }))
    }

    fn save(&self, tournament: &Tournament) -> Result<(), TournamentError> {
        let mut g = self.entries.write().map_err(|_| lock_error())?;
        g.insert(
            tournament.id,
            Entry {
                tournament: tournament.clone(),
                last_activity: Instant::now(),
            },
        );
        Ok(())
    }

    fn remove(&self, id: TournamentId) -> Result<bool, TournamentError> {
        let mut g = self.entries.write().map_err(|_| lock_error())?;
        Ok(g.remove(&id).is_some())
    }
}
