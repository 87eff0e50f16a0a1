//! One pretty-printed JSON snapshot per tournament: `<dir>/<id>.json`.

use super::TournamentStore;
use crate::models::{Tournament, TournamentError, TournamentId};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: TournamentId) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }
}

impl TournamentStore for JsonFileStore {
    fn load(&self, id: TournamentId) -> Result<Option<Tournament>, TournamentError> {
        let json = match fs::read_to_string(self.path_for(id)) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    fn save(&self, tournament: &Tournament) -> Result<(), TournamentError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(tournament)?;
        fs::write(self.path_for(tournament.id), json)?;
        log::debug!("Saved tournament {} to {}", tournament.id, self.dir.display());
        Ok(())
    }

    fn remove(&self, id: TournamentId) -> Result<bool, TournamentError> {
        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
