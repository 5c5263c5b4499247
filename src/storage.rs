//! Saved progress: today's daily board and the statistics
//!
//! Stored as pretty-printed JSON. Writes go to a sibling temporary file that
//! is renamed over the target, so an interrupted save leaves the previous file
//! intact.

use crate::game::GameState;
use crate::stats::Statistics;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("impossibile accedere a {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("salvataggio non valido in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("versione del salvataggio non supportata: {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedData {
    pub version: u32,
    #[serde(default)]
    pub daily: Option<GameState>,
    #[serde(default)]
    pub stats: Statistics,
}

impl Default for SavedData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            daily: None,
            stats: Statistics::default(),
        }
    }
}

/// JSON file holding [`SavedData`]
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read saved data; a missing file yields the defaults
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, is not valid
    /// JSON, holds a board that no game could reach, or was written by a
    /// newer format.
    pub fn load(&self) -> Result<SavedData, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No saved data at {}", self.path.display());
                return Ok(SavedData::default());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let data: SavedData =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        if data.version > FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion(data.version));
        }

        debug!("Loaded saved data from {}", self.path.display());
        Ok(data)
    }

    /// Write saved data, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if the file or its directory cannot be written.
    pub fn save(&self, data: &SavedData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(data).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;

        info!("Saved progress to {}", self.path.display());
        Ok(())
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("save.json"));
        assert_eq!(store.load().unwrap(), SavedData::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("save.json"));

        let mut daily = GameState::daily(Word::new("pasta").unwrap(), 11);
        daily.add_letter('p');
        let mut stats = Statistics::default();
        stats.record_win(4);

        let data = SavedData {
            version: FORMAT_VERSION,
            daily: Some(daily),
            stats,
        };
        store.save(&data).unwrap();

        assert_eq!(store.load().unwrap(), data);
        assert!(!store.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn impossible_board_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let store = Store::new(&path);
        store
            .save(&SavedData {
                daily: Some(GameState::daily(Word::new("pasta").unwrap(), 3)),
                ..SavedData::default()
            })
            .unwrap();

        let mut json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        json["daily"]["current_row"] = 6.into();
        fs::write(&path, json.to_string()).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
        assert!(err.to_string().contains("current_row 6"));
    }

    #[test]
    fn cursor_past_typed_letters_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        let mut daily = GameState::daily(Word::new("pasta").unwrap(), 3);
        daily.add_letter('p');
        let store = Store::new(&path);
        store
            .save(&SavedData {
                daily: Some(daily),
                ..SavedData::default()
            })
            .unwrap();

        let mut json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        json["daily"]["current_col"] = 5.into();
        fs::write(&path, json.to_string()).unwrap();

        assert!(matches!(
            store.load().unwrap_err(),
            StorageError::Corrupt { .. }
        ));
    }

    #[test]
    fn newer_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.json");
        fs::write(&path, r#"{"version": 99}"#).unwrap();

        let err = Store::new(&path).load().unwrap_err();
        assert!(matches!(err, StorageError::UnsupportedVersion(99)));
    }
}
