//! JSON persistence of the whole [`AppState`].
//!
//! The state is one document, read wholesale at startup and rewritten
//! wholesale after every change. Writes go to a sibling temporary file that
//! is then renamed over the document, so a reader never sees half a state.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::data_dir;
use super::migrations::migrate_document;
use crate::error::StorageError;
use crate::model::AppState;

/// Name of the state document, without extension.
pub const STORAGE_KEY: &str = "dependency_wallet_data";

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at the default location inside [`data_dir`].
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::new(data_dir()?.join(format!("{STORAGE_KEY}.json"))))
    }

    /// Store backed by an explicit file (for testing or a custom location).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and migrate the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<AppState>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let malformed = |source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        };
        let raw: serde_json::Value = serde_json::from_str(&content).map_err(malformed)?;
        let state = serde_json::from_value(migrate_document(raw)).map_err(malformed)?;
        Ok(Some(state))
    }

    /// Load the stored state, falling back to the empty default state when
    /// the document is missing or unreadable. Never fails.
    pub fn load(&self) -> AppState {
        match self.try_load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                debug!(path = %self.path.display(), "no saved state, starting fresh");
                AppState::default()
            }
            Err(e) => {
                warn!("Failed to load saved state, resetting to default: {e}");
                AppState::default()
            }
        }
    }

    /// Replace the stored document with `state`.
    pub fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let write_failed = |source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        };
        let content = serde_json::to_string_pretty(state).map_err(|e| write_failed(e.into()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_failed)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(write_failed)?;
        std::fs::rename(&tmp, &self.path).map_err(write_failed)?;

        debug!(path = %self.path.display(), records = state.records.len(), "state saved");
        Ok(())
    }

    /// Delete the stored document. Missing documents are not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
