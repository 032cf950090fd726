mod config;
pub mod migrations;
pub mod state_store;

pub use config::Config;
pub use state_store::{StateStore, STORAGE_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `HABITHERO_DATA_DIR` overrides the location. Otherwise the directory is
/// `~/.config/habithero[-dev]/`, with the `-dev` suffix when
/// `HABITHERO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("HABITHERO_DATA_DIR") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("HABITHERO_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("habithero-dev")
            } else {
                base_dir.join("habithero")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
