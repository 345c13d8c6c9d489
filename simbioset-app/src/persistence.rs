//! JSON file persistence for client-owned state.

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Load a JSON value from disk. `Ok(None)` when the file does not exist.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let value = serde_json::from_str::<T>(&contents)?;
    Ok(Some(value))
}

/// Load with corruption recovery: a missing or unreadable file becomes the
/// default, logged and never surfaced to the caller.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load::<T>(path) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err,
                "corrupt local state, resetting to empty");
            T::default()
        }
    }
}

pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(value)?;
    std::fs::write(path, contents)?;
    Ok(())
}
