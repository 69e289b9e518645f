use std::path::PathBuf;

use serde_json::Value;
use timecard_core::{AppError, AppResult};
use tracing::info;

/// Stored session user payload on disk.
///
/// Mirrors what the client keeps in browser storage: the raw user JSON as
/// returned by the backend at sign-in.
#[derive(Debug, Clone)]
pub struct JsonSessionFile {
    path: PathBuf,
}

impl JsonSessionFile {
    /// Creates a handle for the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and parses the stored payload.
    pub async fn load(&self) -> AppResult<Value> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|error| {
                AppError::NotFound(format!(
                    "failed to read session file '{}': {error}",
                    self.path.display()
                ))
            })?;

        let payload: Value = serde_json::from_str(&contents).map_err(|error| {
            AppError::Validation(format!(
                "session file '{}' is not valid JSON: {error}",
                self.path.display()
            ))
        })?;

        info!(path = %self.path.display(), "session file loaded");
        Ok(payload)
    }
}
