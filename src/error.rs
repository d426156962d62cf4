use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for crucialy operations
#[derive(Error, Debug)]
pub enum CrucialyError {
    #[error("Error reading commit message file: {}\nDetails: {source}", path.display())]
    ReadMessage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install {}: {source}", path.display())]
    Install {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid commit pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results in crucialy
pub type Result<T> = std::result::Result<T, CrucialyError>;

impl CrucialyError {
    /// Create a read error for a commit message file
    pub fn read_message(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrucialyError::ReadMessage {
            path: path.into(),
            source,
        }
    }

    /// Create an install error for a hook or config file
    pub fn install(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CrucialyError::Install {
            path: path.into(),
            source,
        }
    }
}
