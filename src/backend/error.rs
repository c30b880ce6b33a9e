use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage i/o failed on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("failed to serialize entries: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Stored content exists but cannot be understood.
    #[error("stored state under {key:?} is corrupt: {reason}")]
    Corrupt {
        key: String,
        reason: String
    }
}

pub type Result<T> = std::result::Result<T, PersistenceError>;
