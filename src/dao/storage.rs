use std::error::Error;
use thiserror::Error;

use crate::state::domino_match::MatchId;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend was configured with unusable settings.
    #[error("invalid storage configuration: {0}")]
    InvalidConfig(String),
    /// The match was never persisted and carries no identifier.
    #[error("match has not been persisted yet")]
    NotPersisted,
    /// No stored record carries the identifier.
    #[error("no stored record for match `{id}`")]
    MissingRecord { id: MatchId },
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
