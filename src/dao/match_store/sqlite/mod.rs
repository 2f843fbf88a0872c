mod config;
mod error;
mod store;

pub use config::{SqliteConfig, SqliteLocation};
pub use error::SqliteDaoError;
pub use store::SqliteMatchStore;

use crate::dao::{match_store::AddPointsError, storage::StorageError};

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        match err {
            SqliteDaoError::EmptyPath => StorageError::InvalidConfig(err.to_string()),
            SqliteDaoError::MissingRecord { id } => StorageError::MissingRecord { id },
            other => StorageError::unavailable(other.to_string(), other),
        }
    }
}

impl From<SqliteDaoError> for AddPointsError {
    fn from(err: SqliteDaoError) -> Self {
        AddPointsError::Storage(err.into())
    }
}
