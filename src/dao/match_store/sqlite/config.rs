use std::{path::PathBuf, time::Duration};

/// How long a writer waits for a competing write lock before giving up.
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5_000);
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Where the SQLite database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqliteLocation {
    /// Database file on disk, created when missing.
    File(PathBuf),
    /// Private in-memory database, gone once the store is dropped.
    Memory,
}

/// Runtime configuration describing how to open the SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub location: SqliteLocation,
    pub busy_timeout: Duration,
    pub max_connections: u32,
}

impl SqliteConfig {
    /// Configuration for a database file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            location: SqliteLocation::File(path.into()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Configuration for a throwaway in-memory database.
    ///
    /// A single connection is kept open for the lifetime of the pool so the data
    /// survives between queries.
    pub fn in_memory() -> Self {
        Self {
            location: SqliteLocation::Memory,
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            max_connections: 1,
        }
    }
}
