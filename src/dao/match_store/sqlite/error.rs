//! Error types shared by the SQLite storage implementation.

use thiserror::Error;

use crate::{dao::models::ScoreOutOfRange, state::domino_match::MatchId};

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while interacting with SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The configured database path is empty.
    #[error("db path cannot be empty")]
    EmptyPath,
    /// The database could not be opened.
    #[error("failed to open SQLite database `{path}`")]
    Open {
        path: String,
        #[source]
        source: sqlx::Error,
    },
    /// Creating the `matches` table failed.
    #[error("failed to ensure the matches table exists")]
    EnsureSchema {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to insert match")]
    InsertMatch {
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to load match `{id}`")]
    LoadMatch {
        id: MatchId,
        #[source]
        source: sqlx::Error,
    },
    #[error("failed to update match `{id}`")]
    UpdateMatch {
        id: MatchId,
        #[source]
        source: sqlx::Error,
    },
    /// Beginning or committing the add-points transaction failed.
    #[error("transaction on match `{id}` failed")]
    Transaction {
        id: MatchId,
        #[source]
        source: sqlx::Error,
    },
    /// A stored row could not be turned into a match.
    #[error("stored match is corrupted")]
    Corrupted(#[from] ScoreOutOfRange),
    /// An update targeted an identifier with no row.
    #[error("no stored record for match `{id}`")]
    MissingRecord { id: MatchId },
    #[error("SQLite health ping failed")]
    HealthPing {
        #[source]
        source: sqlx::Error,
    },
}
