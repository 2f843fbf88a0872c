pub mod sqlite;

use futures::future::BoxFuture;
use thiserror::Error;

use crate::dao::storage::{StorageError, StorageResult};
use crate::state::domino_match::{Match, MatchId, MatchOptions};

/// The match had already reached the win threshold; no points were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("match `{id}` is already over")]
pub struct GameOverError {
    /// Identifier of the finished match.
    pub id: MatchId,
}

/// Failures of [`MatchStore::add_points`].
#[derive(Debug, Error)]
pub enum AddPointsError {
    /// The match was over before the call; nothing changed.
    #[error(transparent)]
    GameOver(#[from] GameOverError),
    /// No match carries the identifier.
    #[error("match `{0}` not found")]
    NotFound(MatchId),
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Durable, identifier-keyed storage of matches.
pub trait MatchStore: Send + Sync {
    /// Build a match from `options`, persist it and return it with its identifier.
    fn create_match(&self, options: MatchOptions) -> BoxFuture<'static, StorageResult<Match>>;
    /// Current persisted state of a match, `None` when no record exists.
    fn get_match(&self, id: MatchId) -> BoxFuture<'static, StorageResult<Option<Match>>>;
    /// Overwrite the persisted names and scores. The game-over rule is not checked.
    fn update_match(&self, game: Match) -> BoxFuture<'static, StorageResult<()>>;
    /// Atomically add points to both teams unless the match is already over.
    fn add_points(
        &self,
        id: MatchId,
        team1_points: i32,
        team2_points: i32,
    ) -> BoxFuture<'static, Result<Match, AddPointsError>>;
    /// Round-trip to the backend.
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
