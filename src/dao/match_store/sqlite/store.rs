use std::str::FromStr;

use futures::future::BoxFuture;
use sqlx::{
    Executor, Sqlite, SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use tracing::info;

use crate::dao::{
    match_store::{AddPointsError, GameOverError, MatchStore},
    models::MatchEntity,
    storage::{StorageError, StorageResult},
};
use crate::state::domino_match::{Match, MatchId, MatchOptions, Team};

use super::{
    config::{SqliteConfig, SqliteLocation},
    error::{SqliteDaoError, SqliteResult},
};

const CREATE_MATCH_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS matches (
    id INTEGER NOT NULL PRIMARY KEY,
    team1_name TEXT NOT NULL DEFAULT 'Team1',
    team2_name TEXT NOT NULL DEFAULT 'Team2',
    team1_score INTEGER NOT NULL DEFAULT 0,
    team2_score INTEGER NOT NULL DEFAULT 0
)
"#;
const INSERT_MATCH: &str = "INSERT INTO matches (team1_name, team2_name, team1_score, team2_score) VALUES (?, ?, ?, ?)";
const UPDATE_MATCH: &str = "UPDATE matches SET team1_name = ?, team2_name = ?, team1_score = ?, team2_score = ? WHERE id = ?";
const SELECT_MATCH: &str =
    "SELECT id, team1_name, team2_name, team1_score, team2_score FROM matches WHERE id = ?";

/// Match store backed by a SQLite database.
#[derive(Clone)]
pub struct SqliteMatchStore {
    pool: SqlitePool,
}

impl SqliteMatchStore {
    /// Open (creating when missing) the database and ensure the schema exists.
    pub async fn open(config: SqliteConfig) -> SqliteResult<Self> {
        let options = connect_options(&config)?;
        let label = match &config.location {
            SqliteLocation::File(path) => path.display().to_string(),
            SqliteLocation::Memory => ":memory:".to_owned(),
        };

        let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
        if config.location == SqliteLocation::Memory {
            // Every connection closing would drop the in-memory database.
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|source| SqliteDaoError::Open {
                path: label.clone(),
                source,
            })?;

        sqlx::query(CREATE_MATCH_TABLE)
            .execute(&pool)
            .await
            .map_err(|source| SqliteDaoError::EnsureSchema { source })?;

        info!(database = %label, "opened SQLite match store");
        Ok(Self { pool })
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Persist a new match built from `options` and return it with its identifier.
    pub async fn create_match(&self, options: MatchOptions) -> SqliteResult<Match> {
        let game = Match::new(options);
        let result = sqlx::query(INSERT_MATCH)
            .bind(game.team_name(Team::Team1))
            .bind(game.team_name(Team::Team2))
            .bind(i64::from(game.score(Team::Team1)))
            .bind(i64::from(game.score(Team::Team2)))
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::InsertMatch { source })?;

        Ok(game.with_id(result.last_insert_rowid()))
    }

    /// Fetch a match by id.
    pub async fn get_match(&self, id: MatchId) -> SqliteResult<Option<Match>> {
        fetch_match(&self.pool, id).await
    }

    /// Overwrite the stored names and scores of a persisted match.
    pub async fn update_match(&self, game: &Match) -> StorageResult<()> {
        let id = game.id().ok_or(StorageError::NotPersisted)?;
        write_match(&self.pool, id, game).await?;
        Ok(())
    }

    /// Add points to both teams inside a single transaction.
    ///
    /// The transaction takes the write lock before reading, so concurrent callers
    /// queue on the busy timeout and each one sees the scores committed before it.
    /// The game-over check happens once, before any points are applied, so a call
    /// that crosses the threshold is applied in full.
    pub async fn add_points(
        &self,
        id: MatchId,
        team1_points: i32,
        team2_points: i32,
    ) -> Result<Match, AddPointsError> {
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|source| SqliteDaoError::Transaction { id, source })?;

        let Some(mut game) = fetch_match(&mut *tx, id).await? else {
            return Err(AddPointsError::NotFound(id));
        };
        if game.is_over() {
            return Err(GameOverError { id }.into());
        }

        game.add_points(Team::Team1, team1_points);
        game.add_points(Team::Team2, team2_points);
        write_match(&mut *tx, id, &game).await?;

        tx.commit()
            .await
            .map_err(|source| SqliteDaoError::Transaction { id, source })?;
        Ok(game)
    }

    async fn ping(&self) -> SqliteResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::HealthPing { source })?;
        Ok(())
    }
}

fn connect_options(config: &SqliteConfig) -> SqliteResult<SqliteConnectOptions> {
    let options = match &config.location {
        SqliteLocation::File(path) => {
            if path.as_os_str().is_empty() {
                return Err(SqliteDaoError::EmptyPath);
            }
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
        }
        SqliteLocation::Memory => SqliteConnectOptions::from_str("sqlite::memory:").map_err(
            |source| SqliteDaoError::Open {
                path: ":memory:".to_owned(),
                source,
            },
        )?,
    };

    Ok(options.busy_timeout(config.busy_timeout).foreign_keys(true))
}

async fn fetch_match<'e, E>(executor: E, id: MatchId) -> SqliteResult<Option<Match>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let entity = sqlx::query_as::<_, MatchEntity>(SELECT_MATCH)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|source| SqliteDaoError::LoadMatch { id, source })?;

    Ok(entity.map(Match::try_from).transpose()?)
}

async fn write_match<'e, E>(executor: E, id: MatchId, game: &Match) -> SqliteResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(UPDATE_MATCH)
        .bind(game.team_name(Team::Team1))
        .bind(game.team_name(Team::Team2))
        .bind(i64::from(game.score(Team::Team1)))
        .bind(i64::from(game.score(Team::Team2)))
        .bind(id)
        .execute(executor)
        .await
        .map_err(|source| SqliteDaoError::UpdateMatch { id, source })?;

    if result.rows_affected() == 0 {
        return Err(SqliteDaoError::MissingRecord { id });
    }
    Ok(())
}

impl MatchStore for SqliteMatchStore {
    fn create_match(&self, options: MatchOptions) -> BoxFuture<'static, StorageResult<Match>> {
        let store = self.clone();
        Box::pin(async move { store.create_match(options).await.map_err(Into::into) })
    }

    fn get_match(&self, id: MatchId) -> BoxFuture<'static, StorageResult<Option<Match>>> {
        let store = self.clone();
        Box::pin(async move { store.get_match(id).await.map_err(Into::into) })
    }

    fn update_match(&self, game: Match) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.update_match(&game).await })
    }

    fn add_points(
        &self,
        id: MatchId,
        team1_points: i32,
        team2_points: i32,
    ) -> BoxFuture<'static, Result<Match, AddPointsError>> {
        let store = self.clone();
        Box::pin(async move { store.add_points(id, team1_points, team2_points).await })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.ping().await.map_err(Into::into) })
    }
}
