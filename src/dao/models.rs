use thiserror::Error;

use crate::state::domino_match::{Match, MatchId};

/// Row of the `matches` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct MatchEntity {
    /// Primary key, assigned by the database on insert.
    pub id: MatchId,
    /// Display name of the first team.
    pub team1_name: String,
    /// Display name of the second team.
    pub team2_name: String,
    /// Score of the first team.
    pub team1_score: i64,
    /// Score of the second team.
    pub team2_score: i64,
}

/// A stored score that does not fit the in-memory representation.
#[derive(Debug, Error)]
#[error("match `{id}` has an out-of-range score ({score})")]
pub struct ScoreOutOfRange {
    /// Identifier of the offending row.
    pub id: MatchId,
    /// Raw value read from the database.
    pub score: i64,
}

impl TryFrom<MatchEntity> for Match {
    type Error = ScoreOutOfRange;

    fn try_from(entity: MatchEntity) -> Result<Self, Self::Error> {
        let id = entity.id;
        let score = |raw: i64| u32::try_from(raw).map_err(|_| ScoreOutOfRange { id, score: raw });

        Ok(Match::restore(
            id,
            entity.team1_name,
            entity.team2_name,
            score(entity.team1_score)?,
            score(entity.team2_score)?,
        ))
    }
}
