use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::domino_match::{MatchPhase, Team};

/// Match phase exposed to clients.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisibleMatchPhase {
    /// Scores can still change.
    InProgress,
    /// A team reached the win threshold; scores are final.
    Over,
}

impl From<MatchPhase> for VisibleMatchPhase {
    fn from(value: MatchPhase) -> Self {
        match value {
            MatchPhase::InProgress => VisibleMatchPhase::InProgress,
            MatchPhase::Over => VisibleMatchPhase::Over,
        }
    }
}

/// Team selector as it appears on the wire (`"team1"` / `"team2"`).
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TeamSlot {
    /// First team.
    Team1,
    /// Second team.
    Team2,
}

impl From<Team> for TeamSlot {
    fn from(value: Team) -> Self {
        match value {
            Team::Team1 => TeamSlot::Team1,
            Team::Team2 => TeamSlot::Team2,
        }
    }
}
