use tracing::{info, warn};
use validator::Validate;

use crate::{
    dao::{match_store::AddPointsError, storage::StorageError},
    dto::matches::{AddPointsRequest, MatchView, ScoreUpdateResponse, TeamNamesRequest},
    error::ServiceError,
    state::{
        SharedState,
        domino_match::{Match, MatchId, Team},
    },
};

/// Create and persist a new match.
pub async fn create_match(
    state: &SharedState,
    request: TeamNamesRequest,
) -> Result<MatchView, ServiceError> {
    request.validate()?;

    let game = state.match_store().create_match(request.into()).await?;
    let id = game.id().ok_or(StorageError::NotPersisted)?;
    info!(
        match_id = id,
        team1 = game.team_name(Team::Team1),
        team2 = game.team_name(Team::Team2),
        "match created"
    );

    Ok(MatchView::new(id, &game))
}

/// Fetch the current state of a match.
pub async fn get_match(state: &SharedState, id: MatchId) -> Result<MatchView, ServiceError> {
    let game = load_match(state, id).await?;
    Ok(MatchView::new(id, &game))
}

/// Apply one scoring round.
///
/// A finished match is not an error for clients: the current, unchanged state is
/// returned with `applied` set to `false`.
pub async fn add_points(
    state: &SharedState,
    id: MatchId,
    request: AddPointsRequest,
) -> Result<ScoreUpdateResponse, ServiceError> {
    let outcome = state
        .match_store()
        .add_points(id, request.team1_points, request.team2_points)
        .await;

    match outcome {
        Ok(game) => {
            if game.is_over() {
                info!(match_id = id, winner = ?game.winner(), "match over");
            }
            Ok(ScoreUpdateResponse {
                applied: true,
                game: MatchView::new(id, &game),
            })
        }
        Err(AddPointsError::GameOver(err)) => {
            warn!(match_id = id, error = %err, "points discarded");
            let game = load_match(state, id).await?;
            Ok(ScoreUpdateResponse {
                applied: false,
                game: MatchView::new(id, &game),
            })
        }
        Err(AddPointsError::NotFound(id)) => Err(match_not_found(id)),
        Err(AddPointsError::Storage(err)) => Err(err.into()),
    }
}

/// Rename one or both teams. Empty names keep the current name.
///
/// Renaming stays possible after the match is over; scores are written back unchanged.
pub async fn rename_teams(
    state: &SharedState,
    id: MatchId,
    request: TeamNamesRequest,
) -> Result<MatchView, ServiceError> {
    request.validate()?;

    let mut game = load_match(state, id).await?;
    game.rename_team(Team::Team1, request.team1_name);
    game.rename_team(Team::Team2, request.team2_name);
    state.match_store().update_match(game.clone()).await?;

    Ok(MatchView::new(id, &game))
}

async fn load_match(state: &SharedState, id: MatchId) -> Result<Match, ServiceError> {
    state
        .match_store()
        .get_match(id)
        .await?
        .ok_or_else(|| match_not_found(id))
}

fn match_not_found(id: MatchId) -> ServiceError {
    warn!(match_id = id, "match not found");
    ServiceError::NotFound(format!("match `{id}` not found"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        dao::match_store::sqlite::{SqliteConfig, SqliteMatchStore},
        dto::phase::{TeamSlot, VisibleMatchPhase},
        state::AppState,
    };

    async fn test_state() -> SharedState {
        let store = SqliteMatchStore::open(SqliteConfig::in_memory())
            .await
            .expect("open in-memory store");
        AppState::new(Arc::new(store))
    }

    fn names(team1: &str, team2: &str) -> TeamNamesRequest {
        TeamNamesRequest {
            team1_name: team1.into(),
            team2_name: team2.into(),
        }
    }

    fn points(team1_points: i32, team2_points: i32) -> AddPointsRequest {
        AddPointsRequest {
            team1_points,
            team2_points,
        }
    }

    #[tokio::test]
    async fn create_then_score_then_fetch() {
        let state = test_state().await;
        let created = create_match(&state, names("foo", "bar")).await.unwrap();
        assert_eq!(created.team1.name, "foo");
        assert_eq!(created.team2.name, "bar");

        let update = add_points(&state, created.id, points(20, 0)).await.unwrap();
        assert!(update.applied);

        let fetched = get_match(&state, created.id).await.unwrap();
        assert_eq!(fetched.team1.score, 20);
        assert_eq!(fetched.team2.score, 0);
        assert_eq!(fetched.team1.name, "foo");
        assert_eq!(fetched.phase, VisibleMatchPhase::InProgress);
    }

    #[tokio::test]
    async fn finished_match_returns_current_state_unapplied() {
        let state = test_state().await;
        let id = create_match(&state, names("", "")).await.unwrap().id;

        add_points(&state, id, points(0, 199)).await.unwrap();
        let crossing = add_points(&state, id, points(0, 10)).await.unwrap();
        assert!(crossing.applied);
        assert_eq!(crossing.game.team2.score, 209);
        assert_eq!(crossing.game.winner, Some(TeamSlot::Team2));

        let rejected = add_points(&state, id, points(10, 10)).await.unwrap();
        assert!(!rejected.applied);
        assert_eq!(rejected.game.team1.score, 0);
        assert_eq!(rejected.game.team2.score, 209);
        assert_eq!(rejected.game.phase, VisibleMatchPhase::Over);
    }

    #[tokio::test]
    async fn unknown_match_is_not_found() {
        let state = test_state().await;
        assert!(matches!(
            get_match(&state, 77).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            add_points(&state, 77, points(1, 1)).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            rename_teams(&state, 77, names("a", "b")).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn rename_keeps_scores_and_ignores_empty_names() {
        let state = test_state().await;
        let id = create_match(&state, names("foo", "bar")).await.unwrap().id;
        add_points(&state, id, points(30, 5)).await.unwrap();

        let renamed = rename_teams(&state, id, names("", "baz")).await.unwrap();
        assert_eq!(renamed.team1.name, "foo");
        assert_eq!(renamed.team2.name, "baz");

        let fetched = get_match(&state, id).await.unwrap();
        assert_eq!(fetched, renamed);
        assert_eq!(fetched.team1.score, 30);
        assert_eq!(fetched.team2.score, 5);
    }

    #[tokio::test]
    async fn overlong_names_are_invalid_input() {
        let state = test_state().await;
        let result = create_match(&state, names(&"x".repeat(80), "")).await;
        assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    }
}
