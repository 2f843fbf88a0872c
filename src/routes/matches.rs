use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderName, StatusCode, header},
    routing::{get, post, put},
};

use crate::{
    dto::matches::{AddPointsRequest, MatchView, ScoreUpdateResponse, TeamNamesRequest},
    error::AppError,
    services::match_service,
    state::{SharedState, domino_match::MatchId},
};

/// Routes creating, reading and scoring matches.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches", post(create_match))
        .route("/matches/{id}", get(get_match).patch(add_points))
        .route("/matches/{id}/teams", put(rename_teams))
}

/// Create a match, optionally naming both teams.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = TeamNamesRequest,
    responses(
        (status = 201, description = "Match created", body = MatchView,
            headers(("Location" = String, description = "Path of the new match"))),
        (status = 400, description = "Invalid team name")
    )
)]
pub async fn create_match(
    State(state): State<SharedState>,
    Json(payload): Json<TeamNamesRequest>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<MatchView>), AppError> {
    let view = match_service::create_match(&state, payload).await?;
    let location = format!("/matches/{}", view.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(view),
    ))
}

/// Retrieve a match by its ID.
#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = i64, Path, description = "Identifier of the match")),
    responses(
        (status = 200, description = "Match", body = MatchView),
        (status = 404, description = "Unknown match")
    )
)]
pub async fn get_match(
    State(state): State<SharedState>,
    Path(id): Path<MatchId>,
) -> Result<Json<MatchView>, AppError> {
    Ok(Json(match_service::get_match(&state, id).await?))
}

/// Add one round of points to both teams.
#[utoipa::path(
    patch,
    path = "/matches/{id}",
    tag = "matches",
    params(("id" = i64, Path, description = "Identifier of the match")),
    request_body = AddPointsRequest,
    responses(
        (status = 200, description = "Round processed; `applied` is false once the match is over",
            body = ScoreUpdateResponse),
        (status = 404, description = "Unknown match")
    )
)]
pub async fn add_points(
    State(state): State<SharedState>,
    Path(id): Path<MatchId>,
    Json(payload): Json<AddPointsRequest>,
) -> Result<Json<ScoreUpdateResponse>, AppError> {
    Ok(Json(match_service::add_points(&state, id, payload).await?))
}

/// Rename the teams of a match. Empty names are ignored.
#[utoipa::path(
    put,
    path = "/matches/{id}/teams",
    tag = "matches",
    params(("id" = i64, Path, description = "Identifier of the match")),
    request_body = TeamNamesRequest,
    responses(
        (status = 200, description = "Teams renamed", body = MatchView),
        (status = 400, description = "Invalid team name"),
        (status = 404, description = "Unknown match")
    )
)]
pub async fn rename_teams(
    State(state): State<SharedState>,
    Path(id): Path<MatchId>,
    Json(payload): Json<TeamNamesRequest>,
) -> Result<Json<MatchView>, AppError> {
    Ok(Json(match_service::rename_teams(&state, id, payload).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::response::IntoResponse;

    use super::*;
    use crate::{
        dao::match_store::sqlite::{SqliteConfig, SqliteMatchStore},
        state::AppState,
    };

    async fn test_state() -> SharedState {
        let store = SqliteMatchStore::open(SqliteConfig::in_memory())
            .await
            .expect("open in-memory store");
        AppState::new(Arc::new(store))
    }

    async fn create(state: &SharedState, team1: &str, team2: &str) -> MatchView {
        let payload = TeamNamesRequest {
            team1_name: team1.into(),
            team2_name: team2.into(),
        };
        let (_, _, Json(view)) = create_match(State(state.clone()), Json(payload))
            .await
            .unwrap();
        view
    }

    #[tokio::test]
    async fn create_answers_201_with_location() {
        let state = test_state().await;
        let payload = TeamNamesRequest {
            team1_name: "foo".into(),
            team2_name: "bar".into(),
        };

        let (status, [(name, location)], Json(view)) =
            create_match(State(state.clone()), Json(payload)).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(name, header::LOCATION);
        assert_eq!(location, format!("/matches/{}", view.id));
        assert_eq!(view.team1.name, "foo");

        let Json(fetched) = get_match(State(state), Path(view.id)).await.unwrap();
        assert_eq!(fetched, view);
    }

    #[tokio::test]
    async fn patch_adds_points() {
        let state = test_state().await;
        let view = create(&state, "foo", "bar").await;

        let payload = AddPointsRequest {
            team1_points: 20,
            team2_points: 0,
        };
        let Json(update) = add_points(State(state.clone()), Path(view.id), Json(payload))
            .await
            .unwrap();

        assert!(update.applied);
        assert_eq!(update.game.team1.score, 20);
        assert_eq!(update.game.team2.score, 0);
    }

    #[tokio::test]
    async fn unknown_match_answers_404() {
        let state = test_state().await;
        let response = get_match(State(state), Path(41)).await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_team_name_answers_400() {
        let state = test_state().await;
        let view = create(&state, "foo", "bar").await;
        let payload = TeamNamesRequest {
            team1_name: "bad\u{7}name".into(),
            team2_name: String::new(),
        };

        let response = rename_teams(State(state), Path(view.id), Json(payload))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn routes_compose_without_conflicts() {
        let state = test_state().await;
        let _router: Router<()> = crate::routes::router(state);
    }
}
