use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Domino Count.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::matches::create_match,
        crate::routes::matches::get_match,
        crate::routes::matches::add_points,
        crate::routes::matches::rename_teams,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::matches::TeamNamesRequest,
            crate::dto::matches::AddPointsRequest,
            crate::dto::matches::MatchView,
            crate::dto::matches::TeamScore,
            crate::dto::matches::ScoreUpdateResponse,
            crate::dto::phase::VisibleMatchPhase,
            crate::dto::phase::TeamSlot,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "matches", description = "Create, score and rename domino matches"),
    )
)]
pub struct ApiDoc;
