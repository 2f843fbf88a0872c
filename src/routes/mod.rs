use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{services::documentation::ApiDoc, state::SharedState};

pub mod health;
pub mod matches;

/// Compose all route trees with the Swagger UI and attach the shared state.
pub fn router(state: SharedState) -> Router<()> {
    let docs = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    health::router()
        .merge(matches::router())
        .merge(docs)
        .with_state(state)
}
