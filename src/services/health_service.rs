use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report whether the match store answers, logging connectivity issues.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.match_store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}
