use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// The store lives in process memory, so a response at all means the
/// service is healthy. The current record count is included.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let todos = state.store.len().await;
    tracing::debug!(todos, "Health check passed");

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            todos,
        }),
    )
}
