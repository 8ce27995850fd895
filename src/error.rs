use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub todos: usize,
}

/// Custom error type for API endpoints
///
/// All variants are expected outcomes of a request, not faults. They are
/// rendered as `{"detail": ...}` JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is malformed or a required field is missing
    Validation(String),
    /// No todo is stored under the requested id
    TodoNotFound,
    /// No route matches the request path
    RouteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::TodoNotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
