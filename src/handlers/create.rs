use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};

/// POST /todo handler - Create a todo
///
/// Waits for the configured create delay before storing the record. The
/// assigned id is logged but not returned; it is the next value of the
/// store's id counter.
#[utoipa::path(
    post,
    path = routes::TODO_LIST,
    request_body = Todo,
    responses(
        (status = 200, description = "Todo created", body = Todo),
        (status = 422, description = "Missing or invalid name, or malformed JSON", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(todo) = payload.map_err(|rejection| {
        tracing::warn!(reason = %rejection.body_text(), "Rejected todo payload");
        ApiError::from(rejection)
    })?;

    let (todo_id, todo) = state.store.create(todo).await;
    tracing::info!(
        todo_id = %todo_id,
        name = %todo.name,
        completed = todo.completed,
        "Todo created"
    );

    Ok((StatusCode::OK, Json(todo)))
}
