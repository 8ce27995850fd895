use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::JsonRejection, extract::Path, extract::State, http::StatusCode, Json,
};

/// PUT /todo/:id handler - Replace a todo
///
/// The stored record is replaced as a whole; omitted `completed` resets it
/// to false. The body is validated before the id is looked up.
#[utoipa::path(
    put,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id assigned to the todo at creation")
    ),
    request_body = Todo,
    responses(
        (status = 200, description = "Todo replaced", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Missing or invalid name, or malformed JSON", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
    payload: Result<Json<Todo>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let Json(updated) = payload?;
    tracing::info!(todo_id = %todo_id, "Updating todo");

    match state.store.update(&todo_id, updated).await {
        Some(todo) => Ok((StatusCode::OK, Json(todo))),
        None => {
            tracing::error!(todo_id = %todo_id, "Todo not found for update");
            Err(ApiError::TodoNotFound)
        }
    }
}
