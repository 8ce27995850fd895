use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /todo/:id handler - Remove a todo and return it
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id assigned to the todo at creation")
    ),
    responses(
        (status = 200, description = "Todo removed; body is the removed record", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    tracing::info!(todo_id = %todo_id, "Deleting todo");

    match state.store.delete(&todo_id).await {
        Some(todo) => Ok((StatusCode::OK, Json(todo))),
        None => {
            tracing::error!(todo_id = %todo_id, "Todo not found for deletion");
            Err(ApiError::TodoNotFound)
        }
    }
}
