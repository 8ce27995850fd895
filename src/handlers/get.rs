use crate::error::{ApiError, ErrorResponse};
use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /todo/:id handler - Retrieve a todo
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = String, Path, description = "Id assigned to the todo at creation")
    ),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 404, description = "Todo not found", body = ErrorResponse)
    ),
    tag = "todo"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(todo_id): Path<String>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    tracing::info!(todo_id = %todo_id, "Reading a todo");

    match state.store.get(&todo_id).await {
        Some(todo) => Ok((StatusCode::OK, Json(todo))),
        None => {
            tracing::error!(todo_id = %todo_id, "Todo not found");
            Err(ApiError::TodoNotFound)
        }
    }
}
