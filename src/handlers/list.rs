use crate::models::Todo;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /todo handler - List all todos
///
/// Returns every stored todo in the order it was created.
#[utoipa::path(
    get,
    path = routes::TODO_LIST,
    responses(
        (status = 200, description = "All todos in insertion order", body = Vec<Todo>)
    ),
    tag = "todo"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Todo>>) {
    tracing::info!("Reading all todos");

    let todos = state.store.list().await;
    tracing::debug!(count = todos.len(), "Listed todos");

    (StatusCode::OK, Json(todos))
}
