use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde_json::{Value, json};
use tracing::error;

use super::AppState;
use crate::core::models::CreateTodoRequest;
use crate::errors::AppError;
use crate::pipeline;

static INDEX_HTML: &str = include_str!("../../web/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /todos - insert one row. The new id is not returned; the client
/// re-lists to see it.
pub async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTodoRequest>,
) -> (StatusCode, Json<Value>) {
    match state.store.create(payload.title.as_deref()).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Todo saved successfully!" })),
        ),
        Err(e) => {
            error!("Error saving todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error saving todo" })),
            )
        }
    }
}

/// GET /todos - all rows, store order.
pub async fn list_todos(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list().await {
        Ok(todos) => (StatusCode::OK, Json(todos)).into_response(),
        Err(e) => {
            error!("Error fetching todos: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error fetching todos" })),
            )
                .into_response()
        }
    }
}

/// DELETE /todos/:id - a missing id still answers 200; the store does not
/// distinguish it from a successful delete.
pub async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    match state.store.delete(&id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Todo deleted successfully" })),
        ),
        Err(e) => {
            error!("Error deleting todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error deleting todo" })),
            )
        }
    }
}

/// POST /summarize - run the whole pipeline. An empty list is the only
/// client error; every other failure collapses to a generic 500 with the
/// cause kept in the logs.
pub async fn summarize(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    match pipeline::run_summarize(
        state.store.as_ref(),
        state.generator.as_ref(),
        state.notifier.as_ref(),
    )
    .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(json!({ "message": "Summary sent to Slack", "summary": summary })),
        ),
        Err(AppError::EmptyInput) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "No todos to summarize" })),
        ),
        Err(e) => {
            error!("Error summarizing todos: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Error summarizing todos" })),
            )
        }
    }
}
