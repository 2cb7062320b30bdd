//! HTTP surface - thin adapters over the store and the summarize pipeline.

pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::CorsLayer;

use crate::clients::gemini::SummaryGenerator;
use crate::clients::store::TodoStore;
use crate::clients::webhook::SummaryNotifier;

/// Shared, immutable per-process state. Each collaborator is injected as a
/// trait object so the router can be exercised with in-memory fakes.
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    pub generator: Arc<dyn SummaryGenerator>,
    pub notifier: Arc<dyn SummaryNotifier>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/todos", post(handlers::create_todo).get(handlers::list_todos))
        .route("/todos/:id", delete(handlers::delete_todo))
        .route("/summarize", post(handlers::summarize))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
