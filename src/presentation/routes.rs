use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{chat_query, health_check, navigation, screen_view};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

// Compression is handled in the response builders, not by a tower layer.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/screens", get(navigation))
        .route("/screens/:screen", get(screen_view))
        .route("/chat/query", post(chat_query))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
