// HTTP request handlers
use crate::domain::screen::Screen;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, Response, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub seed: Option<u64>,
    #[serde(default)]
    pub show_pattern: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChatQueryRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Sidebar navigation
pub async fn navigation(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let nav = state.navigation_service.navigation();
    into_response(json_response(StatusCode::OK, &nav, accepts_brotli(&headers)).await)
}

/// Render one screen
pub async fn screen_view(
    Path(screen): Path<String>,
    Query(query): Query<RenderQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);

    let screen: Screen = match screen.parse() {
        Ok(screen) => screen,
        Err(e) => {
            tracing::debug!("{}", e);
            let body = ErrorBody { error: e.to_string() };
            return into_response(json_response(StatusCode::NOT_FOUND, &body, compress).await);
        }
    };

    match state
        .navigation_service
        .render(screen, query.seed, query.show_pattern)
    {
        Ok(view) => into_response(json_response(StatusCode::OK, &view, compress).await),
        Err(e) => {
            tracing::error!("Error rendering screen {}: {}", screen.id(), e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Accept a free-text chat query and return the (unchanged) chat screen
pub async fn chat_query(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatQueryRequest>,
) -> impl IntoResponse {
    state.chat_service.accept_query(&request.text).await;

    let screen = state.chat_service.chat_screen(false);
    into_response(json_response(StatusCode::OK, &screen, accepts_brotli(&headers)).await)
}

fn into_response(result: Result<Response<Body>, StatusCode>) -> axum::response::Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
