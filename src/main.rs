// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::canned_chat_backend::CannedChatBackend;
use crate::infrastructure::config::load_app_config;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("grocery_heartbeat=info,tower_http=info")),
        )
        .init();

    // Load and validate configuration
    let app_config = load_app_config()?;
    let addr = app_config.server.socket_addr()?;

    // Create services (application layer)
    let state = Arc::new(AppState::new(&app_config, Arc::new(CannedChatBackend))?);

    // Build router (presentation layer)
    let router = build_router(state);

    tracing::info!("Starting grocery-heartbeat service on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
