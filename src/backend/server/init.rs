/**
 * Server Initialization
 *
 * This module is the composition root: it builds the chat store, the
 * connection registry, the dispatcher and the assistant client exactly once,
 * and hands them to the router as `AppState`.
 *
 * # Initialization Process
 *
 * 1. Load the chat store (PostgreSQL or in-memory)
 * 2. Create the assistant client
 * 3. Build `AppState` (registry + dispatcher)
 * 4. Create the router
 */

use axum::Router;

use crate::backend::assistant::AssistantClient;
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::shared::ServerConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// - Missing or unreachable database: the in-memory store is used
/// - Migration failures: logged but don't prevent startup
/// - Failing to build the HTTP client for the assistant is returned as an error
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Trip Wizards chat server");

    let store = load_store(config).await;
    tracing::info!("Chat store ready: {}", store.name());

    let assistant = AssistantClient::new(config.assistant_health_url.clone())?;
    match assistant.health_url() {
        Some(url) => tracing::info!("Assistant health checks against {}", url),
        None => tracing::info!("Assistant health URL not configured"),
    }

    let app_state = AppState::new(store, assistant, config);

    Ok(create_router(app_state))
}
