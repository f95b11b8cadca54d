/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Middleware
 *
 * - `TraceLayer` logs every HTTP request through `tracing`
 * - `CorsLayer::permissive()` accepts any origin, method and header
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::api::handle_not_found;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::chat_routes::configure_chat_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// 1. **Chat Routes**: WebSocket chat channel, connection stats
/// 2. **API Routes**: root, health, suggestions
/// 3. **Fallback Handler**: JSON 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_chat_routes(Router::new());
    let router = configure_api_routes(router);

    router
        .fallback(handle_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
