/**
 * API Route Configuration
 *
 * # Routes
 *
 * - `GET /` - Service banner
 * - `GET /health` - Health report for store, assistant and chat
 * - `POST /ai/suggest` - Trip suggestions
 */

use axum::Router;
use crate::backend::api::{handle_health, handle_root, handle_suggest};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", axum::routing::get(handle_root))
        .route("/health", axum::routing::get(handle_health))
        .route("/ai/suggest", axum::routing::post(handle_suggest))
}
