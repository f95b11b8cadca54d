/**
 * Chat Route Configuration
 *
 * # Routes
 *
 * - `GET /ws/chat/{trip_id}` - WebSocket chat channel for one trip
 * - `GET /api/v1/chat/stats` - Open connections per trip
 */

use axum::Router;
use crate::backend::api::handle_chat_stats;
use crate::backend::chat::handle_chat_websocket;
use crate::backend::server::state::AppState;

/// Configure chat-related routes
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(
            "/ws/chat/{trip_id}",
            axum::routing::get(handle_chat_websocket),
        )
        .route(
            "/api/v1/chat/stats",
            axum::routing::get(handle_chat_stats),
        )
}
