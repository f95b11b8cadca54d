//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware
//! ├── chat_routes.rs  - Chat WebSocket and stats
//! └── api_routes.rs   - Root, health and suggestion endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /ws/chat/{trip_id}` - Trip chat WebSocket
//! - `GET /api/v1/chat/stats` - Connections per trip
//! - `GET /` - Service banner
//! - `GET /health` - Health report
//! - `POST /ai/suggest` - Suggestions

/// Main router creation
pub mod router;

/// Chat-related routes
pub mod chat_routes;

/// API routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
