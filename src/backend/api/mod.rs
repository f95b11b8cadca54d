//! REST API Module
//!
//! - `GET /` - Service banner
//! - `GET /health` - Collaborator health report
//! - `POST /ai/suggest` - Keyword-based trip suggestions
//! - `GET /api/v1/chat/stats` - Open chat connections per trip

/// Root, suggestion and stats handlers
pub mod handlers;

/// Health report
pub mod health;

pub use handlers::{handle_chat_stats, handle_not_found, handle_root, handle_suggest, ChatStats, TripStats};
pub use health::{handle_health, HealthReport, ServiceHealth};
