//! Backend Module
//!
//! Server-side code for the Trip Wizards chat service: an Axum HTTP server
//! with a per-trip chat WebSocket and a small REST surface.
//!
//! # Architecture
//!
//! - **`server`** - Composition root, application state, store selection
//! - **`routes`** - Route configuration and middleware
//! - **`chat`** - Connection registry, broadcast dispatcher, WebSocket handler, persistence
//! - **`api`** - Root, health, suggestion and stats handlers
//! - **`assistant`** - Suggestion responder and assistant service client
//! - **`error`** - Backend error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Initialization and state
//! ├── routes/         - Route configuration
//! ├── chat/           - Real-time trip chat
//! ├── api/            - REST handlers
//! ├── assistant/      - Assistant integration
//! └── error/          - Error types
//! ```
//!
//! # Thread Safety
//!
//! - `Arc<RwLock<>>` for the connection registry
//! - One unbounded `mpsc` channel per chat connection for outbound frames
//! - `Arc<dyn ChatStore>` for persistence
//! - Axum handlers are `Send + Sync`

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Real-time trip chat
pub mod chat;

/// REST handlers
pub mod api;

/// Assistant integration
pub mod assistant;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use chat::{ChatDispatcher, ConnectionRegistry};
pub use error::BackendError;
