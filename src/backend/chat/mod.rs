//! Trip Chat Module
//!
//! Real-time chat for trips: every WebSocket connected to
//! `/ws/chat/{trip_id}` receives every message sent on that trip.
//!
//! # Architecture
//!
//! - **`registry`** - Trip id to open connections, with join/leave/snapshot
//! - **`dispatcher`** - Stamps, persists and fans out inbound messages
//! - **`handlers`** - WebSocket upgrade and per-connection receive loop
//! - **`store`** - `ChatStore` trait and the in-memory store
//! - **`db`** - PostgreSQL `ChatStore`
//!
//! # Delivery
//!
//! Delivery is best-effort and local to this process. Two server instances
//! keep independent registries, so participants connected to different
//! instances do not see each other's messages without an external fan-out
//! layer.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tripwizards::backend::chat::{ChatDispatcher, ConnectionRegistry, MemoryChatStore};
//!
//! # async fn example() {
//! let dispatcher = ChatDispatcher::new(ConnectionRegistry::new(), Arc::new(MemoryChatStore::new()));
//! let report = dispatcher
//!     .handle_frame("trip-42", r#"{"message":"Flight lands at 6","sender":"alice"}"#)
//!     .await;
//! # }
//! ```

/// Connection registry
pub mod registry;

/// Broadcast dispatcher
pub mod dispatcher;

/// WebSocket handlers
pub mod handlers;

/// Persistence trait and in-memory store
pub mod store;

/// PostgreSQL persistence
pub mod db;

/// Re-export commonly used types
pub use registry::{ConnectionHandle, ConnectionId, ConnectionRegistry};
pub use dispatcher::{ChatDispatcher, DispatchReport};
pub use store::{ChatStore, MemoryChatStore, SharedChatStore};
pub use db::PgChatStore;
pub use handlers::handle_chat_websocket;
