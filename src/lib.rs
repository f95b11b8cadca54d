//! Trip Wizards - Chat Backend Library
//!
//! Trip Wizards is a collaborative trip-planning service. This crate is its
//! backend: a real-time chat channel per trip, where every message is
//! persisted (best-effort) and broadcast to everyone connected to that trip,
//! plus a small REST surface for health and assistant suggestions.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, client-input errors and configuration
//!   - `ChatMessage`, `InboundFrame`, `ChatMessageRecord`
//!   - `SharedError`, `ServerConfig`
//!
//! - **`backend`** - The Axum server
//!   - Connection registry and broadcast dispatcher
//!   - PostgreSQL or in-memory persistence
//!   - Health and suggestion endpoints
//!
//! # Usage
//!
//! ```rust,no_run
//! use tripwizards::backend::server::create_app;
//! use tripwizards::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Chat Protocol
//!
//! Clients connect to `GET /ws/chat/{trip_id}` and exchange UTF-8 JSON text
//! frames:
//!
//! ```json
//! { "message": "Meet at the station", "sender": "alice", "isAgent": false,
//!   "timestamp": "2026-10-18T09:00:00.000Z", "trip_id": "trip-42" }
//! ```
//!
//! `timestamp` and `trip_id` are always assigned by the server.
//!
//! # Thread Safety
//!
//! - **Registry**: `Arc<RwLock<HashMap<..>>>`, never locked across a send
//! - **Connections**: one reader task and one writer task each
//!
//! # Error Handling
//!
//! - `shared::SharedError` for bad client input
//! - `backend::error::BackendError` for server failures, convertible to HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
