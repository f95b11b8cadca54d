//! Common test utilities and helpers
//!
//! - Server fixtures bound to an ephemeral port
//! - WebSocket client helpers
//! - Chat stores with scripted failures
//! - PostgreSQL fixtures

pub mod database;
pub mod server;
pub mod stores;

// Re-export commonly used utilities
pub use database::*;
pub use server::*;
pub use stores::*;
