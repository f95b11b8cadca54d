//! Shared Module
//!
//! Types that describe what crosses the wire: chat frames, their persisted
//! record shape, client-input errors and server configuration. Nothing here
//! touches sockets or the database.

/// Chat message data structures
pub mod message;

/// Shared error types
pub mod error;

/// Server configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use message::{ChatMessage, ChatMessageRecord, InboundFrame};
pub use error::SharedError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
