//! Shared Error Types
//!
//! This module defines error types for the chat wire format. They describe
//! problems with what a client sent, as opposed to failures of the server.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `MalformedFrame` - A chat frame with the wrong overall shape
//!
//! # Usage
//!
//! ```rust
//! use tripwizards::shared::error::SharedError;
//!
//! let error = SharedError::malformed_frame("chat frame must be a JSON object");
//! ```
use thiserror::Error;

/// Errors raised while decoding or validating client input
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Chat frame that parsed as JSON but is not a chat message
    #[error("Malformed frame: {message}")]
    MalformedFrame {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new malformed frame error
    pub fn malformed_frame(message: impl Into<String>) -> Self {
        Self::MalformedFrame {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
