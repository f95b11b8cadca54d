/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers, the chat dispatcher and the
 * persistence layer, and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Invalid requests and unknown routes on the REST surface.
 *
 * ## Chat Errors
 *
 * A peer connection whose writer has gone away. These never reach a client;
 * the dispatcher uses them to decide which connections to drop.
 *
 * ## Store Errors
 *
 * Failures of the persistence backend, either reported by the store itself
 * or surfaced by sqlx.
 */

use thiserror::Error;
use axum::http::StatusCode;
use uuid::Uuid;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use tripwizards::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
/// let err = BackendError::store("chat_messages unavailable");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g. invalid request, unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// The outbound side of a chat connection is closed
    #[error("Connection {connection_id} is closed")]
    ConnectionClosed {
        connection_id: Uuid,
    },

    /// Persistence backend rejected or could not complete an operation
    #[error("Store error: {message}")]
    StoreError {
        /// Human-readable error message
        message: String,
    },

    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Error talking to an upstream HTTP service
    #[error("Upstream error: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new store error
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a closed-connection error
    pub fn connection_closed(connection_id: Uuid) -> Self {
        Self::ConnectionClosed { connection_id }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ConnectionClosed` - 410 Gone
    /// - `StoreError` / `Database` - 503 Service Unavailable
    /// - `Upstream` - 502 Bad Gateway
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ConnectionClosed { .. } => StatusCode::GONE,
            Self::StoreError { .. } | Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::StoreError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
