//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Errors that occur in HTTP handlers
//! - `ConnectionClosed` - A chat peer whose outbound channel is gone
//! - `StoreError` / `Database` - Persistence failures
//! - `Upstream` - Failures talking to the assistant service
//! - `SharedError` - Malformed chat frames and bad JSON

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
