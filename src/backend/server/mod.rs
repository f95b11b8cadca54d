//! Server Module
//!
//! This module contains the code that assembles the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Chat store selection (PostgreSQL or memory)
//! └── init.rs         - Composition root and app creation
//! ```
//!
//! # State Management
//!
//! The connection registry is created once in `init` and injected into every
//! handler through `AppState`. There is no global registry.
//!
//! # Example
//!
//! ```rust,no_run
//! use tripwizards::backend::server::create_app;
//! use tripwizards::shared::ServerConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Store configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
