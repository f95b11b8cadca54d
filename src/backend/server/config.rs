/**
 * Store Configuration
 *
 * This module picks the chat store the server runs with.
 *
 * # Store Selection
 *
 * - `database_url` set and reachable: PostgreSQL with migrations applied
 * - otherwise: the in-memory store
 *
 * Database errors are logged but do not prevent server startup; chat keeps
 * working with messages held in memory.
 */

use std::sync::Arc;
use sqlx::PgPool;

use crate::backend::chat::{MemoryChatStore, PgChatStore, SharedChatStore};
use crate::shared::ServerConfig;

/// Database configuration result
///
/// `None` when the database is not configured or not reachable.
pub type DatabaseConfig = Option<PgPool>;

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if no URL is given or the connection fails
pub async fn load_database(database_url: Option<&str>) -> DatabaseConfig {
    let Some(database_url) = database_url else {
        tracing::warn!("[Store] DATABASE_URL not set, chat messages will be kept in memory");
        return None;
    };

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("[Store] Could not reach PostgreSQL: {}", e);
            tracing::warn!("[Store] Falling back to the in-memory chat store");
            return None;
        }
    };
    tracing::info!("[Store] Connected to PostgreSQL");

    // A failed migration still leaves a usable pool when the table already exists
    if let Err(e) = sqlx::migrate!().run(&pool).await {
        tracing::error!("[Store] Migrations failed, continuing with the existing schema: {}", e);
    } else {
        tracing::info!("[Store] Migrations applied");
    }

    Some(pool)
}

/// Build the chat store described by the configuration
pub async fn load_store(config: &ServerConfig) -> SharedChatStore {
    match load_database(config.database_url.as_deref()).await {
        Some(pool) => Arc::new(PgChatStore::new(pool)),
        None => {
            let store = MemoryChatStore::new();
            tracing::info!("[Store] In-memory store keeps the last {} messages", store.capacity());
            Arc::new(store)
        }
    }
}
