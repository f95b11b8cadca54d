/**
 * Chat Message Persistence
 *
 * The dispatcher records every chat message through the `ChatStore` trait.
 * Writes are best-effort: the dispatcher logs a failed write and carries on
 * with the broadcast.
 *
 * Two implementations exist:
 * - `PgChatStore` (see `db`) writes to the `chat_messages` table
 * - `MemoryChatStore` keeps the most recent records in process, used when no
 *   database is configured and in tests. Once it holds `capacity` records the
 *   oldest one is evicted for every new write.
 */

use std::collections::VecDeque;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::error::BackendError;
use crate::shared::ChatMessageRecord;

/// Persistence collaborator for chat messages
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Short name used in logs and the health report
    fn name(&self) -> &'static str;

    /// Add one chat message to the `chat_messages` collection
    async fn add_chat_message(&self, record: &ChatMessageRecord) -> Result<(), BackendError>;

    /// Cheap round trip proving the backend is reachable
    async fn health_check(&self) -> Result<(), BackendError>;
}

/// Shared handle to whichever store the server was configured with
pub type SharedChatStore = Arc<dyn ChatStore>;

/// Records kept by `MemoryChatStore::new`
pub const DEFAULT_MEMORY_CAPACITY: usize = 10_000;

/// In-process chat store holding at most `capacity` records
#[derive(Debug, Clone)]
pub struct MemoryChatStore {
    records: Arc<RwLock<VecDeque<ChatMessageRecord>>>,
    capacity: usize,
}

impl Default for MemoryChatStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` records, evicting the oldest first
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(RwLock::new(VecDeque::with_capacity(capacity.min(1024)))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained records in insertion order
    pub async fn records(&self) -> Vec<ChatMessageRecord> {
        self.records.read().await.iter().cloned().collect()
    }

    /// Retained records for one trip in insertion order
    pub async fn records_for_trip(&self, trip_id: &str) -> Vec<ChatMessageRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| record.trip_id == trip_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn add_chat_message(&self, record: &ChatMessageRecord) -> Result<(), BackendError> {
        let mut records = self.records.write().await;
        if records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record.clone());
        Ok(())
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
