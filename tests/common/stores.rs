//! Chat stores with scripted behaviour

use async_trait::async_trait;
use tripwizards::backend::chat::ChatStore;
use tripwizards::backend::error::BackendError;
use tripwizards::shared::ChatMessageRecord;

/// Store whose every call fails, as if the backend were down
pub struct FailingChatStore;

#[async_trait]
impl ChatStore for FailingChatStore {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn add_chat_message(&self, _record: &ChatMessageRecord) -> Result<(), BackendError> {
        Err(BackendError::store("quota exceeded"))
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Err(BackendError::store("connection refused"))
    }
}
