/**
 * Chat Broadcast Dispatcher
 *
 * Turns one inbound text frame into a stamped `ChatMessage`, records it
 * through the configured `ChatStore`, and fans it out to every connection
 * registered on the same trip.
 *
 * # Failure Handling
 *
 * - A frame that does not parse is returned as an error to the caller, which
 *   logs it and keeps the connection open. Nothing is stored or sent.
 * - A store failure or timeout is logged and the broadcast still happens.
 * - A peer whose outbound channel is closed is removed from the registry and
 *   the remaining peers still receive the message.
 *
 * # Ordering
 *
 * Each connection task calls `handle_frame` sequentially and every peer channel
 * is FIFO, so messages from one sender reach each peer in the order sent.
 */

use std::time::Duration;

use crate::backend::chat::registry::{ConnectionId, ConnectionRegistry};
use crate::backend::chat::store::SharedChatStore;
use crate::backend::error::BackendError;
use crate::shared::{ChatMessage, ChatMessageRecord};

/// Default upper bound on a single store write
pub const DEFAULT_PERSIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of broadcasting one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// The broadcast message
    pub message: ChatMessage,
    /// Whether the store accepted the record
    pub persisted: bool,
    /// Connections the frame was queued for
    pub delivered: usize,
    /// Connections dropped because their channel was closed
    pub dropped: Vec<ConnectionId>,
}

/// Persists and broadcasts chat messages for all trips
#[derive(Clone)]
pub struct ChatDispatcher {
    registry: ConnectionRegistry,
    store: SharedChatStore,
    persist_timeout: Duration,
}

impl ChatDispatcher {
    pub fn new(registry: ConnectionRegistry, store: SharedChatStore) -> Self {
        Self {
            registry,
            store,
            persist_timeout: DEFAULT_PERSIST_TIMEOUT,
        }
    }

    pub fn with_persist_timeout(mut self, timeout: Duration) -> Self {
        self.persist_timeout = timeout;
        self
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn store(&self) -> &SharedChatStore {
        &self.store
    }

    /// Handle a raw text frame received on a trip's chat channel
    pub async fn handle_frame(&self, trip_id: &str, text: &str) -> Result<DispatchReport, BackendError> {
        let message = ChatMessage::from_frame(text, trip_id)?;
        self.dispatch(message).await
    }

    /// Persist a stamped message and fan it out to the trip
    pub async fn dispatch(&self, message: ChatMessage) -> Result<DispatchReport, BackendError> {
        let frame = message.to_frame()?;
        let persisted = self.persist(&message).await;
        let (delivered, dropped) = self.fan_out(&message.trip_id, &frame).await;

        Ok(DispatchReport {
            message,
            persisted,
            delivered,
            dropped,
        })
    }

    /// Best-effort write; never fails the caller
    async fn persist(&self, message: &ChatMessage) -> bool {
        let record = ChatMessageRecord::from(message);
        match tokio::time::timeout(self.persist_timeout, self.store.add_chat_message(&record)).await {
            Ok(Ok(())) => true,
            Ok(Err(e)) => {
                tracing::error!(
                    "[Chat] Failed to store message for trip {} in {} store: {}",
                    message.trip_id,
                    self.store.name(),
                    e
                );
                false
            }
            Err(_) => {
                tracing::error!(
                    "[Chat] Storing message for trip {} timed out after {:?}",
                    message.trip_id,
                    self.persist_timeout
                );
                false
            }
        }
    }

    /// Send a frame to every connection on the trip, dropping dead ones
    async fn fan_out(&self, trip_id: &str, frame: &str) -> (usize, Vec<ConnectionId>) {
        let connections = self.registry.snapshot(trip_id).await;
        let mut delivered = 0;
        let mut dropped = Vec::new();

        for connection in &connections {
            match connection.send(frame.to_string()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("[Chat] Failed to send message on trip {}: {}", trip_id, e);
                    self.registry.leave(trip_id, connection.id()).await;
                    dropped.push(connection.id());
                }
            }
        }

        tracing::debug!(
            "[Chat] Broadcast on trip {} to {} of {} connections",
            trip_id,
            delivered,
            connections.len()
        );
        (delivered, dropped)
    }
}
