/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once in the composition root (`init`) and cloned into
 * every handler. It holds:
 * - The chat dispatcher, which owns the connection registry and the store
 * - The assistant service client
 *
 * # Thread Safety
 *
 * Every field is a cheap clone over shared state:
 * - `ConnectionRegistry` wraps `Arc<RwLock<>>`
 * - The store is an `Arc<dyn ChatStore>`
 * - `reqwest::Client` is internally reference counted
 */

use axum::extract::FromRef;

use crate::backend::assistant::AssistantClient;
use crate::backend::chat::{ChatDispatcher, ConnectionRegistry, SharedChatStore};
use crate::shared::ServerConfig;

/// Application state shared by all handlers
///
/// # Usage
///
/// ```rust
/// use tripwizards::backend::server::state::AppState;
/// use axum::extract::State;
///
/// async fn handler(State(app_state): State<AppState>) {
///     let trips = app_state.dispatcher.registry().active_trips().await;
/// }
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Persists and broadcasts chat messages; owns the connection registry
    pub dispatcher: ChatDispatcher,

    /// Client for the assistant service
    pub assistant: AssistantClient,
}

impl AppState {
    /// Assemble state from a store, an assistant client and the server config
    pub fn new(store: SharedChatStore, assistant: AssistantClient, config: &ServerConfig) -> Self {
        let dispatcher = ChatDispatcher::new(ConnectionRegistry::new(), store)
            .with_persist_timeout(config.persist_timeout());
        Self {
            dispatcher,
            assistant,
        }
    }
}

/// Lets the chat handler extract `State<ChatDispatcher>`
impl FromRef<AppState> for ChatDispatcher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.dispatcher.clone()
    }
}

/// Lets handlers extract `State<ConnectionRegistry>`
impl FromRef<AppState> for ConnectionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.dispatcher.registry().clone()
    }
}
