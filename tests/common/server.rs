//! Server fixtures and WebSocket client helpers

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_tungstenite::{tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tripwizards::backend::assistant::AssistantClient;
use tripwizards::backend::chat::{ChatStore, MemoryChatStore};
use tripwizards::backend::routes::create_router;
use tripwizards::backend::server::AppState;
use tripwizards::shared::{ChatMessage, ServerConfig};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

/// Build application state around a store, optionally probing an assistant URL
pub fn test_state(store: Arc<dyn ChatStore>, assistant_health_url: Option<String>) -> AppState {
    let config = ServerConfig::default();
    let assistant = AssistantClient::new(assistant_health_url).expect("Failed to build assistant client");
    AppState::new(store, assistant, &config)
}

/// A router served on 127.0.0.1 for the lifetime of the value
pub struct RunningServer {
    pub addr: SocketAddr,
    pub state: AppState,
    handle: JoinHandle<()>,
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl RunningServer {
    /// Serve with the given store on an ephemeral port
    pub async fn start(store: Arc<dyn ChatStore>) -> Self {
        let state = test_state(store, None);
        let app = create_router(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self { addr, state, handle }
    }

    /// Serve with a fresh in-memory store
    pub async fn start_with_memory() -> (Self, MemoryChatStore) {
        let store = MemoryChatStore::new();
        let server = Self::start(Arc::new(store.clone())).await;
        (server, store)
    }

    /// Open a chat connection and wait until the server has registered it
    pub async fn connect(&self, trip_id: &str) -> WsClient {
        let before = self.state.dispatcher.registry().connection_count(trip_id).await;
        let url = format!("ws://{}/ws/chat/{}", self.addr, trip_id);
        let (ws, _) = tokio_tungstenite::connect_async(url)
            .await
            .expect("Failed to connect to chat WebSocket");
        self.wait_for_connections(trip_id, before + 1).await;
        ws
    }

    /// Poll the registry until a trip has exactly `expected` connections
    pub async fn wait_for_connections(&self, trip_id: &str, expected: usize) {
        let registry = self.state.dispatcher.registry().clone();
        let result = tokio::time::timeout(RECV_TIMEOUT, async {
            loop {
                if registry.connection_count(trip_id).await == expected {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await;
        assert!(
            result.is_ok(),
            "trip {} never reached {} connections (has {})",
            trip_id,
            expected,
            registry.connection_count(trip_id).await
        );
    }
}

/// Send a JSON value as a text frame
pub async fn send_json(ws: &mut WsClient, value: serde_json::Value) {
    ws.send(Message::text(value.to_string()))
        .await
        .expect("Failed to send frame");
}

/// Send a raw text frame
pub async fn send_text(ws: &mut WsClient, text: &str) {
    ws.send(Message::text(text.to_string()))
        .await
        .expect("Failed to send frame");
}

/// Next chat message, skipping control frames
pub async fn recv_message(ws: &mut WsClient) -> ChatMessage {
    loop {
        let frame = tokio::time::timeout(RECV_TIMEOUT, ws.next())
            .await
            .expect("Timed out waiting for chat frame")
            .expect("WebSocket stream ended")
            .expect("WebSocket error");

        if frame.is_text() {
            let text = frame.to_text().expect("Text frame was not UTF-8");
            return serde_json::from_str(text).expect("Chat frame was not a ChatMessage");
        }
    }
}

/// Assert nothing arrives within `window`
pub async fn assert_no_message(ws: &mut WsClient, window: Duration) {
    if let Ok(Some(Ok(frame))) = tokio::time::timeout(window, ws.next()).await {
        panic!("Expected no frame, got {:?}", frame);
    }
}
