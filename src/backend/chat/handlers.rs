/**
 * Trip Chat WebSocket Handler
 *
 * `GET /ws/chat/{trip_id}` upgrades to a WebSocket and runs one task per
 * connection:
 *
 * 1. The connection is joined to the trip's registry entry before the first
 *    frame is read.
 * 2. A writer task owns the socket sink and drains the connection's channel.
 * 3. The reader loop hands every text frame to the dispatcher.
 * 4. On close, end of stream or transport error the connection leaves the
 *    registry. The writer then sees its channel end, closes the sink (which
 *    answers a client's close frame) and is aborted only if it stalls.
 */

use std::time::Duration;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use futures_util::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::chat::dispatcher::ChatDispatcher;
use crate::backend::chat::registry::{ConnectionHandle, ConnectionId};

/// How long a closing connection's writer may take to flush and close the socket
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Handle the chat upgrade (GET /ws/chat/{trip_id})
///
/// No sub-protocol is negotiated.
pub async fn handle_chat_websocket(
    State(dispatcher): State<ChatDispatcher>,
    Path(trip_id): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    tracing::debug!("[Chat] Upgrade request for trip {}", trip_id);
    ws.on_upgrade(move |socket| run_chat_connection(socket, dispatcher, trip_id))
}

/// Drive one chat connection from OPEN to CLOSED
pub async fn run_chat_connection(socket: WebSocket, dispatcher: ChatDispatcher, trip_id: String) {
    let (sink, mut stream) = socket.split();
    let (connection, rx) = ConnectionHandle::channel();
    let connection_id = connection.id();

    dispatcher.registry().join(&trip_id, connection).await;
    tracing::info!("[Chat] Connection {} opened on trip {}", connection_id, trip_id);

    let mut writer = tokio::spawn(forward_frames(sink, rx, connection_id));

    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => {
                if let Err(e) = dispatcher.handle_frame(&trip_id, text.as_str()).await {
                    tracing::warn!(
                        "[Chat] Dropping frame from {} on trip {}: {}",
                        connection_id,
                        trip_id,
                        e
                    );
                }
            }
            Ok(Message::Close(_)) => {
                tracing::debug!("[Chat] Close frame from {}", connection_id);
                break;
            }
            Ok(Message::Binary(data)) => {
                tracing::debug!("[Chat] Ignoring {} byte binary frame from {}", data.len(), connection_id);
            }
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Err(e) => {
                tracing::debug!("[Chat] Transport error on {}: {}", connection_id, e);
                break;
            }
        }
    }

    // Leaving drops the registry's sender, so the writer drains and closes the sink
    dispatcher.registry().leave(&trip_id, connection_id).await;
    if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut writer).await.is_err() {
        tracing::debug!("[Chat] Writer for {} did not finish, aborting", connection_id);
        writer.abort();
    }
    tracing::info!("[Chat] Connection {} closed on trip {}", connection_id, trip_id);
}

/// Write queued frames to the socket until either side goes away
async fn forward_frames(
    mut sink: SplitSink<WebSocket, Message>,
    mut rx: UnboundedReceiver<String>,
    connection_id: ConnectionId,
) {
    while let Some(frame) = rx.recv().await {
        if let Err(e) = sink.send(Message::Text(frame.into())).await {
            tracing::debug!("[Chat] Write to {} failed: {}", connection_id, e);
            break;
        }
    }
    let _ = sink.close().await;
}
