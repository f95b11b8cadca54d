/**
 * Chat Connection Registry
 *
 * Tracks, per trip, the chat connections that are currently open. The
 * registry is the only owner of set membership: a connection joins the trip
 * named in its URL at handshake time and is never moved to another trip.
 *
 * # Thread Safety
 *
 * All state sits behind a single `Arc<RwLock<>>`. `join` and `leave` take the
 * write lock, reads take the read lock, and no lock is ever held across a
 * send. `snapshot` hands out an owned copy, so fan-out can keep sending while
 * other tasks join or leave.
 *
 * # Pruning
 *
 * A trip whose last connection leaves is removed from the map, keeping the key
 * space bounded by trips that have at least one live participant.
 */

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Unique identifier of one chat connection
pub type ConnectionId = Uuid;

/// Outbound half of a chat connection
///
/// Frames pushed here are written to the socket by the connection's writer
/// task. Once that task stops, every send fails with `ConnectionClosed`.
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    id: ConnectionId,
    tx: mpsc::UnboundedSender<String>,
}

impl ConnectionHandle {
    /// Wrap an existing sender under a fresh connection id
    pub fn new(tx: mpsc::UnboundedSender<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tx,
        }
    }

    /// Create a handle together with the receiver its writer should drain
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queue a text frame for this connection
    pub fn send(&self, frame: String) -> Result<(), BackendError> {
        self.tx
            .send(frame)
            .map_err(|_| BackendError::connection_closed(self.id))
    }

    /// True once the writer side has gone away
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl PartialEq for ConnectionHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ConnectionHandle {}

type TripConnections = HashMap<ConnectionId, ConnectionHandle>;

/// Process-wide mapping from trip id to its open chat connections
#[derive(Debug, Clone, Default)]
pub struct ConnectionRegistry {
    trips: Arc<RwLock<HashMap<String, TripConnections>>>,
}

impl ConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection under a trip
    ///
    /// Returns false if the connection was already registered there.
    pub async fn join(&self, trip_id: &str, connection: ConnectionHandle) -> bool {
        let mut trips = self.trips.write().await;
        let connection_id = connection.id();
        let inserted = trips
            .entry(trip_id.to_string())
            .or_default()
            .insert(connection_id, connection)
            .is_none();

        if inserted {
            tracing::debug!("[Registry] {} joined trip {}", connection_id, trip_id);
        } else {
            tracing::debug!("[Registry] {} already registered on trip {}", connection_id, trip_id);
        }
        inserted
    }

    /// Remove a connection from a trip, pruning the trip if it becomes empty
    ///
    /// Returns false when there was nothing to remove.
    pub async fn leave(&self, trip_id: &str, connection_id: ConnectionId) -> bool {
        let mut trips = self.trips.write().await;
        let Some(connections) = trips.get_mut(trip_id) else {
            return false;
        };

        let removed = connections.remove(&connection_id).is_some();
        if connections.is_empty() {
            trips.remove(trip_id);
            tracing::debug!("[Registry] Trip {} has no connections left, pruned", trip_id);
        }
        if removed {
            tracing::debug!("[Registry] {} left trip {}", connection_id, trip_id);
        }
        removed
    }

    /// Point-in-time copy of a trip's connections
    pub async fn snapshot(&self, trip_id: &str) -> Vec<ConnectionHandle> {
        let trips = self.trips.read().await;
        trips
            .get(trip_id)
            .map(|connections| connections.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Trips with at least one open connection, sorted
    pub async fn active_trips(&self) -> Vec<String> {
        let trips = self.trips.read().await;
        let mut ids: Vec<String> = trips.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of connections registered under a trip
    pub async fn connection_count(&self, trip_id: &str) -> usize {
        let trips = self.trips.read().await;
        trips.get(trip_id).map_or(0, HashMap::len)
    }

    /// Number of connections across all trips
    pub async fn total_connections(&self) -> usize {
        let trips = self.trips.read().await;
        trips.values().map(HashMap::len).sum()
    }

    /// Per-trip connection counts, sorted by trip id
    pub async fn trip_counts(&self) -> Vec<(String, usize)> {
        let trips = self.trips.read().await;
        let mut counts: Vec<(String, usize)> = trips
            .iter()
            .map(|(trip_id, connections)| (trip_id.clone(), connections.len()))
            .collect();
        counts.sort();
        counts
    }
}
