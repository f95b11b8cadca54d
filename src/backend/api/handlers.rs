//! REST handlers for the service root, suggestions and chat statistics.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::assistant::{suggest, SuggestRequest, SuggestResponse};
use crate::backend::chat::ConnectionRegistry;
use crate::backend::error::BackendError;

/// Handle GET /
pub async fn handle_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Trip Wizards API" }))
}

/// Handle POST /ai/suggest
///
/// A body that is not a `SuggestRequest` is answered with the JSON error shape
/// and the extractor's status.
pub async fn handle_suggest(
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<SuggestResponse>, BackendError> {
    let Json(request) = payload?;
    tracing::debug!("[Assistant] Suggestion requested, prompt length {}", request.prompt.len());
    Ok(Json(suggest(&request.prompt)))
}

/// Connection count for one trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TripStats {
    pub trip_id: String,
    pub connections: usize,
}

/// Body of `GET /api/v1/chat/stats`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatStats {
    pub trips: Vec<TripStats>,
    pub total_connections: usize,
}

/// Handle GET /api/v1/chat/stats
pub async fn handle_chat_stats(State(registry): State<ConnectionRegistry>) -> Json<ChatStats> {
    let trips: Vec<TripStats> = registry
        .trip_counts()
        .await
        .into_iter()
        .map(|(trip_id, connections)| TripStats { trip_id, connections })
        .collect();
    let total_connections = trips.iter().map(|t| t.connections).sum();

    Json(ChatStats {
        trips,
        total_connections,
    })
}

/// Fallback for unknown routes
pub async fn handle_not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "404 Not Found")
}
