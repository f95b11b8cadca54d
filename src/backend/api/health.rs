/**
 * Health Report Handler
 *
 * `GET /health` reports on every collaborator the chat service depends on:
 *
 * - `store` - the configured `ChatStore` health check
 * - `assistant` - the assistant service health URL, when configured
 * - `chat` - the in-process connection registry
 *
 * The overall status is `degraded` if the store is unhealthy, or if a
 * configured assistant times out or answers with a non-200 status. An
 * assistant without a configured URL, or one that fails for any other reason
 * (refused connection, DNS failure), is reported as `unknown` and does not
 * degrade the report.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::backend::assistant::AssistantProbe;
use crate::backend::server::state::AppState;

/// Health of one collaborator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceHealth {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_trips: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<usize>,
}

impl ServiceHealth {
    fn new(status: &str, message: impl Into<String>) -> Self {
        Self {
            status: status.to_string(),
            message: message.into(),
            active_trips: None,
            connections: None,
        }
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub services: BTreeMap<String, ServiceHealth>,
}

/// Handle GET /health
pub async fn handle_health(State(app_state): State<AppState>) -> Json<HealthReport> {
    let mut degraded = false;
    let mut services = BTreeMap::new();

    let store = app_state.dispatcher.store();
    let store_health = match store.health_check().await {
        Ok(()) => ServiceHealth::new("healthy", format!("{} store reachable", store.name())),
        Err(e) => {
            tracing::warn!("[Health] {} store check failed: {}", store.name(), e);
            degraded = true;
            ServiceHealth::new("unhealthy", format!("{} store check failed: {}", store.name(), e))
        }
    };
    services.insert("store".to_string(), store_health);

    let assistant_health = match app_state.assistant.probe().await {
        AssistantProbe::NotConfigured => {
            ServiceHealth::new("unknown", "Assistant health URL not configured, check skipped")
        }
        AssistantProbe::Reachable => ServiceHealth::new("healthy", "Assistant service reachable"),
        AssistantProbe::BadStatus(code) => {
            degraded = true;
            ServiceHealth::new("unhealthy", format!("Assistant service returned status {}", code))
        }
        AssistantProbe::TimedOut => {
            degraded = true;
            ServiceHealth::new("unhealthy", "Assistant service timeout")
        }
        AssistantProbe::Failed(reason) => {
            tracing::debug!(
                "[Health] Assistant at {} unreachable, reporting unknown",
                app_state.assistant.health_url().unwrap_or_default()
            );
            ServiceHealth::new("unknown", format!("Assistant connectivity check skipped: {}", reason))
        }
    };
    services.insert("assistant".to_string(), assistant_health);

    let registry = app_state.dispatcher.registry();
    let active_trips = registry.active_trips().await.len();
    let connections = registry.total_connections().await;
    let mut chat_health = ServiceHealth::new(
        "healthy",
        format!("{} connections across {} trips", connections, active_trips),
    );
    chat_health.active_trips = Some(active_trips);
    chat_health.connections = Some(connections);
    services.insert("chat".to_string(), chat_health);

    let status = if degraded { "degraded" } else { "healthy" };
    Json(HealthReport {
        status: status.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        services,
    })
}
