//! Assistant Module
//!
//! The AI assistant is an external, stateless request/response service. This
//! module holds the canned suggestion responder used by `POST /ai/suggest` and
//! the client that checks whether the assistant service is reachable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const PROBE_CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

const RESTAURANT_SUGGESTION: &str = "I recommend trying local cuisine at \"The Golden Fork\" - a highly rated restaurant specializing in regional dishes.";
const ACTIVITY_SUGGESTION: &str = "For outdoor activities, consider hiking in the nearby national park or visiting the local museum.";
const GENERAL_SUGGESTION: &str = "Based on your trip details, I suggest planning your itinerary around the main attractions and local transportation options.";

/// Body of `POST /ai/suggest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub prompt: String,
}

/// Response of `POST /ai/suggest`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestResponse {
    pub suggestion: String,
}

/// Pick a suggestion by keyword, case-insensitively
pub fn suggest(prompt: &str) -> SuggestResponse {
    let prompt = prompt.to_lowercase();
    let suggestion = if prompt.contains("restaurant") {
        RESTAURANT_SUGGESTION
    } else if prompt.contains("activity") {
        ACTIVITY_SUGGESTION
    } else {
        GENERAL_SUGGESTION
    };
    SuggestResponse {
        suggestion: suggestion.to_string(),
    }
}

/// Result of probing the assistant service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantProbe {
    /// No health URL configured
    NotConfigured,
    /// Health URL answered 200
    Reachable,
    /// Health URL answered with another status
    BadStatus(u16),
    /// Request timed out
    TimedOut,
    /// Request failed for another reason
    Failed(String),
}

/// Client for the assistant service's health endpoint
#[derive(Debug, Clone)]
pub struct AssistantClient {
    http: reqwest::Client,
    health_url: Option<String>,
}

impl AssistantClient {
    pub fn new(health_url: Option<String>) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(PROBE_TIMEOUT)
            .connect_timeout(PROBE_CONNECT_TIMEOUT)
            .build()?;
        Ok(Self { http, health_url })
    }

    pub fn health_url(&self) -> Option<&str> {
        self.health_url.as_deref()
    }

    /// GET the configured health URL
    pub async fn probe(&self) -> AssistantProbe {
        let Some(url) = &self.health_url else {
            return AssistantProbe::NotConfigured;
        };

        match self.http.get(url).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => AssistantProbe::Reachable,
            Ok(response) => AssistantProbe::BadStatus(response.status().as_u16()),
            Err(e) if e.is_timeout() => AssistantProbe::TimedOut,
            Err(e) => {
                tracing::debug!("[Health] Assistant probe to {} failed: {}", url, e);
                AssistantProbe::Failed(e.to_string())
            }
        }
    }
}
