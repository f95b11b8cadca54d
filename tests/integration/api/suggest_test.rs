//! Root, suggestion, stats and fallback route tests

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tripwizards::backend::api::ChatStats;
use tripwizards::backend::assistant::SuggestResponse;
use tripwizards::backend::chat::{ConnectionHandle, MemoryChatStore};
use tripwizards::backend::routes::create_router;

use crate::common::*;

fn test_server() -> TestServer {
    let state = test_state(Arc::new(MemoryChatStore::new()), None);
    TestServer::new(create_router(state)).unwrap()
}

async fn suggestion_for(server: &TestServer, prompt: &str) -> String {
    let response = server.post("/ai/suggest").json(&json!({ "prompt": prompt })).await;
    response.assert_status_ok();
    response.json::<SuggestResponse>().suggestion
}

#[tokio::test]
async fn test_root_banner() {
    let server = test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "message": "Trip Wizards API" }));
}

#[tokio::test]
async fn test_suggest_picks_by_keyword() {
    let server = test_server();

    let restaurant = suggestion_for(&server, "Where is a good Restaurant?").await;
    let activity = suggestion_for(&server, "any ACTIVITY for kids").await;
    let general = suggestion_for(&server, "plan my week").await;

    assert!(restaurant.contains("restaurant"));
    assert!(activity.contains("outdoor activities"));
    assert!(general.contains("itinerary"));
}

#[tokio::test]
async fn test_suggest_restaurant_wins_over_activity() {
    let server = test_server();

    let both = suggestion_for(&server, "activity then restaurant").await;
    let restaurant = suggestion_for(&server, "restaurant").await;

    assert_eq!(both, restaurant);
}

#[tokio::test]
async fn test_suggest_rejects_missing_prompt_as_json_error() {
    let server = test_server();

    let response = server.post("/ai/suggest").json(&json!({})).expect_failure().await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.header("content-type"), "application/json");
    let body = response.json::<Value>();
    assert_eq!(body["status"], 422);
    assert!(body["error"].as_str().unwrap().contains("prompt"));
}

#[tokio::test]
async fn test_suggest_rejects_non_json_body_as_json_error() {
    let server = test_server();

    let response = server.post("/ai/suggest").text("restaurant please").expect_failure().await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response.json::<Value>();
    assert_eq!(body["status"], 415);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_chat_stats_lists_trips() {
    let state = test_state(Arc::new(MemoryChatStore::new()), None);
    let registry = state.dispatcher.registry().clone();
    let mut receivers = Vec::new();
    for trip in ["rome", "paris", "paris"] {
        let (handle, rx) = ConnectionHandle::channel();
        registry.join(trip, handle).await;
        receivers.push(rx);
    }
    let server = TestServer::new(create_router(state)).unwrap();

    let stats = server.get("/api/v1/chat/stats").await.json::<ChatStats>();

    assert_eq!(stats.total_connections, 3);
    let trips: Vec<(String, usize)> = stats
        .trips
        .into_iter()
        .map(|t| (t.trip_id, t.connections))
        .collect();
    assert_eq!(trips, vec![("paris".to_string(), 2), ("rome".to_string(), 1)]);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = test_server();

    let response = server.get("/trips/abc").expect_failure().await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["status"], 404);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_chat_route_requires_upgrade() {
    let server = test_server();

    let response = server.get("/ws/chat/paris").expect_failure().await;

    assert!(response.status_code().is_client_error());
}
