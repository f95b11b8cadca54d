//! Health endpoint tests

use std::sync::Arc;

use axum_test::TestServer;
use pretty_assertions::assert_eq;
use tripwizards::backend::api::HealthReport;
use tripwizards::backend::chat::{ConnectionHandle, MemoryChatStore};
use tripwizards::backend::routes::create_router;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::*;

async fn get_health(server: &TestServer) -> HealthReport {
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.json::<HealthReport>()
}

#[tokio::test]
async fn test_healthy_without_assistant_configured() {
    let state = test_state(Arc::new(MemoryChatStore::new()), None);
    let server = TestServer::new(create_router(state)).unwrap();

    let report = get_health(&server).await;

    assert_eq!(report.status, "healthy");
    assert_eq!(report.services["store"].status, "healthy");
    assert_eq!(report.services["assistant"].status, "unknown");
    assert_eq!(report.services["chat"].status, "healthy");
    assert_eq!(report.services["chat"].connections, Some(0));
    assert_eq!(report.services["chat"].active_trips, Some(0));
}

#[tokio::test]
async fn test_failing_store_degrades_report() {
    let state = test_state(Arc::new(FailingChatStore), None);
    let server = TestServer::new(create_router(state)).unwrap();

    let report = get_health(&server).await;

    assert_eq!(report.status, "degraded");
    assert_eq!(report.services["store"].status, "unhealthy");
    assert!(report.services["store"].message.contains("connection refused"));
}

#[tokio::test]
async fn test_reachable_assistant_is_healthy() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/health", mock_server.uri());
    let state = test_state(Arc::new(MemoryChatStore::new()), Some(url));
    let server = TestServer::new(create_router(state)).unwrap();

    let report = get_health(&server).await;

    assert_eq!(report.status, "healthy");
    assert_eq!(report.services["assistant"].status, "healthy");
}

#[tokio::test]
async fn test_assistant_error_status_degrades_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let url = format!("{}/health", mock_server.uri());
    let state = test_state(Arc::new(MemoryChatStore::new()), Some(url));
    let server = TestServer::new(create_router(state)).unwrap();

    let report = get_health(&server).await;

    assert_eq!(report.status, "degraded");
    assert_eq!(report.services["assistant"].status, "unhealthy");
    assert!(report.services["assistant"].message.contains("500"));
}

#[tokio::test]
async fn test_unreachable_assistant_is_unknown_and_not_degraded() {
    // Nothing listens on port 1, so the connection is refused
    let url = "http://127.0.0.1:1/health".to_string();
    let state = test_state(Arc::new(MemoryChatStore::new()), Some(url));
    let server = TestServer::new(create_router(state)).unwrap();

    let report = get_health(&server).await;

    assert_eq!(report.status, "healthy");
    assert_eq!(report.services["assistant"].status, "unknown");
    assert!(report.services["assistant"].message.contains("check skipped"));
}

#[tokio::test]
async fn test_chat_service_counts_connections() {
    let state = test_state(Arc::new(MemoryChatStore::new()), None);
    let registry = state.dispatcher.registry().clone();
    let (first, _rx1) = ConnectionHandle::channel();
    let (second, _rx2) = ConnectionHandle::channel();
    registry.join("paris", first).await;
    registry.join("rome", second).await;

    let server = TestServer::new(create_router(state)).unwrap();
    let report = get_health(&server).await;

    assert_eq!(report.services["chat"].connections, Some(2));
    assert_eq!(report.services["chat"].active_trips, Some(2));
}
