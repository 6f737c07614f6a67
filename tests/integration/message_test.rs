//! Integration tests for direct messaging.

use http::StatusCode;
use serde_json::json;

use chathub_core::types::SessionToken;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_send_requires_token() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            None,
            Some(json!({ "receiver": alice, "body": "hi" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTH_ERROR");
}

#[tokio::test]
async fn test_send_to_unknown_receiver() {
    let app = TestApp::new();
    let alice = app.register("alice").await;

    let ghost = SessionToken::new().to_string();
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(&alice),
            Some(json!({ "receiver": ghost, "body": "anyone there?" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_send_echoes_message() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(&bob),
            Some(json!({ "receiver": alice, "body": "hi alice" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["sender"], bob);
    assert_eq!(response.body["data"]["receiver"], alice);
    assert_eq!(response.body["data"]["body"], "hi alice");
    assert!(response.body["data"]["sent_at"].is_string());
}

#[tokio::test]
async fn test_send_empty_body_rejected() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(&bob),
            Some(json!({ "receiver": alice, "body": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
