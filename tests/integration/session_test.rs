//! Integration tests for session registration, listing, and deregistration.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_returns_identity() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "display_name": "alice" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["display_name"], "alice");
    assert!(response.body["data"]["token"].is_string());
}

#[tokio::test]
async fn test_register_duplicate_name_conflicts() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app
        .request(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "display_name": "alice" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_empty_name_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/sessions",
            None,
            Some(json!({ "display_name": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_requires_token() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app.request("GET", "/api/sessions", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "AUTH_ERROR");

    let response = app
        .request("GET", "/api/sessions", Some("not-a-token"), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_snapshots_active_sessions() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;
    assert_ne!(alice, bob);

    let response = app.request("GET", "/api/sessions", Some(&alice), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total"], 2);

    let mut names: Vec<&str> = response.body["data"]["sessions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|identity| identity["display_name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn test_deregister_removes_session() {
    let app = TestApp::new();
    let alice = app.register("alice").await;
    let bob = app.register("bob").await;

    let response = app
        .request("DELETE", "/api/sessions/me", Some(&alice), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["display_name"], "alice");

    let response = app.request("GET", "/api/sessions", Some(&bob), None).await;
    assert_eq!(response.body["data"]["total"], 1);
    assert_eq!(
        response.body["data"]["sessions"][0]["display_name"],
        "bob"
    );

    // The departed token no longer authenticates.
    let response = app
        .request("DELETE", "/api/sessions/me", Some(&alice), None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_active_sessions() {
    let app = TestApp::new();
    app.register("alice").await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["active_sessions"], 1);
}
