//! Shared test helpers for integration tests.

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use chathub_api::state::AppState;
use chathub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Captured response: status plus parsed JSON body
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null when empty)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        let state = AppState::new(AppConfig::default());
        Self {
            router: chathub_api::app::build_app(state),
        }
    }

    /// Issue one request against the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
            None => builder.body(Body::empty()).expect("failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Register a session and return its identity token
    pub async fn register(&self, display_name: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/sessions",
                None,
                Some(json!({ "display_name": display_name })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.body["data"]["token"]
            .as_str()
            .expect("missing token")
            .to_string()
    }

    /// Serve the app on an ephemeral port for WebSocket tests
    pub async fn spawn(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let addr = listener.local_addr().expect("no local addr");

        let router = self.router.clone();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("test server failed");
        });

        addr
    }
}
