//! Integration tests for the WebSocket update stream.

use std::time::Duration;

use futures::StreamExt;
use http::StatusCode;
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use chathub_core::types::SessionToken;

use crate::helpers::TestApp;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connect a client to the update stream.
async fn connect(addr: std::net::SocketAddr, token: &str) -> WsStream {
    let (stream, _response) = connect_async(format!("ws://{addr}/ws?token={token}"))
        .await
        .expect("websocket connect failed");
    stream
}

/// Read the next JSON update frame, skipping non-text frames.
async fn next_update(ws: &mut WsStream) -> Value {
    loop {
        let frame = timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for update")
            .expect("stream ended unexpectedly")
            .expect("websocket error");
        if let WsMessage::Text(text) = frame {
            return serde_json::from_str(text.as_str()).expect("invalid update json");
        }
    }
}

/// Assert that the stream has ended (close frame or EOF).
async fn expect_closed(ws: &mut WsStream) {
    loop {
        match timeout(Duration::from_secs(5), ws.next())
            .await
            .expect("timed out waiting for close")
        {
            Some(Ok(WsMessage::Close(_))) | None => return,
            Some(Ok(WsMessage::Text(frame))) => {
                panic!("expected close, got update: {frame}")
            }
            Some(Ok(_)) => {}
            Some(Err(_)) => return,
        }
    }
}

#[tokio::test]
async fn test_ws_rejects_unknown_token() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let stranger = SessionToken::new();
    let result = connect_async(format!("ws://{addr}/ws?token={stranger}")).await;
    assert!(result.is_err(), "upgrade should be rejected");
}

#[tokio::test]
async fn test_second_stream_rejected() {
    let app = TestApp::new();
    let addr = app.spawn().await;
    let alice = app.register("alice").await;

    let _first = connect(addr, &alice).await;
    let second = connect_async(format!("ws://{addr}/ws?token={alice}")).await;
    assert!(second.is_err(), "second stream for one session should be rejected");
}

/// The full relay scenario over a live socket: join fanout, directed
/// delivery, and departure-driven stream shutdown.
#[tokio::test]
async fn test_presence_and_message_flow() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let alice = app.register("alice").await;
    let mut alice_ws = connect(addr, &alice).await;

    let bob = app.register("bob").await;
    let mut bob_ws = connect(addr, &bob).await;

    // Alice hears that bob joined.
    let update = next_update(&mut alice_ws).await;
    assert_eq!(update["type"], "presence");
    assert_eq!(update["kind"], "joined");
    assert_eq!(update["subject"], bob);
    assert_eq!(update["display_name"], "bob");

    // Bob messages alice; alice receives the same message the echo
    // described.
    let response = app
        .request(
            "POST",
            "/api/messages",
            Some(&bob),
            Some(json!({ "receiver": alice, "body": "hi alice" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let update = next_update(&mut alice_ws).await;
    assert_eq!(update["type"], "message");
    assert_eq!(update["sender"], bob);
    assert_eq!(update["receiver"], alice);
    assert_eq!(update["body"], "hi alice");

    // Alice deregisters: bob is told, alice's own stream delivers her
    // departure and then closes.
    let response = app
        .request("DELETE", "/api/sessions/me", Some(&alice), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let update = next_update(&mut bob_ws).await;
    assert_eq!(update["type"], "presence");
    assert_eq!(update["kind"], "left");
    assert_eq!(update["subject"], alice);

    let update = next_update(&mut alice_ws).await;
    assert_eq!(update["type"], "presence");
    assert_eq!(update["kind"], "left");
    assert_eq!(update["subject"], alice);

    expect_closed(&mut alice_ws).await;
}

#[tokio::test]
async fn test_messages_delivered_in_order() {
    let app = TestApp::new();
    let addr = app.spawn().await;

    let alice = app.register("alice").await;
    let mut alice_ws = connect(addr, &alice).await;
    let bob = app.register("bob").await;

    for body in ["m1", "m2"] {
        let response = app
            .request(
                "POST",
                "/api/messages",
                Some(&bob),
                Some(json!({ "receiver": alice, "body": body })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    // Alice sees bob's join and both messages; the messages stay in
    // send order regardless of how the queues interleave.
    let mut bodies = Vec::new();
    while bodies.len() < 2 {
        let update = next_update(&mut alice_ws).await;
        if update["type"] == "message" {
            bodies.push(update["body"].as_str().unwrap().to_string());
        }
    }
    assert_eq!(bodies, vec!["m1", "m2"]);
}
