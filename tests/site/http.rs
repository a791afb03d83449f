//! HTTP transport tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use quill::microsvc::{self, USER_HEADER};
use serde_json::json;

use crate::support::service;

/// Bind to port 0 and return the actual address.
async fn start_server() -> String {
    let app = microsvc::router(Arc::new(service()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn health_lists_commands() {
    let base = start_server().await;
    let resp = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    let commands = body["commands"].as_array().unwrap();
    assert!(commands.contains(&json!("work.favourite")));
}

#[tokio::test]
async fn session_header_identifies_the_user() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/work.create"))
        .header(USER_HEADER, "alice")
        .json(&json!({ "title": "Dawn", "genre_name": "poetry", "writing": "..." }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    let work_id = body["work"]["id"].as_str().unwrap().to_string();

    let resp = client
        .post(format!("{base}/work.favourite"))
        .header(USER_HEADER, "bob")
        .json(&json!({ "work_id": work_id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["created"], true);
}

#[tokio::test]
async fn errors_carry_status_and_message() {
    let base = start_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/work.favourite"))
        .json(&json!({ "work_id": "000000000000000000000001" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Please log in");

    let resp = client
        .post(format!("{base}/no.such.command"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}
