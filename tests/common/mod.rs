#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mergington::config::CapacityPolicy;
use mergington::database::ActivityStore;
use mergington::models::Activity;
use mergington::web::{self, AppState};

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Fresh seeded app; each test gets its own registry.
pub fn app() -> Router {
    app_with(ActivityStore::seeded(), CapacityPolicy::Unenforced)
}

pub fn app_with(store: ActivityStore, capacity: CapacityPolicy) -> Router {
    web::router(AppState::new(store, capacity), STATIC_DIR)
}

pub fn tiny_store(max_participants: u32, participants: &[&str]) -> ActivityStore {
    ActivityStore::new(vec![Activity::new(
        "Tiny",
        "Small test group",
        "Never",
        max_participants,
        participants,
    )])
}

pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn list(app: &Router) -> Value {
    let (status, body) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    body
}

pub fn participants(listing: &Value, activity: &str) -> Vec<String> {
    listing[activity]["participants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}
