mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use common::TestApp;

#[tokio::test]
async fn data_requires_session() {
    let app = TestApp::new();
    assert_eq!(app.get("/data").await.status, StatusCode::UNAUTHORIZED);
    assert!(!app.state.config.cache_path.exists());
}

#[tokio::test]
async fn second_call_within_window_is_served_from_cache() {
    let app = TestApp::new();
    let cookie = app.signed_in("alice").await;

    let first = app.request(Method::GET, "/data", None, Some(&cookie)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["source"], "generated");
    assert_eq!(first.body["data"]["user"]["username"], "alice");
    assert!(first.body["data"]["timestamp"].is_string());

    let second = app.request(Method::GET, "/data", None, Some(&cookie)).await;
    assert_eq!(second.body["source"], "cache");
    assert_eq!(second.body["data"], first.body["data"]);
}

#[tokio::test]
async fn stale_cache_is_regenerated_with_new_timestamp() {
    let app = TestApp::with_config(|config| config.cache_ttl_secs = 1);
    let cookie = app.signed_in("alice").await;

    let first = app.request(Method::GET, "/data", None, Some(&cookie)).await;
    tokio::time::sleep(Duration::from_millis(1_200)).await;
    let second = app.request(Method::GET, "/data", None, Some(&cookie)).await;

    assert_eq!(second.body["source"], "generated");
    assert_ne!(second.body["data"]["timestamp"], first.body["data"]["timestamp"]);
}

#[tokio::test]
async fn cache_slot_is_shared_between_users() {
    let app = TestApp::new();
    let alice = app.signed_in("alice").await;
    let bob = app.signed_in("bob").await;

    app.request(Method::GET, "/data", None, Some(&alice)).await;
    let response = app.request(Method::GET, "/data", None, Some(&bob)).await;

    assert_eq!(response.body["source"], "cache");
    assert_eq!(response.body["data"]["user"]["username"], "alice");
}

#[tokio::test]
async fn cache_write_failure_is_500() {
    let app = TestApp::with_config(|config| {
        config.cache_path = config.products_path.with_file_name("blocker").join("cache.json");
    });
    std::fs::write(app.dir.path().join("blocker"), "not a directory").unwrap();
    let cookie = app.signed_in("alice").await;

    let response = app.request(Method::GET, "/data", None, Some(&cookie)).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
