use crate::fixtures::test_app::TestApp;
use serde_json::Value;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn first_fetch_misses_then_serves_from_cache() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/trending").await;
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["cached"], false);
    assert_eq!(json["videos"].as_array().unwrap().len(), 1);
    assert_eq!(json["videos"][0]["views"], "1.2M");

    let json: Value = app.get("/api/trending").await.json().await.unwrap();
    assert_eq!(json["cached"], true);

    // Second request never reached the upstream catalog
    assert_eq!(app.catalog.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn categories_have_independent_cache_slots() {
    let app = TestApp::spawn().await;

    app.get("/api/trending?category=gaming").await;
    let json: Value = app
        .get("/api/trending?category=music")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(json["cached"], false);
    assert_eq!(app.catalog.fetches.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app.get("/api/trending?category=cooking").await;
    assert_eq!(resp.status().as_u16(), 400);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "bad_request");
}
