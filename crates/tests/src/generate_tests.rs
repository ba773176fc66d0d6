use crate::fixtures::test_app::TestApp;
use serde_json::Value;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn script_generation_returns_script_text() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json(
            "/api/generate-script",
            &serde_json::json!({
                "topic": "how to sharpen kitchen knives",
                "length": "short",
                "style": "tutorial",
            }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["script"], "generated analysis text");
    assert_eq!(app.llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn script_generation_requires_a_topic() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json("/api/generate-script", &serde_json::json!({ "topic": "  " }))
        .await;

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(app.llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn script_generation_surfaces_provider_outage() {
    let app = TestApp::spawn_failing().await;

    let resp = app
        .post_json(
            "/api/generate-script",
            &serde_json::json!({ "topic": "anything" }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 502);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["error"], "upstream");
}

#[tokio::test]
async fn thumbnail_generation_returns_image_url() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json(
            "/api/generate-thumbnail",
            &serde_json::json!({
                "video_title": "My Best Video Yet",
                "style": "dramatic",
            }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["image_url"], "https://images.example.com/generated.png");
    assert_eq!(app.image_gen.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn thumbnail_generation_accepts_topic_in_place_of_title() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json(
            "/api/generate-thumbnail",
            &serde_json::json!({ "video_topic": "urban beekeeping" }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
}

#[tokio::test]
async fn thumbnail_generation_requires_title_or_topic() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json("/api/generate-thumbnail", &serde_json::json!({}))
        .await;

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(app.image_gen.calls.load(Ordering::SeqCst), 0);
}
