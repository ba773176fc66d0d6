use crate::fixtures::test_app::TestApp;
use serde_json::Value;
use std::sync::atomic::Ordering;

const COMPETITOR_KEYS: [&str; 5] = [
    "success_analysis",
    "structure_analysis",
    "tactics_analysis",
    "seo_analysis",
    "competitor_summary",
];

#[tokio::test]
async fn competitor_url_returns_all_analyses() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json(
            "/api/analyze-competitor",
            &serde_json::json!({ "url": "https://youtu.be/rival42" }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["is_competitor_analysis"], true);
    assert_eq!(json["video_title"], "Fake Video Title");
    assert_eq!(json["video_url"], "https://youtu.be/rival42");
    for key in COMPETITOR_KEYS {
        assert!(json[key].is_string(), "missing competitor key {key}");
    }

    // One backend call per competitor task, none of the main analyzer set
    assert_eq!(app.llm.calls.load(Ordering::SeqCst), COMPETITOR_KEYS.len());
}

#[tokio::test]
async fn competitor_analysis_never_touches_the_benchmark() {
    let app = TestApp::spawn().await;

    app.post_json(
        "/api/analyze-competitor",
        &serde_json::json!({ "url": "https://youtu.be/rival42" }),
    )
    .await;

    let stats: Value = app.get("/api/stats").await.json().await.unwrap();
    assert_eq!(stats["total_analyzed"], 0);
}

#[tokio::test]
async fn competitor_tasks_fall_back_on_provider_outage() {
    let app = TestApp::spawn_failing().await;

    let resp = app
        .post_json(
            "/api/analyze-competitor",
            &serde_json::json!({ "url": "https://youtu.be/rival42" }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    for key in COMPETITOR_KEYS {
        let text = json[key].as_str().unwrap();
        assert!(
            text.contains("could not be generated") || text == "Competitor video analysis",
            "expected fallback for {key}, got {text}"
        );
    }
}

#[tokio::test]
async fn competitor_rejects_invalid_url() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_json(
            "/api/analyze-competitor",
            &serde_json::json!({ "url": "https://example.com/not-a-video" }),
        )
        .await;

    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(app.media.fetches.load(Ordering::SeqCst), 0);
}
