use crate::fixtures::test_app::TestApp;
use serde_json::Value;

#[tokio::test]
async fn stats_start_empty() {
    let app = TestApp::spawn().await;

    let json: Value = app.get("/api/stats").await.json().await.unwrap();
    assert_eq!(json["total_analyzed"], 0);
    assert_eq!(json["average_score"], 0);
}

#[tokio::test]
async fn stats_track_recorded_scores() {
    let app = TestApp::spawn().await;

    app.upload_clip().await;
    app.upload_clip().await;

    let json: Value = app.get("/api/stats").await.json().await.unwrap();
    assert_eq!(json["total_analyzed"], 2);
    assert_eq!(json["average_score"], 87);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let resp = app.get("/health").await;
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
}
