pub mod error;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 100 MB body limit for audio/video uploads
    let api = Router::new()
        .route("/transcribe", post(routes::analyze::transcribe_upload))
        .route("/transcribe-url", post(routes::analyze::transcribe_url))
        .route(
            "/analyze-competitor",
            post(routes::analyze::analyze_competitor),
        )
        .route("/generate-script", post(routes::generate::generate_script))
        .route(
            "/generate-thumbnail",
            post(routes::generate::generate_thumbnail),
        )
        .route("/trending", get(routes::trending::trending))
        .route("/stats", get(routes::stats::stats))
        .route("/notify-signup", post(routes::notify::notify_signup))
        .route("/notify-premium", post(routes::notify::notify_premium))
        .layer(DefaultBodyLimit::max(100 * 1024 * 1024));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
