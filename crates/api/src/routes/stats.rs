use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_analyzed: u64,
    pub average_score: i64,
}

/// GET /api/stats, global benchmark counters.
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        total_analyzed: state.benchmark.total(),
        average_score: state.benchmark.average().unwrap_or(0),
    })
}
