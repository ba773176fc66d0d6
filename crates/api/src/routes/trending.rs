use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use vidlens_services::{CatalogCategory, CatalogItem};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct TrendingQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct TrendingResponse {
    pub success: bool,
    pub videos: Vec<CatalogItem>,
    pub cached: bool,
}

/// GET /api/trending?category=gaming, a cache-backed catalog listing.
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<TrendingResponse>, ApiError> {
    let category = match query.category.as_deref() {
        None | Some("") => CatalogCategory::All,
        Some(raw) => raw.parse()?,
    };

    let (videos, cached) = state.catalog.trending(category).await?;
    Ok(Json(TrendingResponse {
        success: true,
        videos,
        cached,
    }))
}
