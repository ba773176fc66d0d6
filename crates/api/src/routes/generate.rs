use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;
use vidlens_services::thumbnail::build_thumbnail_prompt;
use vidlens_services::{ImageGenBackend, ScriptLength, ScriptSpec, ScriptStyle, ThumbnailStyle};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct GenerateScriptRequest {
    pub topic: String,
    pub length: Option<String>,
    pub style: Option<String>,
    pub target_audience: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateScriptResponse {
    pub success: bool,
    pub script: String,
}

/// POST /api/generate-script: write a full video script for a topic.
/// Unknown length/style values resolve to the defaults.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(request): Json<GenerateScriptRequest>,
) -> Result<Json<GenerateScriptResponse>, ApiError> {
    if request.topic.trim().is_empty() {
        return Err(ApiError::BadRequest("Topic is required".to_string()));
    }

    let spec = ScriptSpec {
        length: ScriptLength::parse_or_default(request.length.as_deref()),
        style: ScriptStyle::parse_or_default(request.style.as_deref()),
        target_audience: request.target_audience,
    };

    let script = state
        .script_writer
        .generate(&request.topic, &spec)
        .await
        .map_err(|error| {
            warn!(%error, "Script generation failed");
            ApiError::Upstream(format!("Failed to generate script: {error}"))
        })?;

    Ok(Json(GenerateScriptResponse {
        success: true,
        script,
    }))
}

#[derive(Deserialize)]
pub struct GenerateThumbnailRequest {
    pub video_title: Option<String>,
    pub video_topic: Option<String>,
    pub transcript_summary: Option<String>,
    pub style: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateThumbnailResponse {
    pub success: bool,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

/// POST /api/generate-thumbnail: generate a thumbnail image for a video.
/// Title takes precedence over topic; one of the two is required.
pub async fn generate_thumbnail(
    State(state): State<AppState>,
    Json(request): Json<GenerateThumbnailRequest>,
) -> Result<Json<GenerateThumbnailResponse>, ApiError> {
    let topic = request
        .video_title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .or(request.video_topic.as_deref())
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Video title or topic is required".to_string()))?;

    let style = ThumbnailStyle::parse_or_default(request.style.as_deref());
    let prompt = build_thumbnail_prompt(topic, request.transcript_summary.as_deref(), style);

    let image = state.image_gen.generate(&prompt).await?;

    Ok(Json(GenerateThumbnailResponse {
        success: true,
        image_url: image.url,
        revised_prompt: image.revised_prompt,
    }))
}
