use std::collections::HashMap;
use std::path::{Path, PathBuf};

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vidlens_analysis::{AnalysisOutcome, Pace, Segment, Transcript};
use vidlens_services::media::extract_video_id;
use vidlens_services::{MediaSource, SpeechToText};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    success: bool,
    text: String,
    segments: Vec<Segment>,
    /// One entry per configured analysis task, fallback text on failure.
    #[serde(flatten)]
    results: HashMap<&'static str, String>,
    overall_score: Option<i64>,
    percentile: Option<u32>,
    total_analyzed: u64,
    pace: Option<Pace>,
    video_title: String,
    video_source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
}

fn build_response(
    transcript: Transcript,
    outcome: AnalysisOutcome,
    video_title: String,
    video_source: &'static str,
    video_url: Option<String>,
) -> AnalyzeResponse {
    AnalyzeResponse {
        success: true,
        text: transcript.text,
        segments: transcript.segments,
        results: outcome.results,
        overall_score: outcome.overall_score,
        percentile: outcome.percentile,
        total_analyzed: outcome.total_analyzed,
        pace: outcome.pace,
        video_title,
        video_source,
        video_url,
    }
}

/// POST /api/transcribe: multipart upload, transcribe, analyze.
pub async fn transcribe_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut upload: Option<(String, PathBuf)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("video") {
            continue;
        }
        let original_name = field
            .file_name()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "Uploaded Video".to_string());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        // Spool to disk with the original extension preserved; the
        // speech-to-text service sniffs format from the file name.
        let ext = Path::new(&original_name)
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();
        let dir = state.media.work_dir().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(format!("{}{}", uuid::Uuid::new_v4(), ext));
        tokio::fs::write(&path, &bytes).await?;

        upload = Some((original_name, path));
        break;
    }

    let (file_name, path) =
        upload.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    let result = run_analysis(&state, &path).await;
    cleanup(&path).await;
    let (transcript, outcome) = result?;

    Ok(Json(build_response(
        transcript, outcome, file_name, "upload", None,
    )))
}

#[derive(Deserialize)]
pub struct TranscribeUrlRequest {
    pub url: String,
}

/// POST /api/transcribe-url: fetch audio from a source locator,
/// transcribe, analyze.
pub async fn transcribe_url(
    State(state): State<AppState>,
    Json(request): Json<TranscribeUrlRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::BadRequest("No URL provided".to_string()));
    }
    // Reject unrecognized locators before spawning any downloader process.
    if extract_video_id(&request.url).is_none() {
        return Err(ApiError::BadRequest("Invalid video URL".to_string()));
    }

    let title = state
        .media
        .fetch_title(&request.url)
        .await
        .unwrap_or_else(|| "YouTube Video".to_string());

    let audio_path = state.media.fetch_audio(&request.url).await?;
    info!(title = %title, "Audio downloaded, starting transcription");

    let result = run_analysis(&state, &audio_path).await;
    cleanup(&audio_path).await;
    let (transcript, outcome) = result?;

    Ok(Json(build_response(
        transcript,
        outcome,
        title,
        "youtube",
        Some(request.url),
    )))
}

#[derive(Serialize)]
pub struct CompetitorResponse {
    success: bool,
    is_competitor_analysis: bool,
    text: String,
    video_title: String,
    video_url: String,
    /// One entry per competitor task, fallback text on failure.
    #[serde(flatten)]
    results: HashMap<&'static str, String>,
}

/// POST /api/analyze-competitor: study someone else's video. Fetches the
/// audio, transcribes it, and runs the competitor task set; the benchmark
/// store is never touched on this path.
pub async fn analyze_competitor(
    State(state): State<AppState>,
    Json(request): Json<TranscribeUrlRequest>,
) -> Result<Json<CompetitorResponse>, ApiError> {
    if request.url.trim().is_empty() {
        return Err(ApiError::BadRequest("No URL provided".to_string()));
    }
    if extract_video_id(&request.url).is_none() {
        return Err(ApiError::BadRequest("Invalid video URL".to_string()));
    }

    let title = state
        .media
        .fetch_title(&request.url)
        .await
        .unwrap_or_else(|| "Competitor Video".to_string());

    let audio_path = state.media.fetch_audio(&request.url).await?;
    info!(title = %title, "Competitor audio downloaded, starting transcription");

    let transcribed = async {
        let transcript = state.stt.transcribe_file(&audio_path).await?;
        let results = state.engine.analyze_competitor(&transcript).await?;
        Ok::<_, ApiError>((transcript, results))
    }
    .await;
    cleanup(&audio_path).await;
    let (transcript, results) = transcribed?;

    Ok(Json(CompetitorResponse {
        success: true,
        is_competitor_analysis: true,
        text: transcript.text,
        video_title: title,
        video_url: request.url,
        results,
    }))
}

async fn run_analysis(
    state: &AppState,
    audio_path: &Path,
) -> Result<(Transcript, AnalysisOutcome), ApiError> {
    let transcript = state.stt.transcribe_file(audio_path).await?;
    let outcome = state.engine.analyze(&transcript).await?;
    Ok((transcript, outcome))
}

async fn cleanup(path: &Path) {
    if let Err(error) = tokio::fs::remove_file(path).await {
        debug!(path = %path.display(), %error, "Could not remove audio artifact");
    }
}
