use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;
use vidlens_analysis::Transcript;
use vidlens_config::OpenAiSettings;

#[derive(Debug, Error)]
pub enum SttError {
    #[error("Failed to read audio file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Transcription request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Transcription provider error: {0}")]
    Provider(String),
}

/// Trait for pluggable speech-to-text services.
///
/// A failure here is fatal to the current request: it happens before the
/// analysis core is invoked, so nothing catches it downstream.
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribes a local audio file into text plus timestamped segments.
    async fn transcribe_file(&self, path: &Path) -> Result<Transcript, SttError>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// Whisper transcription client (verbose_json response format, which
/// carries the segment timestamps the pacing calculator needs).
pub struct WhisperClient {
    settings: OpenAiSettings,
    client: reqwest::Client,
}

impl WhisperClient {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    async fn transcribe_file(&self, path: &Path) -> Result<Transcript, SttError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        info!(file = %file_name, bytes = bytes.len(), "Transcribing audio");

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            )
            .text("model", self.settings.whisper_model.clone())
            .text("response_format", "verbose_json");

        let response = self
            .client
            .post(format!("{}/audio/transcriptions", self.settings.base_url))
            .bearer_auth(&self.settings.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SttError::Provider(format!("{status}: {body}")));
        }

        // verbose_json is shaped exactly like Transcript: text + segments,
        // extra fields ignored.
        let transcript: Transcript = response.json().await?;
        Ok(transcript)
    }

    fn name(&self) -> &str {
        "whisper"
    }
}
