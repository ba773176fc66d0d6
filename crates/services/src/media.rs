use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};
use vidlens_config::MediaSettings;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Invalid video URL")]
    InvalidUrl,
    #[error("Failed to run downloader: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("Download failed: {0}")]
    Download(String),
    #[error("Audio file was not created")]
    MissingArtifact,
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/shorts/)([^&\s?]+)")
            .expect("video id pattern is valid")
    })
}

/// Extracts the video id from watch/short/share URL forms.
pub fn extract_video_id(url: &str) -> Option<String> {
    video_id_pattern()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Trait for pluggable media acquisition.
#[async_trait]
pub trait MediaSource: Send + Sync + 'static {
    /// Fetches the source title; best effort, a generic fallback is fine.
    async fn fetch_title(&self, url: &str) -> Option<String>;

    /// Turns a source locator into a local audio artifact for the
    /// speech-to-text service.
    async fn fetch_audio(&self, url: &str) -> Result<PathBuf, MediaError>;

    /// Scratch directory for audio artifacts and spooled uploads.
    fn work_dir(&self) -> &Path;
}

/// Shells out to yt-dlp to turn a source locator into a local audio
/// artifact for the speech-to-text service.
pub struct MediaFetcher {
    ytdlp_bin: String,
    work_dir: PathBuf,
}

impl MediaFetcher {
    pub fn new(settings: MediaSettings) -> Self {
        let work_dir = if settings.work_dir.is_empty() {
            std::env::temp_dir().join("vidlens-uploads")
        } else {
            PathBuf::from(settings.work_dir)
        };
        Self {
            ytdlp_bin: settings.ytdlp_bin,
            work_dir,
        }
    }
}

#[async_trait]
impl MediaSource for MediaFetcher {
    async fn fetch_title(&self, url: &str) -> Option<String> {
        let output = Command::new(&self.ytdlp_bin)
            .arg("--get-title")
            .arg(url)
            .output()
            .await
            .ok()?;
        if !output.status.success() {
            warn!(url, "Could not fetch video title");
            return None;
        }
        let title = String::from_utf8_lossy(&output.stdout).trim().to_string();
        (!title.is_empty()).then_some(title)
    }

    /// Downloads the source's audio track as mp3 into the work directory.
    ///
    /// Any failure here surfaces to the caller before the analysis core is
    /// invoked (e.g. source blocked or unavailable).
    async fn fetch_audio(&self, url: &str) -> Result<PathBuf, MediaError> {
        let video_id = extract_video_id(url).ok_or(MediaError::InvalidUrl)?;

        tokio::fs::create_dir_all(&self.work_dir).await?;
        let audio_path = self.work_dir.join(format!("{video_id}.mp3"));

        info!(url, path = %audio_path.display(), "Downloading audio");

        let output = Command::new(&self.ytdlp_bin)
            .args(["-x", "--audio-format", "mp3", "--audio-quality", "9", "-o"])
            .arg(&audio_path)
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(url, %stderr, "yt-dlp download failed");
            return Err(MediaError::Download(
                "The source may be blocking this video. Try uploading the file directly instead."
                    .to_string(),
            ));
        }

        if !audio_path.exists() {
            return Err(MediaError::MissingArtifact);
        }

        Ok(audio_path)
    }

    fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}
