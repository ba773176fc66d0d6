use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::info;
use vidlens_config::OpenAiSettings;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("This video's content triggered AI safety filters. Try a different video or select a different style.")]
    ContentPolicy,
    #[error("Image provider error: {0}")]
    Provider(String),
}

/// Visual style for generated thumbnails. Unknown or missing request
/// values resolve to the default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbnailStyle {
    #[default]
    Youtube,
    Minimal,
    Dramatic,
    Colorful,
    Professional,
}

impl ThumbnailStyle {
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("minimal") => ThumbnailStyle::Minimal,
            Some("dramatic") => ThumbnailStyle::Dramatic,
            Some("colorful") => ThumbnailStyle::Colorful,
            Some("professional") => ThumbnailStyle::Professional,
            _ => ThumbnailStyle::default(),
        }
    }

    fn guide(&self) -> &'static str {
        match self {
            ThumbnailStyle::Youtube => {
                "bold, eye-catching YouTube thumbnail with vibrant colors, dramatic \
                 lighting, and text-friendly composition"
            }
            ThumbnailStyle::Minimal => {
                "clean, minimal, modern thumbnail with simple shapes and muted colors"
            }
            ThumbnailStyle::Dramatic => {
                "cinematic, dramatic thumbnail with high contrast, moody lighting, and \
                 intense atmosphere"
            }
            ThumbnailStyle::Colorful => {
                "bright, fun, colorful thumbnail with playful elements and energetic vibe"
            }
            ThumbnailStyle::Professional => {
                "professional, corporate-style thumbnail with clean design and trustworthy \
                 appearance"
            }
        }
    }
}

/// Builds the image-generation prompt. Context is trimmed so a full
/// transcript summary cannot blow up the prompt.
pub fn build_thumbnail_prompt(
    topic: &str,
    summary: Option<&str>,
    style: ThumbnailStyle,
) -> String {
    let context = summary
        .map(|s| {
            let head: String = s.chars().take(300).collect();
            format!("Context: {head}\n")
        })
        .unwrap_or_default();

    format!(
        "Create a {style}.\n\nTopic: {topic}\n{context}\n\
         Requirements:\n- NO TEXT or letters in the image\n\
         - Leave space on the right or left side for text overlay\n\
         - High quality, 4K style rendering\n\
         - Visually striking and scroll-stopping\n\
         - Suitable as a video thumbnail",
        style = style.guide(),
    )
}

/// One generated thumbnail image.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    /// The provider's rewritten prompt, when it reports one.
    pub revised_prompt: Option<String>,
}

/// Trait for pluggable image-generation providers.
#[async_trait]
pub trait ImageGenBackend: Send + Sync + 'static {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ThumbnailError>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

/// DALL-E image generation client.
pub struct DalleClient {
    settings: OpenAiSettings,
    client: reqwest::Client,
}

impl DalleClient {
    pub fn new(settings: OpenAiSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ImageGenBackend for DalleClient {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ThumbnailError> {
        info!(prompt_len = prompt.len(), "Generating thumbnail image");

        let body = json!({
            "model": "dall-e-3",
            "prompt": prompt,
            "n": 1,
            "size": "1792x1024",
            "quality": "standard",
        });

        let response: Value = self
            .client
            .post(format!("{}/images/generations", self.settings.base_url))
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.get("error") {
            if error["code"].as_str() == Some("content_policy_violation") {
                return Err(ThumbnailError::ContentPolicy);
            }
            let message = error["message"].as_str().unwrap_or("Unknown error");
            return Err(ThumbnailError::Provider(message.to_string()));
        }

        let image = &response["data"][0];
        let url = image["url"]
            .as_str()
            .ok_or_else(|| ThumbnailError::Provider("No image in response".to_string()))?
            .to_string();

        Ok(GeneratedImage {
            url,
            revised_prompt: image["revised_prompt"].as_str().map(str::to_string),
        })
    }

    fn name(&self) -> &str {
        "dall-e"
    }
}
