use serde::Deserialize;

/// Top-level application settings.
///
/// Loaded from `config/default.toml` (optional) with `VIDLENS__`-prefixed
/// environment overrides, e.g. `VIDLENS__OPENAI__API_KEY`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub openai: OpenAiSettings,
    pub catalog: CatalogSettings,
    pub cache: CacheSettings,
    pub media: MediaSettings,
    pub webhook: WebhookSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: String,
    /// Chat model used for the analysis tasks.
    pub chat_model: String,
    /// Speech-to-text model used for transcription.
    pub whisper_model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub api_key: String,
    pub region: String,
    pub max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Trending catalog cache lifetime in seconds.
    pub trending_ttl_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaSettings {
    /// Path to the yt-dlp binary.
    pub ytdlp_bin: String,
    /// Directory for downloaded audio artifacts. Empty = temp dir.
    pub work_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookSettings {
    /// Chat webhook URL for signup/premium notifications. None = disabled.
    pub url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            openai: OpenAiSettings::default(),
            catalog: CatalogSettings::default(),
            cache: CacheSettings::default(),
            media: MediaSettings::default(),
            webhook: WebhookSettings::default(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            chat_model: "gpt-4o-mini".to_string(),
            whisper_model: "whisper-1".to_string(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            region: "US".to_string(),
            max_results: 12,
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            // 30 minutes
            trending_ttl_secs: 30 * 60,
        }
    }
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            ytdlp_bin: "yt-dlp".to_string(),
            work_dir: String::new(),
        }
    }
}

impl Default for WebhookSettings {
    fn default() -> Self {
        Self { url: None }
    }
}

impl Settings {
    /// Loads settings from the optional config file and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("VIDLENS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
