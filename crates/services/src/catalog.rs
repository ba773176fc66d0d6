use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use vidlens_analysis::TtlCache;
use vidlens_config::CatalogSettings;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown catalog category: {0}")]
    UnknownCategory(String),
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Catalog provider error: {0}")]
    Provider(String),
}

/// Fixed category vocabulary for the trending catalog, with `All` as the
/// explicit default arm. Unknown category strings are rejected at parse
/// time rather than silently falling through to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogCategory {
    All,
    Gaming,
    Music,
    Entertainment,
    HowTo,
    Science,
    Sports,
    News,
    Comedy,
    Education,
    Tech,
}

impl FromStr for CatalogCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CatalogCategory::All),
            "gaming" => Ok(CatalogCategory::Gaming),
            "music" => Ok(CatalogCategory::Music),
            "entertainment" => Ok(CatalogCategory::Entertainment),
            "howto" => Ok(CatalogCategory::HowTo),
            "science" => Ok(CatalogCategory::Science),
            "sports" => Ok(CatalogCategory::Sports),
            "news" => Ok(CatalogCategory::News),
            "comedy" => Ok(CatalogCategory::Comedy),
            "education" => Ok(CatalogCategory::Education),
            "tech" => Ok(CatalogCategory::Tech),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

impl CatalogCategory {
    /// Provider-side category id; `None` means no category filter.
    pub fn category_id(&self) -> Option<&'static str> {
        match self {
            CatalogCategory::All => None,
            CatalogCategory::Gaming => Some("20"),
            CatalogCategory::Music => Some("10"),
            CatalogCategory::Entertainment => Some("24"),
            CatalogCategory::HowTo => Some("26"),
            // Science & Technology share one provider category.
            CatalogCategory::Science | CatalogCategory::Tech => Some("28"),
            CatalogCategory::Sports => Some("17"),
            CatalogCategory::News => Some("25"),
            CatalogCategory::Comedy => Some("23"),
            CatalogCategory::Education => Some("27"),
        }
    }
}

/// One trending catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub channel: String,
    /// Abbreviated view count, e.g. "1.2M".
    pub views: String,
    pub view_count: u64,
    pub likes: Option<String>,
    pub published_at: String,
    pub url: String,
}

/// Trait for pluggable trending-catalog providers.
#[async_trait]
pub trait CatalogBackend: Send + Sync + 'static {
    async fn fetch_trending(
        &self,
        category: CatalogCategory,
    ) -> Result<Vec<CatalogItem>, CatalogError>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct YouTubeListResponse {
    error: Option<YouTubeError>,
    #[serde(default)]
    items: Vec<YouTubeVideo>,
}

#[derive(Debug, Deserialize)]
struct YouTubeError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct YouTubeVideo {
    id: String,
    snippet: YouTubeSnippet,
    statistics: YouTubeStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YouTubeSnippet {
    title: String,
    channel_title: String,
    published_at: String,
    thumbnails: YouTubeThumbnails,
}

#[derive(Debug, Deserialize, Default)]
struct YouTubeThumbnails {
    high: Option<YouTubeThumbnail>,
    medium: Option<YouTubeThumbnail>,
}

#[derive(Debug, Deserialize)]
struct YouTubeThumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YouTubeStatistics {
    #[serde(default)]
    view_count: String,
    like_count: Option<String>,
}

/// YouTube mostPopular chart backend.
pub struct YouTubeCatalog {
    settings: CatalogSettings,
    client: reqwest::Client,
}

impl YouTubeCatalog {
    pub fn new(settings: CatalogSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogBackend for YouTubeCatalog {
    async fn fetch_trending(
        &self,
        category: CatalogCategory,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        let mut request = self
            .client
            .get("https://www.googleapis.com/youtube/v3/videos")
            .query(&[
                ("part", "snippet,statistics"),
                ("chart", "mostPopular"),
                ("regionCode", self.settings.region.as_str()),
                ("maxResults", &self.settings.max_results.to_string()),
                ("key", self.settings.api_key.as_str()),
            ]);
        if let Some(id) = category.category_id() {
            request = request.query(&[("videoCategoryId", id)]);
        }

        let response: YouTubeListResponse = request.send().await?.json().await?;
        if let Some(error) = response.error {
            return Err(CatalogError::Provider(error.message));
        }

        let items = response
            .items
            .into_iter()
            .map(|video| {
                let view_count: u64 = video.statistics.view_count.parse().unwrap_or(0);
                let thumbnail = video
                    .snippet
                    .thumbnails
                    .high
                    .or(video.snippet.thumbnails.medium)
                    .map(|t| t.url);
                CatalogItem {
                    url: format!("https://www.youtube.com/watch?v={}", video.id),
                    id: video.id,
                    title: video.snippet.title,
                    thumbnail,
                    channel: video.snippet.channel_title,
                    views: format_views(view_count),
                    view_count,
                    likes: video.statistics.like_count,
                    published_at: video.snippet.published_at,
                }
            })
            .collect();

        Ok(items)
    }

    fn name(&self) -> &str {
        "youtube"
    }
}

/// Abbreviates a view count: 1_234_567 -> "1.2M", 45_600 -> "45.6K".
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}

/// Cache-backed trending listing over any [`CatalogBackend`].
pub struct CatalogService {
    backend: Arc<dyn CatalogBackend>,
    cache: TtlCache<CatalogCategory, Vec<CatalogItem>>,
}

impl CatalogService {
    pub fn new(backend: Arc<dyn CatalogBackend>, ttl: Duration) -> Self {
        Self {
            backend,
            cache: TtlCache::new(ttl),
        }
    }

    /// Returns the trending listing for a category along with whether it
    /// was served from cache. A stale or missing entry triggers exactly
    /// one fresh fetch, which then overwrites the cache slot.
    pub async fn trending(
        &self,
        category: CatalogCategory,
    ) -> Result<(Vec<CatalogItem>, bool), CatalogError> {
        if let Some(items) = self.cache.get(&category) {
            debug!(?category, "Trending served from cache");
            return Ok((items, true));
        }

        let items = self.backend.fetch_trending(category).await?;
        self.cache.set(category, items.clone());
        Ok((items, false))
    }
}
