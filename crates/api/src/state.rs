use std::sync::Arc;
use std::time::Duration;

use vidlens_analysis::{AnalysisEngine, BenchmarkStore, TextGenBackend};
use vidlens_config::Settings;
use vidlens_services::catalog::YouTubeCatalog;
use vidlens_services::thumbnail::DalleClient;
use vidlens_services::{
    CatalogBackend, CatalogService, ImageGenBackend, MediaFetcher, MediaSource, Notifier,
    OpenAiChatBackend, ScriptWriter, SpeechToText, WhisperClient,
};

/// Shared application state. Everything is `Arc`'d so tests can assemble
/// isolated instances with fake backends.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AnalysisEngine>,
    pub benchmark: Arc<BenchmarkStore>,
    pub stt: Arc<dyn SpeechToText>,
    pub catalog: Arc<CatalogService>,
    pub media: Arc<dyn MediaSource>,
    pub script_writer: Arc<ScriptWriter>,
    pub image_gen: Arc<dyn ImageGenBackend>,
    pub notifier: Arc<Notifier>,
}

impl AppState {
    /// Wires the production backends from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        let benchmark = Arc::new(BenchmarkStore::new());
        let backend: Arc<dyn TextGenBackend> =
            Arc::new(OpenAiChatBackend::new(settings.openai.clone()));
        let engine = Arc::new(AnalysisEngine::new(
            Arc::clone(&backend),
            Arc::clone(&benchmark),
        ));

        let stt: Arc<dyn SpeechToText> = Arc::new(WhisperClient::new(settings.openai.clone()));
        let catalog_backend: Arc<dyn CatalogBackend> =
            Arc::new(YouTubeCatalog::new(settings.catalog.clone()));
        let catalog = Arc::new(CatalogService::new(
            catalog_backend,
            Duration::from_secs(settings.cache.trending_ttl_secs),
        ));

        Self {
            engine,
            benchmark,
            stt,
            catalog,
            media: Arc::new(MediaFetcher::new(settings.media.clone())),
            script_writer: Arc::new(ScriptWriter::new(backend)),
            image_gen: Arc::new(DalleClient::new(settings.openai.clone())),
            notifier: Arc::new(Notifier::new(settings.webhook.clone())),
        }
    }
}
