use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use vidlens_analysis::{
    AnalysisEngine, BenchmarkStore, GenRequest, Segment, TextGenBackend, Transcript,
};
use vidlens_api::{build_router, state::AppState};
use vidlens_config::WebhookSettings;
use vidlens_services::{
    CatalogBackend, CatalogCategory, CatalogError, CatalogItem, CatalogService, GeneratedImage,
    ImageGenBackend, MediaError, MediaSource, Notifier, ScriptWriter, SpeechToText, SttError,
    ThumbnailError,
};

/// Generative backend returning canned text, or failing every call.
pub struct FakeTextGen {
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl TextGenBackend for FakeTextGen {
    async fn generate(&self, request: GenRequest) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("simulated provider outage");
        }
        if request.user.contains("OVERALL SCORE") {
            Ok("1. OVERALL SCORE: 87/100\n\n2. CATEGORY SCORES: ...".to_string())
        } else {
            Ok("generated analysis text".to_string())
        }
    }

    fn name(&self) -> &str {
        "fake-textgen"
    }
}

/// Speech-to-text returning a fixed transcript regardless of input, or an
/// empty one when `silent` is set.
pub struct FakeStt {
    pub silent: bool,
}

#[async_trait]
impl SpeechToText for FakeStt {
    async fn transcribe_file(&self, _path: &Path) -> Result<Transcript, SttError> {
        if self.silent {
            return Ok(Transcript::new("", vec![]));
        }
        let text = vec!["word"; 100].join(" ");
        Ok(Transcript::new(
            text,
            vec![
                Segment {
                    start: 0.0,
                    end: 20.0,
                    text: String::new(),
                },
                Segment {
                    start: 20.0,
                    end: 40.0,
                    text: String::new(),
                },
            ],
        ))
    }

    fn name(&self) -> &str {
        "fake-stt"
    }
}

/// Media source serving a fixed title and a dummy local audio artifact.
pub struct FakeMedia {
    dir: PathBuf,
    pub fetches: AtomicUsize,
}

#[async_trait]
impl MediaSource for FakeMedia {
    async fn fetch_title(&self, _url: &str) -> Option<String> {
        Some("Fake Video Title".to_string())
    }

    async fn fetch_audio(&self, _url: &str) -> Result<PathBuf, MediaError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let path = self.dir.join("fetched.mp3");
        tokio::fs::write(&path, b"fake audio bytes").await?;
        Ok(path)
    }

    fn work_dir(&self) -> &Path {
        &self.dir
    }
}

/// Catalog backend serving one fixed item and counting upstream fetches.
pub struct FakeCatalog {
    pub fetches: AtomicUsize,
}

#[async_trait]
impl CatalogBackend for FakeCatalog {
    async fn fetch_trending(
        &self,
        _category: CatalogCategory,
    ) -> Result<Vec<CatalogItem>, CatalogError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![CatalogItem {
            id: "vid1".to_string(),
            title: "Trending clip".to_string(),
            thumbnail: Some("https://example.com/thumb.jpg".to_string()),
            channel: "Example Channel".to_string(),
            views: "1.2M".to_string(),
            view_count: 1_234_567,
            likes: Some("4000".to_string()),
            published_at: "2026-08-01T00:00:00Z".to_string(),
            url: "https://www.youtube.com/watch?v=vid1".to_string(),
        }])
    }

    fn name(&self) -> &str {
        "fake-catalog"
    }
}

/// Image generation returning a fixed URL and counting calls.
pub struct FakeImageGen {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ImageGenBackend for FakeImageGen {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ThumbnailError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(GeneratedImage {
            url: "https://images.example.com/generated.png".to_string(),
            revised_prompt: Some("a refined prompt".to_string()),
        })
    }

    fn name(&self) -> &str {
        "fake-imagegen"
    }
}

/// A running vidlens app on an ephemeral port, wired to fake backends.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub llm: Arc<FakeTextGen>,
    pub catalog: Arc<FakeCatalog>,
    pub media: Arc<FakeMedia>,
    pub image_gen: Arc<FakeImageGen>,
    // Held so spooled files have a live directory for the app's lifetime.
    _work_dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(false, false).await
    }

    /// Spawns an app whose generative backend fails every call.
    pub async fn spawn_failing() -> Self {
        Self::spawn_with(true, false).await
    }

    /// Spawns an app whose speech-to-text yields an empty transcript.
    pub async fn spawn_silent() -> Self {
        Self::spawn_with(false, true).await
    }

    async fn spawn_with(fail_generation: bool, silent_stt: bool) -> Self {
        let work_dir = tempfile::tempdir().expect("create temp work dir");

        let llm = Arc::new(FakeTextGen {
            fail: fail_generation,
            calls: AtomicUsize::new(0),
        });
        let catalog = Arc::new(FakeCatalog {
            fetches: AtomicUsize::new(0),
        });
        let media = Arc::new(FakeMedia {
            dir: work_dir.path().to_path_buf(),
            fetches: AtomicUsize::new(0),
        });
        let image_gen = Arc::new(FakeImageGen {
            calls: AtomicUsize::new(0),
        });

        let benchmark = Arc::new(BenchmarkStore::new());
        let backend = llm.clone() as Arc<dyn TextGenBackend>;
        let engine = Arc::new(AnalysisEngine::new(
            Arc::clone(&backend),
            Arc::clone(&benchmark),
        ));

        let state = AppState {
            engine,
            benchmark,
            stt: Arc::new(FakeStt { silent: silent_stt }),
            catalog: Arc::new(CatalogService::new(
                catalog.clone() as Arc<dyn CatalogBackend>,
                Duration::from_secs(60),
            )),
            media: media.clone() as Arc<dyn MediaSource>,
            script_writer: Arc::new(ScriptWriter::new(backend)),
            image_gen: image_gen.clone() as Arc<dyn ImageGenBackend>,
            notifier: Arc::new(Notifier::new(WebhookSettings { url: None })),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });

        Self {
            address,
            client: reqwest::Client::new(),
            llm,
            catalog,
            media,
            image_gen,
            _work_dir: work_dir,
        }
    }

    /// Uploads a dummy clip through /api/transcribe and returns the response.
    pub async fn upload_clip(&self) -> reqwest::Response {
        let form = reqwest::multipart::Form::new().part(
            "video",
            reqwest::multipart::Part::bytes(b"fake audio bytes".to_vec())
                .file_name("clip.mp3"),
        );
        self.client
            .post(format!("{}/api/transcribe", self.address))
            .multipart(form)
            .send()
            .await
            .expect("transcribe request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("get request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("post request")
    }
}
