use async_trait::async_trait;

/// A single generation request: role-tagged instruction/prompt pair plus an
/// output-size cap.
#[derive(Debug, Clone)]
pub struct GenRequest {
    /// System/instruction message describing the assistant persona.
    pub system: String,
    /// User message carrying the transcript and the task question.
    pub user: String,
    /// Maximum number of tokens the backend may produce.
    pub max_tokens: u32,
}

/// Trait for pluggable generative-text backends.
///
/// The analysis engine treats any error uniformly: the failing task is
/// downgraded to its fallback text and the error is logged. Timeouts, if
/// any, are the backend's responsibility.
#[async_trait]
pub trait TextGenBackend: Send + Sync + 'static {
    /// Generates text for one analysis task. Called exactly once per task
    /// per `run_all` invocation; the engine never retries.
    async fn generate(&self, request: GenRequest) -> anyhow::Result<String>;

    /// Human-readable backend name.
    fn name(&self) -> &str;
}
