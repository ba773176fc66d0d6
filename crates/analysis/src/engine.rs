use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

use crate::backend::{GenRequest, TextGenBackend};
use crate::benchmark::BenchmarkStore;
use crate::pace::{compute_pace, Pace};
use crate::score::extract_overall_score;
use crate::task::{AnalyzerTask, CompetitorTask, TaskContext};
use crate::Transcript;

/// Aggregated task outputs, keyed by [`AnalyzerTask::key`]. Always contains
/// exactly one entry per configured task.
pub type AnalysisResult = HashMap<&'static str, String>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Transcript text is empty")]
    EmptyTranscript,
}

/// Everything `analyze` produces for one transcript.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub results: AnalysisResult,
    /// Overall score extracted from the score task's report, if present.
    pub overall_score: Option<i64>,
    /// Percentile rank against the benchmark history, if defined.
    pub percentile: Option<u32>,
    /// Total transcripts ever benchmarked, after this call.
    pub total_analyzed: u64,
    pub pace: Option<Pace>,
}

/// One unit of concurrent work: a prepared request plus the key and
/// fallback text its outcome is stored under.
struct TaskJob {
    key: &'static str,
    fallback: &'static str,
    request: GenRequest,
}

/// Runs the configured analysis tasks concurrently over one transcript and
/// folds the designated score output into the benchmark store.
///
/// Created once at startup and shared via `Arc`. The backend and the
/// benchmark store are injected so tests can construct isolated instances.
pub struct AnalysisEngine {
    backend: Arc<dyn TextGenBackend>,
    benchmark: Arc<BenchmarkStore>,
}

impl AnalysisEngine {
    pub fn new(backend: Arc<dyn TextGenBackend>, benchmark: Arc<BenchmarkStore>) -> Self {
        Self { backend, benchmark }
    }

    pub fn benchmark(&self) -> &BenchmarkStore {
        &self.benchmark
    }

    /// Dispatches each job as an independent concurrent unit and joins
    /// them all before returning.
    ///
    /// Each job calls the backend exactly once; on any failure the job's
    /// fixed fallback string is stored under its key instead, so no job's
    /// failure affects any other job or the shape of the result. There is
    /// no first-completed race and no cancellation: the result is not
    /// observable until every job has settled.
    async fn dispatch(&self, jobs: Vec<TaskJob>) -> AnalysisResult {
        let mut set = JoinSet::new();
        let mut fallbacks = Vec::with_capacity(jobs.len());

        for TaskJob {
            key,
            fallback,
            request,
        } in jobs
        {
            fallbacks.push((key, fallback));
            let backend = Arc::clone(&self.backend);
            set.spawn(async move {
                match backend.generate(request).await {
                    Ok(text) => (key, text),
                    Err(error) => {
                        warn!(
                            task = key,
                            backend = backend.name(),
                            %error,
                            "Analysis task failed, using fallback"
                        );
                        (key, fallback.to_string())
                    }
                }
            });
        }

        let mut results = AnalysisResult::with_capacity(fallbacks.len());
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((key, text)) => {
                    results.insert(key, text);
                }
                Err(error) => warn!(%error, "Analysis task did not complete"),
            }
        }

        // Keep the key set exhaustive even if a task panicked.
        for (key, fallback) in fallbacks {
            results.entry(key).or_insert_with(|| fallback.to_string());
        }

        results
    }

    /// Runs the full configured analyzer task set over one transcript.
    pub async fn run_all(&self, transcript: &Transcript, ctx: &TaskContext) -> AnalysisResult {
        let jobs = AnalyzerTask::ALL
            .iter()
            .map(|task| TaskJob {
                key: task.key(),
                fallback: task.fallback(),
                request: task.build_request(transcript, ctx),
            })
            .collect();
        self.dispatch(jobs).await
    }

    /// Runs the competitor task set over someone else's transcript.
    ///
    /// Same dispatch and fallback mechanics as [`run_all`](Self::run_all),
    /// but nothing on this path touches the benchmark store: competitor
    /// videos are studied, not scored.
    pub async fn analyze_competitor(
        &self,
        transcript: &Transcript,
    ) -> Result<AnalysisResult, AnalysisError> {
        if transcript.text.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let jobs = CompetitorTask::ALL
            .iter()
            .map(|task| TaskJob {
                key: task.key(),
                fallback: task.fallback(),
                request: task.build_request(transcript),
            })
            .collect();
        Ok(self.dispatch(jobs).await)
    }

    /// Full analysis entrypoint: fan-out, score extraction, benchmarking.
    ///
    /// The benchmark store is only touched when a score was extracted; an
    /// extraction miss is not an error.
    pub async fn analyze(&self, transcript: &Transcript) -> Result<AnalysisOutcome, AnalysisError> {
        if transcript.text.trim().is_empty() {
            return Err(AnalysisError::EmptyTranscript);
        }

        let word_count = transcript.word_count();
        let pace = compute_pace(&transcript.segments, word_count);
        let ctx = TaskContext {
            word_count,
            pacing_note: pace.as_ref().map(Pace::note),
        };

        let results = self.run_all(transcript, &ctx).await;

        let overall_score = results
            .get(AnalyzerTask::Score.key())
            .and_then(|report| extract_overall_score(report));

        let (percentile, total_analyzed) = match overall_score {
            Some(score) => self.benchmark.record_and_rank(score),
            None => (None, self.benchmark.total()),
        };

        info!(
            word_count,
            ?overall_score,
            ?percentile,
            total_analyzed,
            "Transcript analysis complete"
        );

        Ok(AnalysisOutcome {
            results,
            overall_score,
            percentile,
            total_analyzed,
            pace,
        })
    }
}
