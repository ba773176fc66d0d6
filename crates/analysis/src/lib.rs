pub mod backend;
pub mod benchmark;
pub mod cache;
pub mod engine;
pub mod pace;
pub mod score;
pub mod task;

pub use backend::{GenRequest, TextGenBackend};
pub use benchmark::{BenchmarkStore, MAX_SCORES};
pub use cache::TtlCache;
pub use engine::{AnalysisEngine, AnalysisError, AnalysisOutcome, AnalysisResult};
pub use pace::{compute_pace, Pace, PaceBucket};
pub use score::extract_overall_score;
pub use task::{AnalyzerTask, CompetitorTask, TaskContext};

use serde::{Deserialize, Serialize};

/// One timestamped segment of a transcript, in seconds since the start of
/// the recording. Start/end times are monotonically non-decreasing across
/// the segment list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub text: String,
}

/// A speech-to-text transcript: full text plus ordered timestamped segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub text: String,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            text: text.into(),
            segments,
        }
    }

    /// Whitespace-delimited word count of the full text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
