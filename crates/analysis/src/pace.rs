use crate::Segment;
use serde::Serialize;

/// Qualitative speaking-pace bucket for a words-per-minute rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceBucket {
    Slow,
    Conversational,
    Energetic,
    Fast,
}

impl PaceBucket {
    /// First matching threshold wins: `<120` slow, `<150` conversational,
    /// `<180` energetic, otherwise fast. Boundary values fall upward.
    pub fn from_wpm(wpm: i64) -> Self {
        if wpm < 120 {
            PaceBucket::Slow
        } else if wpm < 150 {
            PaceBucket::Conversational
        } else if wpm < 180 {
            PaceBucket::Energetic
        } else {
            PaceBucket::Fast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaceBucket::Slow => "SLOW - might lose viewers",
            PaceBucket::Conversational => "Good - conversational",
            PaceBucket::Energetic => "Good - energetic",
            PaceBucket::Fast => "FAST - might be hard to follow",
        }
    }
}

/// Computed speaking pace for a transcript.
#[derive(Debug, Clone, Serialize)]
pub struct Pace {
    pub words_per_minute: i64,
    pub bucket: PaceBucket,
}

impl Pace {
    /// One-line note handed to the audio-notes analysis task.
    pub fn note(&self) -> String {
        format!(
            "Speaking pace: {} WPM ({})",
            self.words_per_minute,
            self.bucket.label()
        )
    }
}

/// Derives the speaking pace from segment timestamps.
///
/// Returns `None` when the segment list is empty or covers no time, in
/// which case the caller uses a neutral pace description instead.
pub fn compute_pace(segments: &[Segment], word_count: usize) -> Option<Pace> {
    let first = segments.first()?;
    let last = segments.last()?;
    let duration = last.end - first.start;
    if duration <= 0.0 {
        return None;
    }

    let wpm = (word_count as f64 / duration * 60.0).round() as i64;
    Some(Pace {
        words_per_minute: wpm,
        bucket: PaceBucket::from_wpm(wpm),
    })
}
