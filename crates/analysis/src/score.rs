use std::sync::OnceLock;

use regex::Regex;

fn score_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // Label may be followed by punctuation/whitespace before the number,
        // e.g. "OVERALL SCORE: 87/100" or "1. OVERALL SCORE: [72/100]".
        Regex::new(r"(?i)OVERALL\s+SCORE[:\s\*\-\[]*(\d+)").expect("score pattern is valid")
    })
}

/// Extracts the integer following the first case-insensitive
/// "OVERALL SCORE" label in a report.
///
/// `None` is not an error; it means no score is present and the
/// benchmark step is skipped. The value is returned as-is, without
/// clamping to a 0-100 range.
pub fn extract_overall_score(report: &str) -> Option<i64> {
    score_pattern()
        .captures(report)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}
