//! Seniority inference from JD seniority signals and job title.
//!
//! Rules are checked in priority order and the first match wins, so
//! "Senior Staff Engineer" resolves to Staff+ rather than Senior.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::heatmap::models::{ExtractedJd, SeniorityLevel};

/// Ordered (pattern, level) rules. Tokens ending in '.' only need a leading boundary.
static SENIORITY_RULES: Lazy<Vec<(Regex, SeniorityLevel)>> = Lazy::new(|| {
    [
        (
            r"\b(?:staff|principal|l7|l8|distinguished)\b",
            SeniorityLevel::StaffPlus,
        ),
        (r"\b(?:senior|l5|l6|lead)\b|\bsr\.", SeniorityLevel::Senior),
        (r"\b(?:mid|intermediate|l4)\b", SeniorityLevel::MidLevel),
        (
            r"\b(?:junior|entry|l3|new grad)\b|\bjr\.",
            SeniorityLevel::Junior,
        ),
        (r"\bintern\b", SeniorityLevel::Intern),
    ]
    .into_iter()
    .map(|(pattern, level)| {
        (
            Regex::new(pattern).expect("seniority patterns are valid"),
            level,
        )
    })
    .collect()
});

/// Infers the role's seniority. Falls back to `Unknown` when nothing matches.
pub fn infer_seniority(jd: &ExtractedJd) -> SeniorityLevel {
    let mut haystack = jd.seniority_signals.join(" ");
    if let Some(title) = &jd.job_title {
        haystack.push(' ');
        haystack.push_str(title);
    }
    classify_seniority_text(&haystack.to_lowercase())
}

fn classify_seniority_text(text: &str) -> SeniorityLevel {
    SENIORITY_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, level)| *level)
        .unwrap_or(SeniorityLevel::Unknown)
}
