//! Gap classification: raw score → competency level, seniority benchmark lookup,
//! gap size and severity.

use crate::heatmap::models::{
    CompetencyDomain, CompetencyLevel, GapStatus, HeatmapEntry, SeniorityLevel,
};
use crate::heatmap::tables::benchmark_row;

const EXPERT_THRESHOLD: u32 = 80;
const HIGH_THRESHOLD: u32 = 60;
const INTERMEDIATE_THRESHOLD: u32 = 35;

const CRITICAL_GAP_POINTS: u32 = 20;
const WARNING_GAP_POINTS: u32 = 8;

/// Maps a raw 0 – 100 score to a competency band.
///
/// These thresholds are independent of `CompetencyLevel::representative_score`,
/// which only feeds target lookup.
pub fn level_from_score(score: u32) -> CompetencyLevel {
    match score {
        s if s >= EXPERT_THRESHOLD => CompetencyLevel::Expert,
        s if s >= HIGH_THRESHOLD => CompetencyLevel::High,
        s if s >= INTERMEDIATE_THRESHOLD => CompetencyLevel::Intermediate,
        _ => CompetencyLevel::Beginner,
    }
}

/// Expected level for a domain at a seniority. Defaults to Intermediate.
pub fn target_benchmark(seniority: SeniorityLevel, domain: CompetencyDomain) -> CompetencyLevel {
    benchmark_row(seniority)
        .map(|row| row[domain.index()])
        .unwrap_or(CompetencyLevel::Intermediate)
}

pub fn gap_status(gap_points: u32) -> GapStatus {
    if gap_points >= CRITICAL_GAP_POINTS {
        GapStatus::Critical
    } else if gap_points >= WARNING_GAP_POINTS {
        GapStatus::Warning
    } else {
        GapStatus::Pass
    }
}

/// Builds the heatmap entry for one scored domain.
pub fn classify_domain(
    domain: CompetencyDomain,
    raw_score: u32,
    seniority: SeniorityLevel,
) -> HeatmapEntry {
    let target_benchmark = target_benchmark(seniority, domain);
    let target_score = target_benchmark.representative_score();
    let gap_points = target_score.saturating_sub(raw_score);

    HeatmapEntry {
        domain,
        raw_score,
        your_level: level_from_score(raw_score),
        target_benchmark,
        target_score,
        gap_status: gap_status(gap_points),
        gap_points,
    }
}
