//! Competency heatmap assembly.
//!
//! Default: `RuleBasedScorer` (pure, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn CompetencyScorer>` so the backend can be swapped
//! without touching handlers.

use std::cmp::Reverse;

use tracing::debug;

use crate::heatmap::domain_scorer::{score_domain, RiskText, ScoringPolicy};
use crate::heatmap::gap::classify_domain;
use crate::heatmap::models::{
    CompetencyDomain, CompetencyHeatmap, DifficultyContext, ExtractedJd, GapStatus, HeatmapInput,
    LlmAnalysis, ScoreBreakdown,
};
use crate::heatmap::seniority::infer_seniority;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Produces a competency heatmap from the upstream analysis artifacts.
pub trait CompetencyScorer: Send + Sync {
    fn score(&self, input: &HeatmapInput) -> CompetencyHeatmap;

    /// Backend label surfaced to callers for transparency.
    fn backend(&self) -> &'static str;
}

/// Deterministic weighted-rule scorer.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedScorer {
    pub policy: ScoringPolicy,
}

impl RuleBasedScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }
}

impl CompetencyScorer for RuleBasedScorer {
    fn score(&self, input: &HeatmapInput) -> CompetencyHeatmap {
        compute_competency_heatmap(
            &input.analysis,
            &input.breakdown,
            &input.jd,
            input.difficulty.as_ref(),
            &self.policy,
        )
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core assembly
// ────────────────────────────────────────────────────────────────────────────

/// Scores and classifies all eight domains, then orders them worst-gap first.
///
/// Ordering: Critical, then Warning, then Pass; larger gaps first within a
/// status; equal keys keep domain declaration order.
pub fn compute_competency_heatmap(
    analysis: &LlmAnalysis,
    breakdown: &ScoreBreakdown,
    jd: &ExtractedJd,
    difficulty: Option<&DifficultyContext>,
    policy: &ScoringPolicy,
) -> CompetencyHeatmap {
    let seniority = infer_seniority(jd);
    let risks = RiskText::prepare(&analysis.risks);

    let mut entries: Vec<_> = CompetencyDomain::ALL
        .iter()
        .map(|&domain| {
            let scored = score_domain(domain, breakdown, &risks, difficulty, policy);
            debug!(
                "Domain '{}': weighted={:.2} penalty={} matched={} raw={}",
                scored.domain.name(),
                scored.weighted_sum,
                scored.penalty,
                scored.matched_findings,
                scored.raw_score
            );
            classify_domain(domain, scored.raw_score, seniority)
        })
        .collect();

    // sort_by_key is stable; ties keep declaration order.
    entries.sort_by_key(|entry| (entry.gap_status.rank(), Reverse(entry.gap_points)));

    let count = |status: GapStatus| entries.iter().filter(|e| e.gap_status == status).count();
    let critical_gaps = count(GapStatus::Critical);
    let warning_gaps = count(GapStatus::Warning);
    let pass_count = count(GapStatus::Pass);

    debug!(
        "Heatmap computed: seniority={:?} critical={critical_gaps} warning={warning_gaps} pass={pass_count}",
        seniority
    );

    CompetencyHeatmap {
        total_domains: entries.len(),
        entries,
        inferred_seniority: seniority,
        seniority_label: seniority.label().to_string(),
        critical_gaps,
        warning_gaps,
        pass_count,
    }
}
