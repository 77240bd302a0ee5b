//! Axum route handlers for the Heatmap API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::heatmap::gap::target_benchmark;
use crate::heatmap::models::{
    CompetencyDomain, CompetencyHeatmap, CompetencyLevel, ExtractedJd, HeatmapInput,
    ScoreCategory, SeniorityLevel,
};
use crate::heatmap::seniority::infer_seniority;
use crate::heatmap::tables::DOMAIN_CONFIGS;
use crate::state::AppState;

/// Largest adjustment factor that still yields a non-negative multiplier.
const MAX_ADJUSTMENT_FACTOR: f64 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    pub heatmap: CompetencyHeatmap,
    pub scorer_backend: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorityResponse {
    pub seniority: SeniorityLevel,
    pub label: String,
    /// Identifier accepted by the benchmark lookup route.
    pub slug: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CategoryWeight {
    pub category: ScoreCategory,
    pub weight: f64,
}

#[derive(Debug, Serialize)]
pub struct DomainView {
    pub domain: CompetencyDomain,
    pub weights: Vec<CategoryWeight>,
    pub keywords: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DomainListResponse {
    pub domains: Vec<DomainView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkTarget {
    pub domain: CompetencyDomain,
    pub target_benchmark: CompetencyLevel,
    pub target_score: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResponse {
    pub seniority: SeniorityLevel,
    pub label: String,
    pub targets: Vec<BenchmarkTarget>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/heatmap
///
/// Computes the competency heatmap from the upstream analysis artifacts.
pub async fn handle_compute_heatmap(
    State(state): State<AppState>,
    Json(input): Json<HeatmapInput>,
) -> Result<Json<HeatmapResponse>, AppError> {
    if let Some(difficulty) = &input.difficulty {
        let factor = difficulty.adjustment_factor;
        if !(0.0..=MAX_ADJUSTMENT_FACTOR).contains(&factor) {
            return Err(AppError::Validation(format!(
                "difficulty.adjustmentFactor must be between 0 and {MAX_ADJUSTMENT_FACTOR}, got {factor}"
            )));
        }
    }

    let heatmap = state.scorer.score(&input);

    tracing::info!(
        "Heatmap: {} critical, {} warning, {} pass ({})",
        heatmap.critical_gaps,
        heatmap.warning_gaps,
        heatmap.pass_count,
        heatmap.seniority_label
    );

    Ok(Json(HeatmapResponse {
        heatmap,
        scorer_backend: state.scorer.backend().to_string(),
    }))
}

/// POST /api/v1/seniority
///
/// Previews seniority inference for a JD without scoring.
pub async fn handle_infer_seniority(Json(jd): Json<ExtractedJd>) -> Json<SeniorityResponse> {
    let seniority = infer_seniority(&jd);
    Json(SeniorityResponse {
        seniority,
        label: seniority.label().to_string(),
        slug: seniority.slug(),
    })
}

/// GET /api/v1/heatmap/domains
pub async fn handle_list_domains() -> Json<DomainListResponse> {
    let domains = DOMAIN_CONFIGS
        .iter()
        .map(|config| DomainView {
            domain: config.domain,
            weights: config
                .weights
                .iter()
                .map(|&(category, weight)| CategoryWeight { category, weight })
                .collect(),
            keywords: config.keywords.to_vec(),
        })
        .collect();

    Json(DomainListResponse { domains })
}

/// GET /api/v1/heatmap/benchmarks/:seniority
///
/// Returns the per-domain targets for a seniority slug (e.g. `senior`, `staff`).
pub async fn handle_get_benchmarks(
    Path(slug): Path<String>,
) -> Result<Json<BenchmarkResponse>, AppError> {
    let seniority = SeniorityLevel::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Seniority '{slug}' not found")))?;

    let targets = CompetencyDomain::ALL
        .iter()
        .map(|&domain| {
            let level = target_benchmark(seniority, domain);
            BenchmarkTarget {
                domain,
                target_benchmark: level,
                target_score: level.representative_score(),
            }
        })
        .collect();

    Ok(Json(BenchmarkResponse {
        seniority,
        label: seniority.label().to_string(),
        targets,
    }))
}
