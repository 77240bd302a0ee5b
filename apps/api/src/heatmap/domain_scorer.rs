//! Domain scoring: weighted category composite, keyword-matched risk penalty,
//! optional company-difficulty multiplier, clamp to 0 – 100.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::heatmap::models::{
    CompetencyDomain, DifficultyContext, DifficultyTier, RiskFinding, RiskSeverity, ScoreBreakdown,
};
use crate::heatmap::tables::{domain_config, DomainConfig};

const CRITICAL_RISK_PENALTY: f64 = 5.0;
const HIGH_RISK_PENALTY: f64 = 2.0;

/// Direction in which a non-standard difficulty context moves domain scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyPolarity {
    /// `score × (2 − factor)`: factors below 1.0 raise scores, above 1.0 lower them.
    #[default]
    Inverse,
    /// `score × factor`.
    Direct,
    /// Difficulty context is ignored.
    Disabled,
}

impl DifficultyPolarity {
    /// Multiplier applied to the running total, or `None` when no adjustment applies.
    pub fn multiplier(self, factor: f64) -> Option<f64> {
        match self {
            DifficultyPolarity::Inverse => Some(2.0 - factor),
            DifficultyPolarity::Direct => Some(factor),
            DifficultyPolarity::Disabled => None,
        }
    }
}

impl FromStr for DifficultyPolarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inverse" => Ok(DifficultyPolarity::Inverse),
            "direct" => Ok(DifficultyPolarity::Direct),
            "disabled" | "off" => Ok(DifficultyPolarity::Disabled),
            other => Err(format!(
                "unknown difficulty polarity '{other}' (expected inverse, direct or disabled)"
            )),
        }
    }
}

/// Tunable knobs for a heatmap computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub difficulty_polarity: DifficultyPolarity,
}

/// A risk finding prepared for keyword matching.
#[derive(Debug, Clone)]
pub struct RiskText {
    text: String,
    severity: RiskSeverity,
}

impl RiskText {
    pub fn prepare(findings: &[RiskFinding]) -> Vec<RiskText> {
        findings
            .iter()
            .map(|f| RiskText {
                text: format!("{} {}", f.title, f.rationale).to_lowercase(),
                severity: f.severity,
            })
            .collect()
    }

    fn matches(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.text.contains(kw))
    }
}

/// Score for one domain, with the intermediate figures kept for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainScore {
    pub domain: CompetencyDomain,
    pub weighted_sum: f64,
    pub penalty: f64,
    pub matched_findings: usize,
    pub raw_score: u32,
}

/// Scores a single domain against the prepared risk texts.
pub fn score_domain(
    domain: CompetencyDomain,
    breakdown: &ScoreBreakdown,
    risks: &[RiskText],
    difficulty: Option<&DifficultyContext>,
    policy: &ScoringPolicy,
) -> DomainScore {
    let config = domain_config(domain);

    let weighted_sum = weighted_sum(config, breakdown);
    let (penalty, matched_findings) = risk_penalty(config, risks);

    let mut total = weighted_sum - penalty;
    if let Some(multiplier) = difficulty.and_then(|ctx| difficulty_multiplier(ctx, policy)) {
        total *= multiplier;
    }

    DomainScore {
        domain,
        weighted_sum,
        penalty,
        matched_findings,
        raw_score: clamp_score(total),
    }
}

fn weighted_sum(config: &DomainConfig, breakdown: &ScoreBreakdown) -> f64 {
    config
        .weights
        .iter()
        .map(|(category, weight)| breakdown.get(*category) * weight)
        .sum()
}

/// Total penalty and number of findings whose text hit this domain's keywords.
fn risk_penalty(config: &DomainConfig, risks: &[RiskText]) -> (f64, usize) {
    risks
        .iter()
        .filter(|risk| risk.matches(config.keywords))
        .fold((0.0, 0), |(penalty, matched), risk| {
            (penalty + severity_penalty(risk.severity), matched + 1)
        })
}

fn severity_penalty(severity: RiskSeverity) -> f64 {
    match severity {
        RiskSeverity::Critical => CRITICAL_RISK_PENALTY,
        RiskSeverity::High => HIGH_RISK_PENALTY,
        RiskSeverity::Medium | RiskSeverity::Low => 0.0,
    }
}

fn difficulty_multiplier(ctx: &DifficultyContext, policy: &ScoringPolicy) -> Option<f64> {
    if ctx.tier == DifficultyTier::Standard {
        return None;
    }
    policy.difficulty_polarity.multiplier(ctx.adjustment_factor)
}

fn clamp_score(total: f64) -> u32 {
    if total.is_nan() {
        return 0;
    }
    total.clamp(0.0, 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(title: &str, rationale: &str, severity: RiskSeverity) -> RiskFinding {
        RiskFinding {
            title: title.to_string(),
            rationale: rationale.to_string(),
            severity,
        }
    }

    fn score(
        domain: CompetencyDomain,
        breakdown: &ScoreBreakdown,
        findings: &[RiskFinding],
        difficulty: Option<&DifficultyContext>,
    ) -> u32 {
        let risks = RiskText::prepare(findings);
        score_domain(domain, breakdown, &risks, difficulty, &ScoringPolicy::default()).raw_score
    }

    #[test]
    fn test_uniform_breakdown_passes_through() {
        let breakdown = ScoreBreakdown::uniform(50.0);
        for domain in CompetencyDomain::ALL {
            assert_eq!(score(domain, &breakdown, &[], None), 50);
        }
    }

    #[test]
    fn test_unconfigured_categories_contribute_nothing() {
        // Communication only reads resume clarity and round readiness.
        let breakdown = ScoreBreakdown {
            hard_requirement_match: 100.0,
            evidence_depth: 100.0,
            company_proxy: 100.0,
            ..ScoreBreakdown::default()
        };
        assert_eq!(score(CompetencyDomain::Communication, &breakdown, &[], None), 0);
    }

    #[test]
    fn test_weighted_sum_uses_domain_weights() {
        // Technical Depth: 0.6 × evidence + 0.4 × hard requirements = 0.6×80 + 0.4×50 = 68
        let breakdown = ScoreBreakdown {
            hard_requirement_match: 50.0,
            evidence_depth: 80.0,
            ..ScoreBreakdown::default()
        };
        assert_eq!(score(CompetencyDomain::TechnicalDepth, &breakdown, &[], None), 68);
    }

    #[test]
    fn test_critical_risk_subtracts_five() {
        let breakdown = ScoreBreakdown::uniform(50.0);
        let findings = [risk(
            "System design gap",
            "Limited system design exposure",
            RiskSeverity::Critical,
        )];
        assert_eq!(score(CompetencyDomain::SystemDesign, &breakdown, &findings, None), 45);
    }

    #[test]
    fn test_high_risk_subtracts_two_and_medium_low_nothing() {
        let breakdown = ScoreBreakdown::uniform(50.0);
        let findings = [
            risk("Weak coding signal", "", RiskSeverity::High),
            risk("Algorithm practice", "", RiskSeverity::Medium),
            risk("Leetcode streak", "", RiskSeverity::Low),
        ];
        let risks = RiskText::prepare(&findings);
        let result = score_domain(
            CompetencyDomain::CodingAlgorithms,
            &breakdown,
            &risks,
            None,
            &ScoringPolicy::default(),
        );
        assert_eq!(result.raw_score, 48);
        assert_eq!(result.penalty, 2.0);
        assert_eq!(result.matched_findings, 3);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive_and_checks_rationale() {
        let breakdown = ScoreBreakdown::uniform(60.0);
        let findings = [risk(
            "Thin portfolio",
            "No evidence of MENTORING or Cross-Functional work",
            RiskSeverity::Critical,
        )];
        assert_eq!(
            score(CompetencyDomain::LeadershipCollab, &breakdown, &findings, None),
            55
        );
    }

    #[test]
    fn test_one_finding_can_penalize_several_domains() {
        let breakdown = ScoreBreakdown::uniform(70.0);
        let findings = [risk(
            "Distributed debugging",
            "Unclear problem-solving in distributed outages",
            RiskSeverity::Critical,
        )];
        assert_eq!(score(CompetencyDomain::SystemDesign, &breakdown, &findings, None), 65);
        assert_eq!(score(CompetencyDomain::ProblemSolving, &breakdown, &findings, None), 65);
        assert_eq!(score(CompetencyDomain::Behavioral, &breakdown, &findings, None), 70);
    }

    #[test]
    fn test_scores_clamp_to_range() {
        let high = ScoreBreakdown::uniform(500.0);
        let low = ScoreBreakdown::uniform(-50.0);
        let many_critical: Vec<RiskFinding> = (0..40)
            .map(|_| risk("Culture conflict", "", RiskSeverity::Critical))
            .collect();
        for domain in CompetencyDomain::ALL {
            assert_eq!(score(domain, &high, &[], None), 100);
            assert_eq!(score(domain, &low, &[], None), 0);
        }
        assert_eq!(
            score(CompetencyDomain::Behavioral, &ScoreBreakdown::uniform(90.0), &many_critical, None),
            0
        );
    }

    #[test]
    fn test_nan_scores_clamp_to_zero() {
        let breakdown = ScoreBreakdown::uniform(f64::NAN);
        assert_eq!(score(CompetencyDomain::SystemDesign, &breakdown, &[], None), 0);
    }

    #[test]
    fn test_standard_tier_never_adjusts() {
        let ctx = DifficultyContext {
            tier: DifficultyTier::Standard,
            adjustment_factor: 0.5,
        };
        let breakdown = ScoreBreakdown::uniform(60.0);
        assert_eq!(score(CompetencyDomain::Behavioral, &breakdown, &[], Some(&ctx)), 60);
    }

    #[test]
    fn test_inverse_polarity_multiplies_by_two_minus_factor() {
        let breakdown = ScoreBreakdown::uniform(60.0);
        let easier = DifficultyContext {
            tier: DifficultyTier::Elevated,
            adjustment_factor: 0.9,
        };
        let harder = DifficultyContext {
            tier: DifficultyTier::Elite,
            adjustment_factor: 1.2,
        };
        let neutral = DifficultyContext {
            tier: DifficultyTier::Elite,
            adjustment_factor: 1.0,
        };
        assert_eq!(score(CompetencyDomain::Behavioral, &breakdown, &[], Some(&easier)), 66);
        assert_eq!(score(CompetencyDomain::Behavioral, &breakdown, &[], Some(&harder)), 48);
        assert_eq!(score(CompetencyDomain::Behavioral, &breakdown, &[], Some(&neutral)), 60);
    }

    #[test]
    fn test_multiplier_applies_after_penalty() {
        let breakdown = ScoreBreakdown::uniform(60.0);
        let findings = [risk("Culture fit", "", RiskSeverity::Critical)];
        let ctx = DifficultyContext {
            tier: DifficultyTier::Elite,
            adjustment_factor: 1.5,
        };
        // (60 − 5) × 0.5 = 27.5 → 28
        assert_eq!(
            score(CompetencyDomain::Behavioral, &breakdown, &findings, Some(&ctx)),
            28
        );
    }

    #[test]
    fn test_direct_and_disabled_polarity() {
        let breakdown = ScoreBreakdown::uniform(60.0);
        let ctx = DifficultyContext {
            tier: DifficultyTier::Elite,
            adjustment_factor: 1.2,
        };
        let direct = ScoringPolicy {
            difficulty_polarity: DifficultyPolarity::Direct,
        };
        let disabled = ScoringPolicy {
            difficulty_polarity: DifficultyPolarity::Disabled,
        };
        let d = score_domain(CompetencyDomain::Behavioral, &breakdown, &[], Some(&ctx), &direct);
        let off = score_domain(CompetencyDomain::Behavioral, &breakdown, &[], Some(&ctx), &disabled);
        assert_eq!(d.raw_score, 72);
        assert_eq!(off.raw_score, 60);
    }

    #[test]
    fn test_polarity_from_str() {
        assert_eq!("inverse".parse::<DifficultyPolarity>().unwrap(), DifficultyPolarity::Inverse);
        assert_eq!(" Direct ".parse::<DifficultyPolarity>().unwrap(), DifficultyPolarity::Direct);
        assert_eq!("off".parse::<DifficultyPolarity>().unwrap(), DifficultyPolarity::Disabled);
        assert!("sideways".parse::<DifficultyPolarity>().is_err());
    }
}
