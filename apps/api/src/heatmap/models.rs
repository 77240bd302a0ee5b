//! Heatmap data model: upstream inputs and the competency gap report.
//!
//! Inputs arrive already validated from the analysis pipeline (LLM risk findings,
//! deterministic score breakdown, extracted JD fields). Output is serialized as-is
//! into the larger readiness report, so field names follow the report's camelCase.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// One of the five deterministic sub-scores produced upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    HardRequirementMatch,
    EvidenceDepth,
    RoundReadiness,
    ResumeClarity,
    CompanyProxy,
}

/// Five-category score breakdown, each nominally 0 – 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreBreakdown {
    pub hard_requirement_match: f64,
    pub evidence_depth: f64,
    pub round_readiness: f64,
    pub resume_clarity: f64,
    pub company_proxy: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::HardRequirementMatch => self.hard_requirement_match,
            ScoreCategory::EvidenceDepth => self.evidence_depth,
            ScoreCategory::RoundReadiness => self.round_readiness,
            ScoreCategory::ResumeClarity => self.resume_clarity,
            ScoreCategory::CompanyProxy => self.company_proxy,
        }
    }

    #[cfg(test)]
    pub fn uniform(score: f64) -> Self {
        Self {
            hard_requirement_match: score,
            evidence_depth: score,
            round_readiness: score,
            resume_clarity: score,
            company_proxy: score,
        }
    }
}

/// Severity of a risk finding. Ordered: Critical > High > Medium > Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl From<String> for RiskSeverity {
    fn from(label: String) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => RiskSeverity::Critical,
            "high" => RiskSeverity::High,
            "medium" => RiskSeverity::Medium,
            "low" => RiskSeverity::Low,
            other => {
                // Upstream contract violation; degrade to the no-penalty band.
                tracing::warn!("Unrecognised risk severity '{other}', treating as low");
                RiskSeverity::Low
            }
        }
    }
}

/// A ranked concern about candidate fit identified by the LLM analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub title: String,
    #[serde(default)]
    pub rationale: String,
    pub severity: RiskSeverity,
}

/// Subset of the LLM analysis consumed by the heatmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LlmAnalysis {
    #[serde(default)]
    pub risks: Vec<RiskFinding>,
}

/// Subset of the extracted job description consumed by the heatmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedJd {
    pub seniority_signals: Vec<String>,
    pub job_title: Option<String>,
}

/// Company difficulty tier. `Standard` is the baseline and never adjusts scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Standard,
    Elevated,
    Elite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyContext {
    pub tier: DifficultyTier,
    pub adjustment_factor: f64,
}

/// The four upstream artifacts bundled for a single heatmap computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapInput {
    #[serde(default)]
    pub analysis: LlmAnalysis,
    #[serde(default)]
    pub breakdown: ScoreBreakdown,
    #[serde(default)]
    pub jd: ExtractedJd,
    #[serde(default)]
    pub difficulty: Option<DifficultyContext>,
}

// ────────────────────────────────────────────────────────────────────────────
// Classifications
// ────────────────────────────────────────────────────────────────────────────

/// The eight fixed competency domains, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetencyDomain {
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Coding / Algorithms")]
    CodingAlgorithms,
    #[serde(rename = "Behavioral")]
    Behavioral,
    #[serde(rename = "Communication")]
    Communication,
    #[serde(rename = "Domain Knowledge")]
    DomainKnowledge,
    #[serde(rename = "Technical Depth")]
    TechnicalDepth,
    #[serde(rename = "Problem Solving")]
    ProblemSolving,
    #[serde(rename = "Leadership / Collab")]
    LeadershipCollab,
}

impl CompetencyDomain {
    pub const ALL: [CompetencyDomain; 8] = [
        CompetencyDomain::SystemDesign,
        CompetencyDomain::CodingAlgorithms,
        CompetencyDomain::Behavioral,
        CompetencyDomain::Communication,
        CompetencyDomain::DomainKnowledge,
        CompetencyDomain::TechnicalDepth,
        CompetencyDomain::ProblemSolving,
        CompetencyDomain::LeadershipCollab,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CompetencyDomain::SystemDesign => "System Design",
            CompetencyDomain::CodingAlgorithms => "Coding / Algorithms",
            CompetencyDomain::Behavioral => "Behavioral",
            CompetencyDomain::Communication => "Communication",
            CompetencyDomain::DomainKnowledge => "Domain Knowledge",
            CompetencyDomain::TechnicalDepth => "Technical Depth",
            CompetencyDomain::ProblemSolving => "Problem Solving",
            CompetencyDomain::LeadershipCollab => "Leadership / Collab",
        }
    }

    /// Position in declaration order; indexes the static tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Intern,
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    #[serde(rename = "Staff+")]
    StaffPlus,
    Unknown,
}

impl SeniorityLevel {
    pub fn label(self) -> &'static str {
        match self {
            SeniorityLevel::StaffPlus => "L7+ / Staff Level",
            SeniorityLevel::Senior => "L5-L6 / Senior Level",
            SeniorityLevel::MidLevel => "L4 / Mid-Level",
            SeniorityLevel::Junior => "L3 / Junior Level",
            SeniorityLevel::Intern => "Intern Level",
            SeniorityLevel::Unknown => "General Benchmark",
        }
    }

    /// URL-friendly identifier used by the benchmark lookup route.
    pub fn slug(self) -> &'static str {
        match self {
            SeniorityLevel::Intern => "intern",
            SeniorityLevel::Junior => "junior",
            SeniorityLevel::MidLevel => "mid",
            SeniorityLevel::Senior => "senior",
            SeniorityLevel::StaffPlus => "staff",
            SeniorityLevel::Unknown => "unknown",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.to_ascii_lowercase().as_str() {
            "intern" => Some(SeniorityLevel::Intern),
            "junior" => Some(SeniorityLevel::Junior),
            "mid" | "mid-level" => Some(SeniorityLevel::MidLevel),
            "senior" => Some(SeniorityLevel::Senior),
            "staff" | "staff+" => Some(SeniorityLevel::StaffPlus),
            "unknown" => Some(SeniorityLevel::Unknown),
            _ => None,
        }
    }
}

/// Qualitative competency band. Ordered: Beginner < Intermediate < High < Expert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompetencyLevel {
    Beginner,
    Intermediate,
    High,
    Expert,
}

impl CompetencyLevel {
    /// Representative score used for target lookup only.
    pub fn representative_score(self) -> u32 {
        match self {
            CompetencyLevel::Beginner => 30,
            CompetencyLevel::Intermediate => 55,
            CompetencyLevel::High => 75,
            CompetencyLevel::Expert => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GapStatus {
    Critical,
    Warning,
    Pass,
}

impl GapStatus {
    /// Sort rank: Critical first, Pass last.
    pub fn rank(self) -> u8 {
        match self {
            GapStatus::Critical => 0,
            GapStatus::Warning => 1,
            GapStatus::Pass => 2,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapEntry {
    pub domain: CompetencyDomain,
    pub raw_score: u32,
    pub your_level: CompetencyLevel,
    pub target_benchmark: CompetencyLevel,
    pub target_score: u32,
    pub gap_status: GapStatus,
    pub gap_points: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetencyHeatmap {
    pub entries: Vec<HeatmapEntry>,
    pub inferred_seniority: SeniorityLevel,
    pub seniority_label: String,
    pub total_domains: usize,
    pub critical_gaps: usize,
    pub warning_gaps: usize,
    pub pass_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parses_case_insensitively() {
        let s: RiskSeverity = serde_json::from_str(r#""Critical""#).unwrap();
        assert_eq!(s, RiskSeverity::Critical);
        let s: RiskSeverity = serde_json::from_str(r#""HIGH""#).unwrap();
        assert_eq!(s, RiskSeverity::High);
    }

    #[test]
    fn test_unknown_severity_degrades_to_low() {
        let s: RiskSeverity = serde_json::from_str(r#""blocker""#).unwrap();
        assert_eq!(s, RiskSeverity::Low);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(RiskSeverity::Critical > RiskSeverity::High);
        assert!(RiskSeverity::High > RiskSeverity::Medium);
        assert!(RiskSeverity::Medium > RiskSeverity::Low);
    }

    #[test]
    fn test_domain_index_matches_declaration_order() {
        for (i, domain) in CompetencyDomain::ALL.iter().enumerate() {
            assert_eq!(domain.index(), i);
        }
    }

    #[test]
    fn test_domain_serializes_as_display_name() {
        let json = serde_json::to_string(&CompetencyDomain::LeadershipCollab).unwrap();
        assert_eq!(json, r#""Leadership / Collab""#);
        assert_eq!(CompetencyDomain::LeadershipCollab.name(), "Leadership / Collab");
    }

    #[test]
    fn test_seniority_serde_names() {
        assert_eq!(
            serde_json::to_string(&SeniorityLevel::StaffPlus).unwrap(),
            r#""Staff+""#
        );
        assert_eq!(
            serde_json::to_string(&SeniorityLevel::MidLevel).unwrap(),
            r#""Mid-Level""#
        );
    }

    #[test]
    fn test_seniority_slug_round_trips() {
        for level in [
            SeniorityLevel::Intern,
            SeniorityLevel::Junior,
            SeniorityLevel::MidLevel,
            SeniorityLevel::Senior,
            SeniorityLevel::StaffPlus,
            SeniorityLevel::Unknown,
        ] {
            assert_eq!(SeniorityLevel::from_slug(level.slug()), Some(level));
        }
        assert_eq!(SeniorityLevel::from_slug("principal-ish"), None);
    }

    #[test]
    fn test_representative_scores() {
        assert_eq!(CompetencyLevel::Beginner.representative_score(), 30);
        assert_eq!(CompetencyLevel::Intermediate.representative_score(), 55);
        assert_eq!(CompetencyLevel::High.representative_score(), 75);
        assert_eq!(CompetencyLevel::Expert.representative_score(), 90);
    }

    #[test]
    fn test_heatmap_input_deserializes_with_missing_sections() {
        let json = r#"{
            "breakdown": {"hardRequirementMatch": 70, "evidenceDepth": 40},
            "jd": {"jobTitle": "Senior Backend Engineer"}
        }"#;
        let input: HeatmapInput = serde_json::from_str(json).unwrap();
        assert!(input.analysis.risks.is_empty());
        assert_eq!(input.breakdown.hard_requirement_match, 70.0);
        assert_eq!(input.breakdown.company_proxy, 0.0);
        assert!(input.jd.seniority_signals.is_empty());
        assert!(input.difficulty.is_none());
    }

    #[test]
    fn test_difficulty_context_deserializes() {
        let json = r#"{"tier": "elite", "adjustmentFactor": 1.2}"#;
        let ctx: DifficultyContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.tier, DifficultyTier::Elite);
        assert!((ctx.adjustment_factor - 1.2).abs() < f64::EPSILON);
    }
}
