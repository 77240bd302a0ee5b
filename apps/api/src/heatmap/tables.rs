//! Static scoring tables: per-domain category weights, risk keywords, and
//! seniority benchmarks. Read-only; indexed by `CompetencyDomain::index()`.

use crate::heatmap::models::{CompetencyDomain, CompetencyLevel, ScoreCategory, SeniorityLevel};

use CompetencyLevel::{Beginner, Expert, High, Intermediate};
use ScoreCategory::{
    CompanyProxy, EvidenceDepth, HardRequirementMatch, ResumeClarity, RoundReadiness,
};

/// Static configuration for one competency domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainConfig {
    pub domain: CompetencyDomain,
    /// Relative contribution of each configured category. Unlisted categories contribute nothing.
    pub weights: &'static [(ScoreCategory, f64)],
    /// Lowercase substrings matched against risk finding text.
    pub keywords: &'static [&'static str],
}

pub const DOMAIN_CONFIGS: [DomainConfig; 8] = [
    DomainConfig {
        domain: CompetencyDomain::SystemDesign,
        weights: &[
            (HardRequirementMatch, 0.3),
            (EvidenceDepth, 0.4),
            (RoundReadiness, 0.3),
        ],
        keywords: &["system design", "architecture", "scalab", "distributed"],
    },
    DomainConfig {
        domain: CompetencyDomain::CodingAlgorithms,
        weights: &[
            (HardRequirementMatch, 0.4),
            (RoundReadiness, 0.4),
            (EvidenceDepth, 0.2),
        ],
        keywords: &["coding", "algorithm", "data structure", "leetcode", "complexity"],
    },
    DomainConfig {
        domain: CompetencyDomain::Behavioral,
        weights: &[
            (RoundReadiness, 0.4),
            (ResumeClarity, 0.3),
            (CompanyProxy, 0.3),
        ],
        keywords: &["behavioral", "behavioural", "story", "stories", "conflict", "culture"],
    },
    DomainConfig {
        domain: CompetencyDomain::Communication,
        weights: &[(ResumeClarity, 0.6), (RoundReadiness, 0.4)],
        keywords: &["communicat", "clarity", "written", "presentation", "articulat"],
    },
    DomainConfig {
        domain: CompetencyDomain::DomainKnowledge,
        weights: &[
            (HardRequirementMatch, 0.5),
            (CompanyProxy, 0.3),
            (EvidenceDepth, 0.2),
        ],
        keywords: &["domain", "industry", "business", "product sense", "regulat"],
    },
    DomainConfig {
        domain: CompetencyDomain::TechnicalDepth,
        weights: &[(EvidenceDepth, 0.6), (HardRequirementMatch, 0.4)],
        keywords: &["technical depth", "shallow", "expertise", "internals", "hands-on"],
    },
    DomainConfig {
        domain: CompetencyDomain::ProblemSolving,
        weights: &[
            (EvidenceDepth, 0.4),
            (RoundReadiness, 0.3),
            (HardRequirementMatch, 0.3),
        ],
        keywords: &["problem solving", "problem-solving", "debug", "analytical", "ambigu"],
    },
    DomainConfig {
        domain: CompetencyDomain::LeadershipCollab,
        weights: &[
            (EvidenceDepth, 0.3),
            (ResumeClarity, 0.3),
            (CompanyProxy, 0.4),
        ],
        keywords: &[
            "leadership",
            "mentor",
            "collaborat",
            "stakeholder",
            "cross-functional",
            "ownership",
        ],
    },
];

pub fn domain_config(domain: CompetencyDomain) -> &'static DomainConfig {
    &DOMAIN_CONFIGS[domain.index()]
}

// Benchmark rows, columns in domain declaration order:
// System Design, Coding, Behavioral, Communication,
// Domain Knowledge, Technical Depth, Problem Solving, Leadership.
const INTERN_BENCHMARKS: [CompetencyLevel; 8] = [
    Beginner,
    Intermediate,
    Intermediate,
    Intermediate,
    Beginner,
    Beginner,
    Intermediate,
    Beginner,
];

const JUNIOR_BENCHMARKS: [CompetencyLevel; 8] = [
    Beginner,
    High,
    Intermediate,
    Intermediate,
    Intermediate,
    Intermediate,
    High,
    Beginner,
];

const MID_BENCHMARKS: [CompetencyLevel; 8] = [
    Intermediate,
    High,
    High,
    High,
    Intermediate,
    High,
    High,
    Intermediate,
];

const SENIOR_BENCHMARKS: [CompetencyLevel; 8] = [
    High, High, High, High, High, Expert, Expert, High,
];

const STAFF_BENCHMARKS: [CompetencyLevel; 8] = [
    Expert, High, Expert, Expert, Expert, Expert, Expert, Expert,
];

/// Benchmark row for a seniority, or `None` when the seniority has no calibrated row.
pub fn benchmark_row(seniority: SeniorityLevel) -> Option<&'static [CompetencyLevel; 8]> {
    match seniority {
        SeniorityLevel::Intern => Some(&INTERN_BENCHMARKS),
        SeniorityLevel::Junior => Some(&JUNIOR_BENCHMARKS),
        SeniorityLevel::MidLevel => Some(&MID_BENCHMARKS),
        SeniorityLevel::Senior => Some(&SENIOR_BENCHMARKS),
        SeniorityLevel::StaffPlus => Some(&STAFF_BENCHMARKS),
        SeniorityLevel::Unknown => None,
    }
}
