// Competency heatmap engine.
// Implements: seniority inference, domain scoring, gap classification, report assembly.
// Pure and synchronous; handlers call it inline.

pub mod domain_scorer;
pub mod gap;
pub mod handlers;
pub mod models;
pub mod report;
pub mod seniority;
pub mod tables;
