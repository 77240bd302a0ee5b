use std::sync::Arc;

use crate::config::Config;
use crate::heatmap::report::CompetencyScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable heatmap scorer. Default: RuleBasedScorer.
    pub scorer: Arc<dyn CompetencyScorer>,
}
