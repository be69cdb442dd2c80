use std::sync::Arc;

use crate::analysis::coverage::CoverageScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: KeywordCoverageScorer. Tests inject stubs.
    pub scorer: Arc<dyn CoverageScorer>,
}
