use std::sync::Arc;

use crate::config::Config;
use crate::routing::ranker::InterviewerRanker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ranker. Default: WeightedRanker over the fixed weight table.
    pub ranker: Arc<dyn InterviewerRanker>,
}
