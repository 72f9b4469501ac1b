use std::sync::Arc;

use crate::config::Config;
use crate::interview::evaluator::AnswerEvaluator;
use crate::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable answer evaluator. Default: KeywordEvaluator.
    pub evaluator: Arc<dyn AnswerEvaluator>,
    /// Cookie-token-keyed session storage; empty at process start.
    pub sessions: SessionStore,
}
