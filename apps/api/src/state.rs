use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::config::Config;
use crate::keywords::matcher::KeywordMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analysis backend. Default: LlmResumeAnalyzer over the OpenAI client.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Keyword matcher compiled once at startup from the fixed vocabulary.
    /// Immutable, so concurrent requests share it without coordination.
    pub matcher: Arc<KeywordMatcher>,
    pub config: Config,
}
