use std::sync::Arc;

use crate::analysis::catalog::SectionCatalog;
use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Section keyword table, built once at startup and never mutated.
    pub catalog: Arc<SectionCatalog>,
    /// Pluggable extraction backend. Default: `DocumentExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
}
