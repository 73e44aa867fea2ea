use std::sync::Arc;

use crate::config::Config;
use crate::matching::vocabulary::SkillVocabulary;
use crate::pdf::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards; safe to share across
    /// concurrent analyze requests without synchronization.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable PDF text extraction backend. Default: `PdfTextExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}
