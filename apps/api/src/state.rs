use std::sync::Arc;

use crate::llm_client::TextGenerator;
use crate::resume::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Text generator behind the suggestion endpoint. Default: `LlmClient` (Gemini).
    pub llm: Arc<dyn TextGenerator>,
    /// Resume persistence. Default: `PgResumeStore`.
    pub store: Arc<dyn ResumeStore>,
}
