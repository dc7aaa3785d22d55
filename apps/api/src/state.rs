use std::sync::Arc;

use crate::advisor::ArrangementAdvisor;
use crate::config::Config;
use crate::layout::CanvasConfig;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration; retained for handlers that need flags or
    /// timeouts beyond what the constructed clients already carry.
    #[allow(dead_code)]
    pub config: Config,
    /// Design-surface constants threaded into every layout computation.
    /// Must match the rendering collaborator exactly.
    pub canvas: CanvasConfig,
    /// Present only when ANTHROPIC_API_KEY is configured; used by the
    /// emphasis annotator.
    pub llm: Option<LlmClient>,
    /// Pluggable arrangement strategy tried before the deterministic fitter.
    /// `None` means the deterministic path is the only path.
    pub advisor: Option<Arc<dyn ArrangementAdvisor>>,
}
