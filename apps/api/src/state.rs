use std::sync::Arc;

use crate::assistant::Assistant;
use crate::presets::PresetRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built-in job profiles. Loaded once at startup, read-only thereafter.
    pub presets: Arc<PresetRegistry>,
    /// Pluggable chat backend. Default: RuleBasedAssistant.
    /// LlmAssistant when ANTHROPIC_API_KEY is set.
    pub assistant: Arc<dyn Assistant>,
}
