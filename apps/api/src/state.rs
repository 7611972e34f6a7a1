use std::sync::Arc;

use crate::config::Config;
use crate::interview::generator::QuestionGenerator;
use crate::interview::store::SessionStore;
use crate::report::engine::InterviewScorer;
use crate::resume::profile::ProfileExtractor;
use crate::speech::Transcriber;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The adapters are trait objects so the LLM/ASR backends can be swapped (and
/// mocked in tests) without touching handler or session code.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide session registry; the sole owner of interview sessions.
    pub sessions: Arc<SessionStore>,
    pub profile_extractor: Arc<dyn ProfileExtractor>,
    pub question_generator: Arc<dyn QuestionGenerator>,
    pub scorer: Arc<dyn InterviewScorer>,
    pub transcriber: Arc<dyn Transcriber>,
    pub config: Config,
}
