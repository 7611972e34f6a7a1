//! Question generation — produces the next interviewer question from the
//! candidate profile and the conversation so far.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::interview::prompts::{INTERVIEWER_SYSTEM, OPENING_PROMPT, QUESTION_PROMPT};
use crate::interview::session::{render_transcript, ConversationTurn};
use crate::llm_client::LlmClient;
use crate::resume::profile::CandidateProfile;

/// Produces interviewer questions. Failure propagates as an error — never a
/// fabricated question. Carried in `AppState` as `Arc<dyn QuestionGenerator>`.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// `context` is the ordered conversation oldest-first, including the
    /// candidate's latest (not yet committed) answer when there is one.
    /// `question_index` is 1-based.
    async fn next_question(
        &self,
        profile: &CandidateProfile,
        context: &[ConversationTurn],
        question_index: u32,
        max_questions: u32,
    ) -> Result<String, AppError>;
}

/// LLM-backed question generator.
pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn next_question(
        &self,
        profile: &CandidateProfile,
        context: &[ConversationTurn],
        question_index: u32,
        max_questions: u32,
    ) -> Result<String, AppError> {
        let profile_json = serde_json::to_string_pretty(profile)
            .map_err(|e| AppError::Llm(format!("Failed to serialize profile: {e}")))?;

        let system = INTERVIEWER_SYSTEM
            .replace("{profile_json}", &profile_json)
            .replace("{question_index}", &question_index.to_string())
            .replace("{max_questions}", &max_questions.to_string());

        let prompt = if context.is_empty() {
            OPENING_PROMPT.to_string()
        } else {
            QUESTION_PROMPT.replace("{transcript}", &render_transcript(context))
        };

        self.llm
            .call_text(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))
    }
}
