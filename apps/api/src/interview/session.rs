//! Interview session state machine.
//!
//! A session owns one candidate's conversation, question counter, and budget.
//! The only mutation path is [`InterviewSession::advance`], which decides
//! whether to ask another question or signal that the interview is over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::generator::QuestionGenerator;
use crate::resume::profile::CandidateProfile;

/// Attribution of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Interviewer,
    Candidate,
}

/// One exchange unit in the transcript. Insertion order is chronological and
/// must be preserved exactly for report generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

impl ConversationTurn {
    pub fn interviewer(content: impl Into<String>) -> Self {
        Self {
            role: Role::Interviewer,
            content: content.into(),
        }
    }

    pub fn candidate(content: impl Into<String>) -> Self {
        Self {
            role: Role::Candidate,
            content: content.into(),
        }
    }
}

/// Renders a transcript with labeled, blank-line-separated turns,
/// oldest first. Used both as generation context and in the final report.
pub fn render_transcript(history: &[ConversationTurn]) -> String {
    let mut out = String::new();
    for turn in history {
        let label = match turn.role {
            Role::Interviewer => "Interviewer",
            Role::Candidate => "Candidate",
        };
        out.push_str(label);
        out.push_str(": ");
        out.push_str(&turn.content);
        out.push_str("\n\n");
    }
    out
}

/// Where a session sits in its lifecycle, derived from the question counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingFirstQuestion,
    InProgress,
    Complete,
}

/// One candidate's ongoing or completed interview.
///
/// Invariant: `question_count` equals the number of interviewer turns in
/// `history` and never exceeds `max_questions`.
#[derive(Debug)]
pub struct InterviewSession {
    pub session_id: Uuid,
    pub profile: CandidateProfile,
    pub history: Vec<ConversationTurn>,
    pub question_count: u32,
    pub max_questions: u32,
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(session_id: Uuid, profile: CandidateProfile, max_questions: u32) -> Self {
        Self {
            session_id,
            profile,
            history: Vec::new(),
            question_count: 0,
            max_questions,
            started_at: Utc::now(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.question_count == 0 {
            SessionPhase::AwaitingFirstQuestion
        } else if self.question_count < self.max_questions {
            SessionPhase::InProgress
        } else {
            SessionPhase::Complete
        }
    }

    /// Records the candidate's answer (if any) and produces the next
    /// interviewer question, or `None` once the question budget is spent.
    ///
    /// The budget check runs before anything else: an answer submitted when
    /// the budget is already exhausted is dropped without touching the
    /// session. Kept for compatibility with the service this replaces,
    /// though it is arguably a product bug (see DESIGN.md).
    ///
    /// Atomicity: on generator failure nothing is mutated. The candidate
    /// turn, interviewer turn, and counter increment commit together or not
    /// at all.
    pub async fn advance(
        &mut self,
        user_answer: Option<&str>,
        generator: &dyn QuestionGenerator,
    ) -> Result<Option<String>, AppError> {
        if self.question_count >= self.max_questions {
            return Ok(None);
        }

        // Stage the pending answer without committing it yet; the generator
        // sees it as the latest turn of the ordered context.
        let mut context = self.history.clone();
        if let Some(answer) = user_answer {
            context.push(ConversationTurn::candidate(answer));
        }

        let question = generator
            .next_question(
                &self.profile,
                &context,
                self.question_count + 1,
                self.max_questions,
            )
            .await?;

        context.push(ConversationTurn::interviewer(question.clone()));
        self.history = context;
        self.question_count += 1;

        Ok(Some(question))
    }
}
