//! Report assembly — renders the transcript, asks the scoring adapter for
//! sub-scores, applies the weighting, and maps the verdict.
//!
//! Scoring failures degrade to an explicit error object instead of
//! propagating; the report flow never aborts the caller's request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::interview::session::{render_transcript, ConversationTurn};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;
use crate::report::prompts::{GRADER_SYSTEM, SCORE_PROMPT};
use crate::report::scoring::{verdict_for, weighted_score, Verdict};
use crate::resume::profile::CandidateProfile;

/// Strengths and weaknesses are capped at this many entries.
const MAX_REPORT_POINTS: usize = 3;

const MISSING_SUMMARY: &str = "No summary available.";

/// Raw scoring-adapter output. Every field is defaulted: missing scores
/// become 0, missing lists empty, a missing summary gets a placeholder at
/// assembly time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoredInterview {
    #[serde(default)]
    pub technical_score: u32,
    #[serde(default)]
    pub confidence_score: u32,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

/// The finished evaluation report. Derived once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct InterviewReport {
    pub score: u32,
    pub technical_score: u32,
    pub confidence_score: u32,
    pub verdict: Verdict,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub summary: String,
}

/// Result of report generation: a report, or an explicit error object when
/// the scoring adapter could not produce one.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportOutcome {
    Report(InterviewReport),
    Failed { error: String },
}

/// Grades a finished interview. Carried in `AppState` as `Arc<dyn InterviewScorer>`.
#[async_trait]
pub trait InterviewScorer: Send + Sync {
    async fn score(
        &self,
        profile: &CandidateProfile,
        transcript: &str,
    ) -> Result<ScoredInterview, AppError>;
}

/// LLM-backed interview scorer.
pub struct LlmInterviewScorer {
    llm: LlmClient,
}

impl LlmInterviewScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl InterviewScorer for LlmInterviewScorer {
    async fn score(
        &self,
        profile: &CandidateProfile,
        transcript: &str,
    ) -> Result<ScoredInterview, AppError> {
        let profile_json = serde_json::to_string_pretty(profile)
            .map_err(|e| AppError::Llm(format!("Failed to serialize profile: {e}")))?;

        let system = format!("{GRADER_SYSTEM}\n\n{JSON_ONLY_SYSTEM}");
        let prompt = SCORE_PROMPT
            .replace("{profile_json}", &profile_json)
            .replace("{transcript}", transcript);

        self.llm
            .call_json::<ScoredInterview>(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Interview scoring failed: {e}")))
    }
}

/// Produces the evaluation report for a finished session.
pub async fn generate(
    history: &[ConversationTurn],
    profile: &CandidateProfile,
    scorer: &dyn InterviewScorer,
) -> ReportOutcome {
    let transcript = render_transcript(history);

    match scorer.score(profile, &transcript).await {
        Ok(scored) => ReportOutcome::Report(assemble(scored)),
        Err(e) => {
            warn!("Interview scoring failed: {e}");
            ReportOutcome::Failed {
                error: "Could not generate report".to_string(),
            }
        }
    }
}

/// Applies the weighting, verdict mapping, and defaulting rules.
fn assemble(scored: ScoredInterview) -> InterviewReport {
    // Sub-scores are documented as 0-100; out-of-range adapter output is
    // clamped rather than rejected.
    let technical_score = scored.technical_score.min(100);
    let confidence_score = scored.confidence_score.min(100);
    let score = weighted_score(technical_score, confidence_score);

    let mut strengths = scored.strengths;
    strengths.truncate(MAX_REPORT_POINTS);
    let mut weaknesses = scored.weaknesses;
    weaknesses.truncate(MAX_REPORT_POINTS);

    let summary = if scored.summary.trim().is_empty() {
        MISSING_SUMMARY.to_string()
    } else {
        scored.summary
    };

    InterviewReport {
        score,
        technical_score,
        confidence_score,
        verdict: verdict_for(score),
        strengths,
        weaknesses,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::session::ConversationTurn;
    use std::sync::Mutex;

    struct FixedScorer(ScoredInterview);

    #[async_trait]
    impl InterviewScorer for FixedScorer {
        async fn score(
            &self,
            _profile: &CandidateProfile,
            _transcript: &str,
        ) -> Result<ScoredInterview, AppError> {
            Ok(self.0.clone())
        }
    }

    struct FailingScorer;

    #[async_trait]
    impl InterviewScorer for FailingScorer {
        async fn score(
            &self,
            _profile: &CandidateProfile,
            _transcript: &str,
        ) -> Result<ScoredInterview, AppError> {
            Err(AppError::Llm("scorer offline".to_string()))
        }
    }

    struct RecordingScorer {
        transcripts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl InterviewScorer for RecordingScorer {
        async fn score(
            &self,
            _profile: &CandidateProfile,
            transcript: &str,
        ) -> Result<ScoredInterview, AppError> {
            self.transcripts.lock().unwrap().push(transcript.to_string());
            Ok(ScoredInterview::default())
        }
    }

    fn scored(technical: u32, confidence: u32) -> ScoredInterview {
        ScoredInterview {
            technical_score: technical,
            confidence_score: confidence,
            strengths: vec!["clear explanations".to_string()],
            weaknesses: vec!["few metrics".to_string()],
            summary: "Solid performance.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_generate_applies_weighting_and_verdict() {
        let outcome = generate(
            &[],
            &CandidateProfile::default(),
            &FixedScorer(scored(90, 60)),
        )
        .await;

        match outcome {
            ReportOutcome::Report(report) => {
                assert_eq!(report.score, 81);
                assert_eq!(report.technical_score, 90);
                assert_eq!(report.confidence_score, 60);
                assert_eq!(report.verdict, Verdict::Hire);
                assert_eq!(report.summary, "Solid performance.");
            }
            ReportOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[tokio::test]
    async fn test_generate_degrades_to_error_object_on_scorer_failure() {
        let outcome = generate(&[], &CandidateProfile::default(), &FailingScorer).await;

        match outcome {
            ReportOutcome::Failed { error } => assert_eq!(error, "Could not generate report"),
            ReportOutcome::Report(_) => panic!("expected error object"),
        }
    }

    #[tokio::test]
    async fn test_generate_renders_history_for_scorer() {
        let history = vec![
            ConversationTurn::interviewer("What is ownership?"),
            ConversationTurn::candidate("A move semantics model."),
        ];
        let scorer = RecordingScorer {
            transcripts: Mutex::new(Vec::new()),
        };

        generate(&history, &CandidateProfile::default(), &scorer).await;

        let transcripts = scorer.transcripts.lock().unwrap();
        assert_eq!(transcripts[0], render_transcript(&history));
    }

    #[tokio::test]
    async fn test_empty_history_still_yields_well_formed_report() {
        let outcome = generate(
            &[],
            &CandidateProfile::default(),
            &FixedScorer(ScoredInterview::default()),
        )
        .await;

        match outcome {
            ReportOutcome::Report(report) => {
                assert_eq!(report.score, 0);
                assert_eq!(report.verdict, Verdict::NoHire);
                assert_eq!(report.summary, MISSING_SUMMARY);
            }
            ReportOutcome::Failed { error } => panic!("unexpected failure: {error}"),
        }
    }

    #[test]
    fn test_missing_adapter_fields_default() {
        let scored: ScoredInterview = serde_json::from_str("{}").unwrap();
        let report = assemble(scored);

        assert_eq!(report.score, 0);
        assert_eq!(report.technical_score, 0);
        assert_eq!(report.confidence_score, 0);
        assert!(report.strengths.is_empty());
        assert!(report.weaknesses.is_empty());
        assert_eq!(report.summary, MISSING_SUMMARY);
    }

    #[test]
    fn test_assemble_caps_lists_and_clamps_scores() {
        let report = assemble(ScoredInterview {
            technical_score: 150,
            confidence_score: 90,
            strengths: (0..5).map(|i| format!("strength {i}")).collect(),
            weaknesses: Vec::new(),
            summary: "  ".to_string(),
        });

        assert_eq!(report.technical_score, 100);
        assert_eq!(report.score, weighted_score(100, 90));
        assert_eq!(report.strengths.len(), MAX_REPORT_POINTS);
        assert_eq!(report.summary, MISSING_SUMMARY);
    }

    #[test]
    fn test_failed_outcome_serializes_as_error_object() {
        let outcome = ReportOutcome::Failed {
            error: "Could not generate report".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"error":"Could not generate report"}"#
        );
    }
}
