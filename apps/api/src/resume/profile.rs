//! Profile extraction — structures free-form résumé text into a
//! `CandidateProfile` via the LLM.
//!
//! The extractor contract is infallible: on any internal failure it returns a
//! profile carrying an explicit `error` marker instead of raising, so the
//! interview flow can proceed (or the client can decide to abort).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::resume::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};

/// Résumé text beyond this length is truncated before being sent to the model.
const MAX_RESUME_CHARS: usize = 30_000;

/// A single project listed on the résumé.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Structured candidate profile derived from a résumé.
///
/// Every field is defaulted so that partially malformed model output degrades
/// field-by-field instead of failing the parse as a whole. Immutable once a
/// session is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub years_of_experience: u32,
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub primary_domain: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Set instead of the normal fields when extraction failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CandidateProfile {
    /// An error-marker profile signaling that extraction failed.
    pub fn failed(reason: impl Into<String>) -> Self {
        CandidateProfile {
            error: Some(reason.into()),
            ..Default::default()
        }
    }
}

/// Turns raw résumé text into a structured profile.
/// Carried in `AppState` as `Arc<dyn ProfileExtractor>`.
#[async_trait]
pub trait ProfileExtractor: Send + Sync {
    async fn extract(&self, resume_text: &str) -> CandidateProfile;
}

/// LLM-backed profile extractor.
pub struct LlmProfileExtractor {
    llm: LlmClient,
}

impl LlmProfileExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ProfileExtractor for LlmProfileExtractor {
    async fn extract(&self, resume_text: &str) -> CandidateProfile {
        let truncated = truncate_chars(resume_text, MAX_RESUME_CHARS);
        let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", truncated);

        match self
            .llm
            .call_json::<CandidateProfile>(&prompt, RESUME_PARSE_SYSTEM)
            .await
        {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Profile extraction failed: {e}");
                CandidateProfile::failed("Failed to parse resume")
            }
        }
    }
}

/// Truncates to at most `max` characters without splitting a UTF-8 boundary.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_degrades_to_defaults() {
        let profile: CandidateProfile =
            serde_json::from_str(r#"{"full_name": "Ada Lovelace", "technical_skills": ["Rust"]}"#)
                .unwrap();
        assert_eq!(profile.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.technical_skills, vec!["Rust"]);
        assert_eq!(profile.years_of_experience, 0);
        assert!(profile.soft_skills.is_empty());
        assert!(profile.projects.is_empty());
        assert!(profile.error.is_none());
    }

    #[test]
    fn test_failed_profile_carries_marker() {
        let profile = CandidateProfile::failed("Failed to parse resume");
        assert_eq!(profile.error.as_deref(), Some("Failed to parse resume"));
        assert!(profile.full_name.is_none());
    }

    #[test]
    fn test_error_marker_not_serialized_when_absent() {
        let profile = CandidateProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("\"error\""));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 4), "héll");
        assert_eq!(truncate_chars(text, 100), text);
    }
}
