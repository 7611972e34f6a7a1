//! Axum route handlers for the interview flow.
//!
//! Thin glue: multipart parsing and response shaping only. All interview
//! semantics live in the session state machine and the report engine.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::engine::{self, ReportOutcome};
use crate::resume::extract::extract_text;
use crate::resume::profile::CandidateProfile;
use crate::state::AppState;

/// Shown in place of a question once the budget is spent.
const CLOSING_MESSAGE: &str = "Thank you. The interview is now complete. \
Please click 'End Interview' to see your results.";

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub session_id: Uuid,
    pub profile: CandidateProfile,
    pub current_question: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub user_transcription: String,
    pub ai_response: String,
    pub is_finished: bool,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub message: String,
    pub report: ReportOutcome,
}

/// POST /api/v1/interviews
/// Multipart field `file`: the résumé PDF. Creates a session and returns the
/// first question.
pub async fn handle_start(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let document = read_field(multipart, "file")
        .await?
        .ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?
        .0;

    let raw_text = extract_text(&document).ok_or_else(|| {
        AppError::UnprocessableEntity("Resume contained no extractable text".to_string())
    })?;

    let profile = state.profile_extractor.extract(&raw_text).await;

    let (session_id, session) = state
        .sessions
        .create(profile, state.config.max_questions)
        .await;

    let mut session = session.lock().await;
    let current_question = session
        .advance(None, state.question_generator.as_ref())
        .await?
        .ok_or_else(|| {
            AppError::UnprocessableEntity("Question budget is zero; nothing to ask".to_string())
        })?;

    info!(%session_id, "Interview started");

    Ok(Json(StartInterviewResponse {
        session_id,
        profile: session.profile.clone(),
        current_question,
    }))
}

/// POST /api/v1/interviews/:session_id/answer
/// Multipart field `audio_file`: the candidate's spoken answer. Transcribes
/// it and advances the session — next question, or the closing message once
/// the budget is spent.
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AnswerResponse>, AppError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    let (audio, filename) = read_field(multipart, "audio_file")
        .await?
        .ok_or_else(|| AppError::Validation("Missing 'audio_file' field".to_string()))?;

    // The transcriber contract is infallible: a failure comes back as
    // sentinel text and flows through the turn like a real answer.
    let user_transcription = state.transcriber.transcribe(audio, &filename).await;

    // Hold the session lock for the whole turn; concurrent answers for the
    // same session must not interleave history appends.
    let mut session = session.lock().await;
    let next = session
        .advance(
            Some(user_transcription.as_str()),
            state.question_generator.as_ref(),
        )
        .await?;

    Ok(Json(match next {
        Some(question) => AnswerResponse {
            user_transcription,
            ai_response: question,
            is_finished: false,
        },
        None => AnswerResponse {
            user_transcription,
            ai_response: CLOSING_MESSAGE.to_string(),
            is_finished: true,
        },
    }))
}

/// POST /api/v1/interviews/:session_id/report
/// Grades the conversation so far and returns the weighted report.
pub async fn handle_report(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<ReportResponse>, AppError> {
    let session = state
        .sessions
        .get(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    // Snapshot under the lock; scoring runs without blocking further turns.
    let (history, profile, started_at, phase) = {
        let s = session.lock().await;
        (s.history.clone(), s.profile.clone(), s.started_at, s.phase())
    };

    info!(
        %session_id,
        ?phase,
        turns = history.len(),
        elapsed_secs = (chrono::Utc::now() - started_at).num_seconds(),
        "Generating interview report"
    );

    let report = engine::generate(&history, &profile, state.scorer.as_ref()).await;

    Ok(Json(ReportResponse {
        message: "Interview Completed".to_string(),
        report,
    }))
}

/// Pulls the named multipart field, returning its bytes and filename.
async fn read_field(
    mut multipart: Multipart,
    name: &str,
) -> Result<Option<(Bytes, String)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some(name) {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read '{name}': {e}")))?;
            return Ok(Some((data, filename)));
        }
    }
    Ok(None)
}
