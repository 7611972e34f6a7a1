//! Session registry — the only process-wide mutable shared state.
//!
//! The store is constructed once at startup and injected through `AppState`;
//! it owns every session for the process lifetime (no teardown; TTL eviction
//! could be layered on without touching the session contract). Each session
//! sits behind its own async mutex so that turns for one session are
//! serialized while unrelated sessions proceed concurrently; handlers hold
//! the session lock across the adapter call for the whole turn.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use uuid::Uuid;

use crate::interview::session::InterviewSession;
use crate::resume::profile::CandidateProfile;

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Arc<Mutex<InterviewSession>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh session with an empty history and zero counter.
    pub async fn create(
        &self,
        profile: CandidateProfile,
        max_questions: u32,
    ) -> (Uuid, Arc<Mutex<InterviewSession>>) {
        let session = InterviewSession::new(Uuid::new_v4(), profile, max_questions);
        let session_id = session.session_id;
        let session = Arc::new(Mutex::new(session));
        self.sessions
            .write()
            .await
            .insert(session_id, Arc::clone(&session));
        debug!(%session_id, max_questions, "Session registered");
        (session_id, session)
    }

    /// O(1) average lookup. `None` is a normal outcome (unknown session),
    /// not an error.
    pub async fn get(&self, session_id: &Uuid) -> Option<Arc<Mutex<InterviewSession>>> {
        self.sessions.read().await.get(session_id).cloned()
    }
}
