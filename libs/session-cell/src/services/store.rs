// libs/session-cell/src/services/store.rs
use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{SessionError, SessionKind, SessionStatus, VoiceSession};

/// Explicit store for live voice sessions with a defined lifecycle: create
/// on start, update on each transcription event, delete on end or
/// disconnect.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, VoiceSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start(&self, kind: SessionKind) -> VoiceSession {
        let session = VoiceSession {
            id: Uuid::new_v4(),
            kind,
            status: SessionStatus::Active,
            transcript: String::new(),
            started_at: Utc::now(),
            last_update: None,
            ended_at: None,
        };

        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        info!("Voice session started: {}", session.id);

        session
    }

    /// Replace the session's transcript with the latest full text.
    pub async fn update_transcript(
        &self,
        id: Uuid,
        transcript: String,
    ) -> Result<VoiceSession, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound)?;

        session.transcript = transcript;
        session.last_update = Some(Utc::now());

        Ok(session.clone())
    }

    /// Finalize and remove the session from the active set, returning its
    /// last state.
    pub async fn end(&self, id: Uuid) -> Result<VoiceSession, SessionError> {
        let mut sessions = self.sessions.write().await;
        let mut session = sessions.remove(&id).ok_or(SessionError::NotFound)?;

        session.status = SessionStatus::Completed;
        session.ended_at = Some(Utc::now());
        debug!("Voice session ended: {}", id);

        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Option<VoiceSession> {
        self.sessions.read().await.get(&id).cloned()
    }

    pub async fn list_active(&self) -> Vec<VoiceSession> {
        let mut sessions: Vec<_> = self.sessions.read().await.values().cloned().collect();
        sessions.sort_by_key(|session| session.started_at);
        sessions
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = SessionStore::new();

        let session = store.start(SessionKind::Intake).await;
        assert_eq!(session.status, SessionStatus::Active);
        assert_eq!(store.active_count().await, 1);

        let updated = store
            .update_transcript(session.id, "my first name is Ana".to_string())
            .await
            .unwrap();
        assert_eq!(updated.transcript, "my first name is Ana");
        assert!(updated.last_update.is_some());

        let ended = store.end(session.id).await.unwrap();
        assert_eq!(ended.status, SessionStatus::Completed);
        assert!(ended.ended_at.is_some());

        // Ended sessions leave the active set entirely.
        assert_eq!(store.active_count().await, 0);
        assert!(store.get(session.id).await.is_none());
    }

    #[tokio::test]
    async fn test_unknown_session_operations() {
        let store = SessionStore::new();

        assert!(store
            .update_transcript(Uuid::new_v4(), "hello".to_string())
            .await
            .is_err());
        assert!(store.end(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn test_active_listing_is_ordered_by_start() {
        let store = SessionStore::new();

        let first = store.start(SessionKind::Intake).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = store.start(SessionKind::Diagnosis).await;

        let active = store.list_active().await;
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].id, first.id);
        assert_eq!(active[1].id, second.id);
    }
}
