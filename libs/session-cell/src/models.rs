// libs/session-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    Intake,
    Diagnosis,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    Completed,
}

/// One live voice session. Created on start, updated on each transcription
/// event, removed from the active set on end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceSession {
    pub id: Uuid,
    pub kind: SessionKind,
    pub status: SessionStatus,
    pub transcript: String,
    pub started_at: DateTime<Utc>,
    pub last_update: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSessionRequest {
    pub kind: SessionKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptUpdateRequest {
    pub transcript: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,
}
