// libs/session-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{SessionError, StartSessionRequest, TranscriptUpdateRequest};
use crate::services::store::SessionStore;

#[axum::debug_handler]
pub async fn start_session(
    State(store): State<Arc<SessionStore>>,
    Json(request): Json<StartSessionRequest>,
) -> Result<Json<Value>, AppError> {
    let session = store.start(request.kind).await;

    Ok(Json(json!({
        "session_id": session.id,
        "status": "ready"
    })))
}

#[axum::debug_handler]
pub async fn update_transcript(
    State(store): State<Arc<SessionStore>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<TranscriptUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    let session = store
        .update_transcript(session_id, request.transcript)
        .await
        .map_err(|e| match e {
            SessionError::NotFound => AppError::NotFound("Session not found".to_string()),
        })?;

    Ok(Json(json!({
        "session": session,
        "confidence": request.confidence
    })))
}

#[axum::debug_handler]
pub async fn end_session(
    State(store): State<Arc<SessionStore>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = store.end(session_id).await.map_err(|e| match e {
        SessionError::NotFound => AppError::NotFound("Session not found".to_string()),
    })?;

    Ok(Json(json!({
        "session": session,
        "message": "Session completed"
    })))
}

#[axum::debug_handler]
pub async fn get_session(
    State(store): State<Arc<SessionStore>>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let session = store
        .get(session_id)
        .await
        .ok_or_else(|| AppError::NotFound("Session not found".to_string()))?;

    Ok(Json(json!(session)))
}

#[axum::debug_handler]
pub async fn list_sessions(
    State(store): State<Arc<SessionStore>>,
) -> Result<Json<Value>, AppError> {
    let sessions = store.list_active().await;

    Ok(Json(json!({
        "sessions": sessions
    })))
}
