// libs/intake-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{IntakeError, IntakeSubmission, TranscriptRequest};
use crate::services::intake::IntakeService;

#[axum::debug_handler]
pub async fn create_intake(
    State(service): State<Arc<IntakeService>>,
    Json(submission): Json<IntakeSubmission>,
) -> Result<Json<Value>, AppError> {
    let record = service.create_record(submission).await.map_err(|e| match e {
        IntakeError::ValidationError(msg) => AppError::ValidationError(msg),
        _ => AppError::Internal(e.to_string()),
    })?;

    Ok(Json(json!({
        "success": true,
        "patient_id": record.id,
        "message": "Patient intake submitted successfully",
        "data": record
    })))
}

#[axum::debug_handler]
pub async fn analyze_transcript(
    State(service): State<Arc<IntakeService>>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<Value>, AppError> {
    let analysis = service.analyze_transcript(&request.transcript);

    Ok(Json(json!(analysis)))
}

#[axum::debug_handler]
pub async fn finalize_intake(
    State(service): State<Arc<IntakeService>>,
    Json(request): Json<TranscriptRequest>,
) -> Result<Json<Value>, AppError> {
    let finalized = service.finalize_transcript(&request.transcript).await;

    Ok(Json(json!(finalized)))
}

#[axum::debug_handler]
pub async fn get_intake(
    State(service): State<Arc<IntakeService>>,
    Path(intake_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let record = service
        .get(intake_id)
        .await
        .ok_or_else(|| AppError::NotFound("Intake record not found".to_string()))?;

    Ok(Json(json!(record)))
}

#[axum::debug_handler]
pub async fn list_intakes(
    State(service): State<Arc<IntakeService>>,
) -> Result<Json<Value>, AppError> {
    let records = service.list().await;

    Ok(Json(json!({
        "records": records
    })))
}
