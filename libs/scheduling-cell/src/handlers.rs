// libs/scheduling-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::models::{
    AppointmentsQuery, CancelBookingRequest, ConfirmBookingPayload, ScheduleOptionsPayload,
    SchedulingError,
};
use crate::services::scheduler::SchedulingService;

/// Generate ranked schedule options for a patient request.
#[axum::debug_handler]
pub async fn schedule_options(
    State(service): State<Arc<SchedulingService>>,
    Json(payload): Json<ScheduleOptionsPayload>,
) -> Result<Json<Value>, AppError> {
    let request = payload.into_request().map_err(|missing| {
        AppError::ValidationError(format!("Missing required fields: {}", missing.join(", ")))
    })?;

    let response = service.schedule_options(&request, Utc::now()).await;

    Ok(Json(json!({
        "success": true,
        "appointment_type": response.appointment_type,
        "urgency": response.urgency,
        "options": response.options,
        "recommendations": response.recommendations,
    })))
}

/// Confirm a previously returned slot as a booking.
#[axum::debug_handler]
pub async fn book_appointment(
    State(service): State<Arc<SchedulingService>>,
    Json(payload): Json<ConfirmBookingPayload>,
) -> Result<Json<Value>, AppError> {
    let candidate = payload.into_candidate().map_err(|missing| {
        AppError::ValidationError(format!("Missing required fields: {}", missing.join(", ")))
    })?;

    let booking = service
        .confirm_booking(candidate)
        .await
        .map_err(|e| match e {
            SchedulingError::ProviderNotFound => {
                AppError::NotFound("Provider not found".to_string())
            }
            SchedulingError::ConflictDetected => {
                AppError::Conflict("Appointment slot no longer available".to_string())
            }
            SchedulingError::ValidationError(msg) => AppError::BadRequest(msg),
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!({
        "success": true,
        "appointment": booking,
        "message": "Appointment booked successfully"
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(service): State<Arc<SchedulingService>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = service
        .store()
        .get(appointment_id)
        .await
        .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

    Ok(Json(json!(booking)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(service): State<Arc<SchedulingService>>,
    Query(query): Query<AppointmentsQuery>,
) -> Result<Json<Value>, AppError> {
    let appointments = service.store().list(query.provider_id, query.date).await;

    Ok(Json(json!({
        "appointments": appointments
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(service): State<Arc<SchedulingService>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<CancelBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = service
        .store()
        .cancel(appointment_id, request.reason)
        .await
        .map_err(|e| match e {
            SchedulingError::NotFound => AppError::NotFound("Appointment not found".to_string()),
            _ => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(json!({
        "success": true,
        "appointment": booking,
        "message": "Appointment cancelled"
    })))
}
