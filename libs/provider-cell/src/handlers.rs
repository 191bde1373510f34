// libs/provider-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;

use crate::services::catalog::AvailabilityCatalog;

#[axum::debug_handler]
pub async fn list_providers(
    State(catalog): State<Arc<AvailabilityCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "providers": catalog.providers()
    })))
}

#[axum::debug_handler]
pub async fn get_provider(
    State(catalog): State<Arc<AvailabilityCatalog>>,
    Path(provider_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let provider = catalog
        .provider(provider_id)
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

    Ok(Json(json!(provider)))
}

#[axum::debug_handler]
pub async fn list_appointment_types(
    State(catalog): State<Arc<AvailabilityCatalog>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "appointment_types": catalog.appointment_types()
    })))
}
