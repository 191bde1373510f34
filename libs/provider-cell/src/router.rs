// libs/provider-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::catalog::AvailabilityCatalog;

pub fn provider_routes(catalog: Arc<AvailabilityCatalog>) -> Router {
    Router::new()
        .route("/", get(handlers::list_providers))
        .route("/appointment-types", get(handlers::list_appointment_types))
        .route("/{provider_id}", get(handlers::get_provider))
        .with_state(catalog)
}
