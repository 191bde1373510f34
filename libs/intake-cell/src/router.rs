// libs/intake-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::intake::IntakeService;

pub fn intake_routes(service: Arc<IntakeService>) -> Router {
    Router::new()
        .route("/", post(handlers::create_intake))
        .route("/", get(handlers::list_intakes))
        .route("/transcript", post(handlers::analyze_transcript))
        .route("/finalize", post(handlers::finalize_intake))
        .route("/{intake_id}", get(handlers::get_intake))
        .with_state(service)
}
