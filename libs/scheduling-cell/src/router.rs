// libs/scheduling-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::services::scheduler::SchedulingService;

pub fn scheduling_routes(service: Arc<SchedulingService>) -> Router {
    Router::new()
        .route("/options", post(handlers::schedule_options))
        .route("/book", post(handlers::book_appointment))
        .route("/appointments", get(handlers::list_appointments))
        .route("/appointments/{appointment_id}", get(handlers::get_appointment))
        .route(
            "/appointments/{appointment_id}/cancel",
            post(handlers::cancel_appointment),
        )
        .with_state(service)
}
