use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use intake_cell::router::intake_routes;
use intake_cell::services::intake::IntakeService;
use provider_cell::router::provider_routes;
use provider_cell::services::catalog::AvailabilityCatalog;
use scheduling_cell::router::scheduling_routes;
use scheduling_cell::services::scheduler::SchedulingService;
use session_cell::router::session_routes;
use session_cell::services::store::SessionStore;

pub fn create_router(
    catalog: Arc<AvailabilityCatalog>,
    scheduling: Arc<SchedulingService>,
    intake: Arc<IntakeService>,
    sessions: Arc<SessionStore>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "HapiVet API is running!" }))
        .route("/health", get(health).with_state(sessions.clone()))
        .nest("/providers", provider_routes(catalog))
        .nest("/scheduling", scheduling_routes(scheduling))
        .nest("/intake", intake_routes(intake))
        .nest("/sessions", session_routes(sessions))
}

async fn health(State(sessions): State<Arc<SessionStore>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "active_sessions": sessions.active_count().await
    }))
}
