// libs/session-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers;
use crate::services::store::SessionStore;

pub fn session_routes(store: Arc<SessionStore>) -> Router {
    Router::new()
        .route("/", post(handlers::start_session))
        .route("/", get(handlers::list_sessions))
        .route("/{session_id}", get(handlers::get_session))
        .route("/{session_id}/transcript", patch(handlers::update_transcript))
        .route("/{session_id}/end", post(handlers::end_session))
        .with_state(store)
}
