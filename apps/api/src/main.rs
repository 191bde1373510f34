use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod router;

use intake_cell::services::intake::IntakeService;
use provider_cell::services::catalog::AvailabilityCatalog;
use scheduling_cell::services::scheduler::SchedulingService;
use scheduling_cell::services::store::BookingStore;
use session_cell::services::store::SessionStore;
use shared_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HapiVet API server");

    // Load configuration and reference data
    let config = AppConfig::from_env();
    let catalog = Arc::new(AvailabilityCatalog::default());
    let booking_store = Arc::new(BookingStore::new());

    let scheduling = Arc::new(SchedulingService::new(
        catalog.clone(),
        booking_store,
        config.booking_window_days,
    ));
    let intake = Arc::new(IntakeService::new()?);
    let sessions = Arc::new(SessionStore::new());

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(catalog, scheduling, intake, sessions.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
