pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

// Re-export the engine surface for external use
pub use models::*;
pub use services::scheduler::SchedulingService;
pub use services::store::BookingStore;
