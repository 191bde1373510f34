use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub booking_window_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("PORT not set or invalid, using 3001");
                    3001
                }),
            booking_window_days: env::var("BOOKING_WINDOW_DAYS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("BOOKING_WINDOW_DAYS not set or invalid, using 14");
                    14
                }),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            booking_window_days: 14,
        }
    }
}
