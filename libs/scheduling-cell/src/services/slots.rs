// libs/scheduling-cell/src/services/slots.rs
use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use provider_cell::models::{AppointmentType, ProviderSummary};
use provider_cell::services::catalog::AvailabilityCatalog;

use crate::models::{Slot, UrgencyTier};

/// Slot starts advance in fixed 30-minute steps within a working window.
pub const SLOT_STEP_MINUTES: i64 = 30;

/// Half-open calendar range `[start, end)` expanded by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Range of `window_days` days from the later of today or the requested
    /// preferred date.
    pub fn from_preferences(
        today: NaiveDate,
        preferred_date: Option<NaiveDate>,
        window_days: i64,
    ) -> Self {
        let start = preferred_date.filter(|date| *date > today).unwrap_or(today);
        Self {
            start,
            end: start + Duration::days(window_days),
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|day| *day < self.end)
    }
}

/// Expand the catalog over a date range into discrete bookable windows.
///
/// Emission order is day-major, then provider-major in catalog order, then
/// time-ascending; ranking relies on this order to break score ties
/// deterministically. A slot must fit entirely inside the provider's window
/// for that weekday.
pub fn generate_slots(
    catalog: &AvailabilityCatalog,
    range: DateRange,
    appointment_type: AppointmentType,
    urgency: UrgencyTier,
) -> Vec<Slot> {
    let duration_minutes = catalog.duration_for(appointment_type);
    let duration = Duration::minutes(duration_minutes as i64);
    let step = Duration::minutes(SLOT_STEP_MINUTES);

    let mut slots = Vec::new();

    for date in range.days() {
        for provider in catalog.providers() {
            let Some(window) = provider.availability.window_for(date.weekday()) else {
                continue;
            };

            let window_end = date.and_time(window.end);
            let mut current = date.and_time(window.start);

            while current + duration <= window_end {
                let slot_end = current + duration;

                slots.push(Slot {
                    id: Uuid::new_v4(),
                    provider: ProviderSummary::from(provider),
                    date,
                    start_time: current.time(),
                    end_time: slot_end.time(),
                    duration_minutes,
                    appointment_type,
                    urgency,
                    is_available: true,
                    score: 0.0,
                });

                current += step;
            }
        }
    }

    debug!(
        "Generated {} candidate slots for {} between {} and {}",
        slots.len(),
        appointment_type,
        range.start,
        range.end
    );

    slots
}
