// libs/scheduling-cell/src/services/scheduler.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use provider_cell::services::catalog::AvailabilityCatalog;

use crate::models::{
    Booking, BookingCandidate, ScheduleOptionsResponse, SchedulingError, SchedulingRequest,
};
use crate::services::{classifier, conflict, ranking, recommendations, slots, store::BookingStore};

/// The scheduling engine: classify, generate, filter, rank, recommend. The
/// computation is read-only against the catalog and a booking snapshot, so
/// requests can be served fully in parallel; only booking confirmation
/// touches mutable state.
pub struct SchedulingService {
    catalog: Arc<AvailabilityCatalog>,
    store: Arc<BookingStore>,
    window_days: i64,
}

impl SchedulingService {
    pub fn new(catalog: Arc<AvailabilityCatalog>, store: Arc<BookingStore>, window_days: i64) -> Self {
        Self {
            catalog,
            store,
            window_days,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    /// Enumerate, filter and rank candidate slots for one request.
    pub async fn schedule_options(
        &self,
        request: &SchedulingRequest,
        now: DateTime<Utc>,
    ) -> ScheduleOptionsResponse {
        let (appointment_type, urgency) = classifier::classify(&request.symptoms, request.urgency);
        debug!(
            "Scheduling request for {} classified as {} ({})",
            request.patient.full_name(),
            appointment_type,
            urgency
        );

        let range = slots::DateRange::from_preferences(
            now.date_naive(),
            request.preferred_date,
            self.window_days,
        );

        let candidates = slots::generate_slots(&self.catalog, range, appointment_type, urgency);
        let bookings = self.store.list_active(None).await;
        let available = conflict::filter_available(candidates, &bookings);
        let options = ranking::rank_slots(available, request, now);
        let recommendations = recommendations::build_recommendations(request, &options);

        info!(
            "Prepared {} schedule options ({} recommendations) for {}",
            options.len(),
            recommendations.len(),
            request.patient.full_name()
        );

        ScheduleOptionsResponse {
            appointment_type,
            urgency,
            options,
            recommendations,
        }
    }

    /// Confirm one previously returned slot. The end time is recomputed from
    /// the appointment-type duration, and the store re-checks conflicts at
    /// commit time.
    pub async fn confirm_booking(
        &self,
        candidate: BookingCandidate,
    ) -> Result<Booking, SchedulingError> {
        if !self.catalog.contains_provider(candidate.provider_id) {
            return Err(SchedulingError::ProviderNotFound);
        }

        let duration_minutes = self.catalog.duration_for(candidate.appointment_type);
        self.store.commit(candidate, duration_minutes).await
    }
}
