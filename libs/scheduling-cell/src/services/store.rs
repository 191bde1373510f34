// libs/scheduling-cell/src/services/store.rs
use chrono::{Duration, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{Booking, BookingCandidate, BookingStatus, SchedulingError};
use crate::services::conflict;

/// In-memory record store for confirmed appointments. The single shared
/// mutable resource in the engine: commits re-run the conflict check against
/// current state while holding the write lock, so "read available slots,
/// then commit" is effectively atomic and concurrent confirmations of
/// overlapping slots admit exactly one booking.
#[derive(Debug, Default)]
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active (non-cancelled) bookings, optionally restricted to one
    /// provider.
    pub async fn list_active(&self, provider_id: Option<Uuid>) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        bookings
            .iter()
            .filter(|booking| booking.is_active())
            .filter(|booking| provider_id.map_or(true, |id| booking.provider_id == id))
            .cloned()
            .collect()
    }

    /// All bookings regardless of status, filterable by provider and date.
    pub async fn list(&self, provider_id: Option<Uuid>, date: Option<NaiveDate>) -> Vec<Booking> {
        let bookings = self.bookings.read().await;
        bookings
            .iter()
            .filter(|booking| provider_id.map_or(true, |id| booking.provider_id == id))
            .filter(|booking| date.map_or(true, |d| booking.date == d))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<Booking> {
        let bookings = self.bookings.read().await;
        bookings.iter().find(|booking| booking.id == id).cloned()
    }

    /// Promote a chosen slot into a booking. The conflict check runs against
    /// current store state inside the write critical section; a failed
    /// commit leaves the store unchanged.
    pub async fn commit(
        &self,
        candidate: BookingCandidate,
        duration_minutes: i32,
    ) -> Result<Booking, SchedulingError> {
        let start = candidate.date.and_time(candidate.start_time);
        let end = start + Duration::minutes(duration_minutes as i64);

        let mut bookings = self.bookings.write().await;

        if !conflict::is_slot_available(
            &bookings,
            candidate.provider_id,
            start.and_utc(),
            end.and_utc(),
        ) {
            warn!(
                "Booking conflict for provider {} at {}",
                candidate.provider_id, start
            );
            return Err(SchedulingError::ConflictDetected);
        }

        let booking = Booking {
            id: candidate.slot_id,
            provider_id: candidate.provider_id,
            patient: candidate.patient,
            date: candidate.date,
            start_time: candidate.start_time,
            end_time: end.time(),
            duration_minutes,
            appointment_type: candidate.appointment_type,
            urgency: candidate.urgency,
            status: BookingStatus::Scheduled,
            created_at: Utc::now(),
            cancellation_reason: None,
            cancelled_at: None,
        };

        bookings.push(booking.clone());
        info!("Appointment created: {}", booking.id);

        Ok(booking)
    }

    /// Soft-cancel: terminal status transition recording reason and
    /// timestamp. Bookings are never deleted.
    pub async fn cancel(&self, id: Uuid, reason: String) -> Result<Booking, SchedulingError> {
        let mut bookings = self.bookings.write().await;

        let booking = bookings
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(SchedulingError::NotFound)?;

        booking.status = BookingStatus::Cancelled;
        booking.cancellation_reason = Some(reason);
        booking.cancelled_at = Some(Utc::now());

        debug!("Appointment cancelled: {}", id);

        Ok(booking.clone())
    }
}
