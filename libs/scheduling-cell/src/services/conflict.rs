// libs/scheduling-cell/src/services/conflict.rs
//
// Pure availability filter over immutable inputs. A slot is unavailable if
// any active booking for the same provider overlaps its interval; cancelled
// bookings never constrain availability.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Booking, Slot};

/// Half-open interval check against every active booking for the provider.
pub fn is_slot_available(
    bookings: &[Booking],
    provider_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    !bookings.iter().any(|booking| {
        booking.provider_id == provider_id && booking.is_active() && booking.overlaps(start, end)
    })
}

/// Drop every slot that collides with an active booking, preserving the
/// generator's emission order.
pub fn filter_available(slots: Vec<Slot>, bookings: &[Booking]) -> Vec<Slot> {
    slots
        .into_iter()
        .filter(|slot| {
            is_slot_available(
                bookings,
                slot.provider.id,
                slot.start_datetime(),
                slot.end_datetime(),
            )
        })
        .collect()
}
