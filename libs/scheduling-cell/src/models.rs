// libs/scheduling-cell/src/models.rs
use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use provider_cell::models::{AppointmentType, ProviderSummary};
use shared_models::patient::PatientDetails;

// ==============================================================================
// URGENCY AND PREFERENCE MODELS
// ==============================================================================

/// Raw urgency hint supplied by the requester.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyHint {
    #[default]
    Routine,
    Asap,
    Emergency,
}

/// Coarse severity classification derived by the classifier, distinct from
/// the raw hint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyTier::Low => write!(f, "low"),
            UrgencyTier::Medium => write!(f, "medium"),
            UrgencyTier::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    /// Bucket membership for a slot's starting hour.
    pub fn matches_hour(&self, hour: u32) -> bool {
        match self {
            TimeOfDay::Morning => hour < 12,
            TimeOfDay::Afternoon => (12..17).contains(&hour),
            TimeOfDay::Evening => hour >= 17,
        }
    }
}

// ==============================================================================
// SCHEDULING REQUEST MODELS
// ==============================================================================

/// Validated scheduling request flowing through the engine.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    pub patient: PatientDetails,
    pub symptoms: String,
    pub urgency: UrgencyHint,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<TimeOfDay>,
}

/// Wire payload for the schedule-options endpoint. Identity and symptom
/// fields are validated by name so the caller learns exactly which are
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleOptionsPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub symptoms: Option<String>,
    pub urgency: Option<UrgencyHint>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<TimeOfDay>,
}

impl ScheduleOptionsPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.first_name) {
            missing.push("first_name");
        }
        if is_blank(&self.last_name) {
            missing.push("last_name");
        }
        if is_blank(&self.phone) {
            missing.push("phone");
        }
        if is_blank(&self.symptoms) {
            missing.push("symptoms");
        }
        missing
    }

    /// Convert into an engine request, or report the missing field names.
    pub fn into_request(self) -> Result<SchedulingRequest, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(SchedulingRequest {
            patient: PatientDetails {
                first_name: self.first_name.unwrap_or_default(),
                last_name: self.last_name.unwrap_or_default(),
                phone: self.phone.unwrap_or_default(),
                email: self.email,
                pet_name: self.pet_name,
                pet_type: self.pet_type,
            },
            symptoms: self.symptoms.unwrap_or_default(),
            urgency: self.urgency.unwrap_or_default(),
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
        })
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |value| value.trim().is_empty())
}

// ==============================================================================
// SLOT MODELS
// ==============================================================================

/// A candidate bookable time window for one provider. Generated fresh per
/// request and discarded after the response, except the one the client
/// confirms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: Uuid,
    pub provider: ProviderSummary,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i32,
    pub appointment_type: AppointmentType,
    pub urgency: UrgencyTier,
    pub is_available: bool,
    pub score: f64,
}

impl Slot {
    pub fn start_datetime(&self) -> DateTime<Utc> {
        self.date.and_time(self.start_time).and_utc()
    }

    pub fn end_datetime(&self) -> DateTime<Utc> {
        self.date.and_time(self.end_time).and_utc()
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ==============================================================================
// BOOKING MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Scheduled,
    Cancelled,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Scheduled => write!(f, "scheduled"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A confirmed appointment occupying a provider's calendar. Never deleted;
/// cancellation is a status transition that records reason and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub provider_id: Uuid,
    pub patient: PatientDetails,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub duration_minutes: i32,
    pub appointment_type: AppointmentType,
    pub urgency: UrgencyTier,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub cancellation_reason: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn start_datetime(&self) -> DateTime<Utc> {
        self.date.and_time(self.start_time).and_utc()
    }

    pub fn end_datetime(&self) -> DateTime<Utc> {
        self.date.and_time(self.end_time).and_utc()
    }

    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }

    /// Half-open interval overlap: back-to-back appointments sharing a
    /// boundary do not conflict.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end_datetime() && end > self.start_datetime()
    }
}

/// A chosen slot plus patient snapshot, ready for commit-time validation.
#[derive(Debug, Clone)]
pub struct BookingCandidate {
    pub slot_id: Uuid,
    pub provider_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub appointment_type: AppointmentType,
    pub urgency: UrgencyTier,
    pub patient: PatientDetails,
}

/// Wire payload for the booking-confirmation endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfirmBookingPayload {
    pub id: Option<Uuid>,
    pub provider_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub appointment_type: Option<AppointmentType>,
    pub urgency: Option<UrgencyTier>,
    pub patient: Option<PatientDetails>,
}

impl ConfirmBookingPayload {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("id");
        }
        if self.provider_id.is_none() {
            missing.push("provider_id");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        if self.patient.is_none() {
            missing.push("patient");
        }
        missing
    }

    pub fn into_candidate(self) -> Result<BookingCandidate, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(BookingCandidate {
            slot_id: self.id.unwrap_or_default(),
            provider_id: self.provider_id.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            start_time: self.time.unwrap_or_default(),
            appointment_type: self.appointment_type.unwrap_or(AppointmentType::Consultation),
            urgency: self.urgency.unwrap_or(UrgencyTier::Low),
            patient: self.patient.unwrap_or_else(|| PatientDetails {
                first_name: String::new(),
                last_name: String::new(),
                phone: String::new(),
                email: None,
                pet_name: None,
                pet_type: None,
            }),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CancelBookingRequest {
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentsQuery {
    pub provider_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Urgent,
    BestMatch,
    Vaccination,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub message: String,
    pub priority: RecommendationPriority,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleOptionsResponse {
    pub appointment_type: AppointmentType,
    pub urgency: UrgencyTier,
    pub options: Vec<Slot>,
    pub recommendations: Vec<Recommendation>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchedulingError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Provider not found")]
    ProviderNotFound,

    #[error("Appointment conflicts with existing booking")]
    ConflictDetected,

    #[error("Validation error: {0}")]
    ValidationError(String),
}
