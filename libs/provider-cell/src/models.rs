// libs/provider-cell/src/models.rs
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==============================================================================
// PROVIDER REFERENCE DATA
// ==============================================================================

/// A single working window within one calendar day. Windows never span
/// midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WorkingWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Per-weekday working hours. An absent window means the provider does not
/// work that day.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeeklySchedule {
    pub monday: Option<WorkingWindow>,
    pub tuesday: Option<WorkingWindow>,
    pub wednesday: Option<WorkingWindow>,
    pub thursday: Option<WorkingWindow>,
    pub friday: Option<WorkingWindow>,
    pub saturday: Option<WorkingWindow>,
    pub sunday: Option<WorkingWindow>,
}

impl WeeklySchedule {
    pub fn window_for(&self, weekday: Weekday) -> Option<&WorkingWindow> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: Uuid,
    pub name: String,
    pub specialties: Vec<String>,
    pub availability: WeeklySchedule,
}

impl Provider {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

/// Lightweight provider view embedded in generated slots and responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderSummary {
    pub id: Uuid,
    pub name: String,
    pub specialties: Vec<String>,
}

impl From<&Provider> for ProviderSummary {
    fn from(provider: &Provider) -> Self {
        Self {
            id: provider.id,
            name: provider.name.clone(),
            specialties: provider.specialties.clone(),
        }
    }
}

impl ProviderSummary {
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }
}

// ==============================================================================
// APPOINTMENT TYPE REFERENCE DATA
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Consultation,
    Emergency,
    Surgery,
    FollowUp,
    Vaccination,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Consultation => write!(f, "consultation"),
            AppointmentType::Emergency => write!(f, "emergency"),
            AppointmentType::Surgery => write!(f, "surgery"),
            AppointmentType::FollowUp => write!(f, "follow-up"),
            AppointmentType::Vaccination => write!(f, "vaccination"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    Normal,
    High,
}

/// Base duration and priority class for one appointment type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentTypeSpec {
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub duration_minutes: i32,
    pub priority: PriorityClass,
}
