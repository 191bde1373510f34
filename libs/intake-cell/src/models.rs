// libs/intake-cell/src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==============================================================================
// INTAKE RECORD MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    PendingReview,
    Reviewed,
}

/// A patient-intake record. Voice-driven intakes may be partial, so every
/// patient field is optional on the record itself; the create endpoint
/// enforces its required set before constructing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub pet_breed: Option<String>,
    pub pet_age_months: Option<u32>,
    pub pet_weight_kg: Option<f64>,
    pub symptoms: Option<String>,
    pub urgency: Option<String>,
    pub status: IntakeStatus,
    pub completeness: u8,
    pub created_at: DateTime<Utc>,
}

/// Wire payload for direct (form-based) intake submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeSubmission {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub pet_breed: Option<String>,
    pub symptoms: Option<String>,
    pub urgency: Option<String>,
}

impl IntakeSubmission {
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
        if is_blank(&self.email) {
            missing.push("email");
        }
        if is_blank(&self.symptoms) {
            missing.push("symptoms");
        }
        missing
    }
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |value| value.trim().is_empty())
}

// ==============================================================================
// TRANSCRIPT EXTRACTION MODELS
// ==============================================================================

/// Best-effort partial record pulled from a transcript. Extraction is fuzzy:
/// any subset of fields may be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExtractedIntake {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub pet_breed: Option<String>,
    pub pet_age: Option<String>,
    pub pet_age_months: Option<u32>,
    pub pet_weight: Option<String>,
    pub pet_weight_kg: Option<f64>,
    pub symptoms: Option<String>,
    pub previous_conditions: Option<String>,
    pub medications: Option<String>,
    pub allergies: Option<String>,
    pub urgency_mention: Option<String>,
    pub preferred_time_mention: Option<String>,
}

/// Suggested follow-up question for a field the transcript has not covered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextQuestion {
    pub field: String,
    pub question: String,
    pub priority: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptAnalysis {
    pub extracted: ExtractedIntake,
    pub next_questions: Vec<NextQuestion>,
    pub completeness: u8,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptRequest {
    pub transcript: String,
}

// ==============================================================================
// FINALIZATION MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct IntakeSummary {
    pub patient_name: String,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
    pub symptoms: Option<String>,
    pub urgency: String,
    pub completeness: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStep {
    pub action: String,
    pub description: String,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalizedIntake {
    pub patient_id: Uuid,
    pub summary: IntakeSummary,
    pub next_steps: Vec<NextStep>,
    pub timestamp: DateTime<Utc>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum IntakeError {
    #[error("Intake record not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),
}
