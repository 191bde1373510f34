// libs/intake-cell/src/services/intake.rs
use anyhow::Result;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{
    ExtractedIntake, FinalizedIntake, IntakeError, IntakeRecord, IntakeStatus, IntakeSubmission,
    IntakeSummary, NextQuestion, NextStep, TranscriptAnalysis,
};
use crate::services::extractor::{FieldExtractor, RegexFieldExtractor};

/// Fields tracked for completeness, in question-priority order.
const TRACKED_FIELDS: [(&str, &str); 7] = [
    ("first_name", "What is your first name?"),
    ("last_name", "What is your last name?"),
    ("phone", "What is your phone number?"),
    ("email", "What is your email address?"),
    ("pet_name", "What is your pet's name?"),
    ("pet_type", "What type of animal is your pet?"),
    ("symptoms", "What symptoms or concerns do you have about your pet?"),
];

const MAX_NEXT_QUESTIONS: usize = 3;

pub struct IntakeService {
    records: RwLock<Vec<IntakeRecord>>,
    extractor: Box<dyn FieldExtractor>,
}

impl IntakeService {
    pub fn new() -> Result<Self> {
        Ok(Self::with_extractor(Box::new(RegexFieldExtractor::new()?)))
    }

    pub fn with_extractor(extractor: Box<dyn FieldExtractor>) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            extractor,
        }
    }

    /// Analyze an in-progress transcript: extract fields, suggest the next
    /// questions, and report completeness.
    pub fn analyze_transcript(&self, transcript: &str) -> TranscriptAnalysis {
        let extracted = self.extractor.extract(transcript);
        let completeness = completeness(&extracted);
        let next_questions = next_questions(&extracted);

        debug!(
            "Transcript analysis: {}% complete, {} follow-up questions",
            completeness,
            next_questions.len()
        );

        TranscriptAnalysis {
            extracted,
            next_questions,
            completeness,
            timestamp: Utc::now(),
        }
    }

    /// Create an intake record from a direct submission. Missing required
    /// fields fail validation by name.
    pub async fn create_record(
        &self,
        submission: IntakeSubmission,
    ) -> Result<IntakeRecord, IntakeError> {
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(IntakeError::ValidationError(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let record = IntakeRecord {
            id: Uuid::new_v4(),
            first_name: submission.first_name,
            last_name: submission.last_name,
            phone: submission.phone,
            email: submission.email,
            pet_name: submission.pet_name,
            pet_type: submission.pet_type,
            pet_breed: submission.pet_breed,
            pet_age_months: None,
            pet_weight_kg: None,
            symptoms: submission.symptoms,
            urgency: submission.urgency,
            status: IntakeStatus::PendingReview,
            completeness: 0,
            created_at: Utc::now(),
        };
        let record = IntakeRecord {
            completeness: record_completeness(&record),
            ..record
        };

        self.records.write().await.push(record.clone());
        info!("Patient intake created: {}", record.id);

        Ok(record)
    }

    /// Finalize a completed voice session: extract whatever the transcript
    /// holds, store it as a pending-review record, and summarize.
    pub async fn finalize_transcript(&self, transcript: &str) -> FinalizedIntake {
        let extracted = self.extractor.extract(transcript);
        let completeness = completeness(&extracted);

        let record = IntakeRecord {
            id: Uuid::new_v4(),
            first_name: extracted.first_name.clone(),
            last_name: extracted.last_name.clone(),
            phone: extracted.phone.clone(),
            email: extracted.email.clone(),
            pet_name: extracted.pet_name.clone(),
            pet_type: extracted.pet_type.clone(),
            pet_breed: extracted.pet_breed.clone(),
            pet_age_months: extracted.pet_age_months,
            pet_weight_kg: extracted.pet_weight_kg,
            symptoms: extracted.symptoms.clone(),
            urgency: extracted.urgency_mention.clone(),
            status: IntakeStatus::PendingReview,
            completeness,
            created_at: Utc::now(),
        };

        self.records.write().await.push(record.clone());
        info!("Patient intake finalized from transcript: {}", record.id);

        let patient_name = format!(
            "{} {}",
            record.first_name.as_deref().unwrap_or(""),
            record.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        let summary = IntakeSummary {
            patient_name,
            pet_name: record.pet_name.clone(),
            pet_type: record.pet_type.clone(),
            symptoms: record.symptoms.clone(),
            urgency: record.urgency.clone().unwrap_or_else(|| "routine".to_string()),
            completeness,
        };

        FinalizedIntake {
            patient_id: record.id,
            summary,
            next_steps: next_steps(&record),
            timestamp: Utc::now(),
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<IntakeRecord> {
        let records = self.records.read().await;
        records.iter().find(|record| record.id == id).cloned()
    }

    pub async fn list(&self) -> Vec<IntakeRecord> {
        self.records.read().await.clone()
    }
}

fn present(extracted: &ExtractedIntake, field: &str) -> bool {
    match field {
        "first_name" => extracted.first_name.is_some(),
        "last_name" => extracted.last_name.is_some(),
        "phone" => extracted.phone.is_some(),
        "email" => extracted.email.is_some(),
        "pet_name" => extracted.pet_name.is_some(),
        "pet_type" => extracted.pet_type.is_some(),
        "symptoms" => extracted.symptoms.is_some(),
        _ => false,
    }
}

/// Percentage of tracked fields present, rounded.
fn completeness(extracted: &ExtractedIntake) -> u8 {
    let completed = TRACKED_FIELDS
        .iter()
        .filter(|(field, _)| present(extracted, field))
        .count();
    ((completed as f64 / TRACKED_FIELDS.len() as f64) * 100.0).round() as u8
}

fn record_completeness(record: &IntakeRecord) -> u8 {
    let fields = [
        &record.first_name,
        &record.last_name,
        &record.phone,
        &record.email,
        &record.pet_name,
        &record.pet_type,
        &record.symptoms,
    ];
    let completed = fields.iter().filter(|field| field.is_some()).count();
    ((completed as f64 / fields.len() as f64) * 100.0).round() as u8
}

/// Top follow-up questions for missing fields, by field priority.
fn next_questions(extracted: &ExtractedIntake) -> Vec<NextQuestion> {
    TRACKED_FIELDS
        .iter()
        .enumerate()
        .filter(|(_, (field, _))| !present(extracted, field))
        .map(|(index, (field, question))| NextQuestion {
            field: field.to_string(),
            question: question.to_string(),
            priority: index as u8 + 1,
        })
        .take(MAX_NEXT_QUESTIONS)
        .collect()
}

fn next_steps(record: &IntakeRecord) -> Vec<NextStep> {
    let mut steps = Vec::new();

    if record.completeness < 100 {
        steps.push(NextStep {
            action: "complete_intake".to_string(),
            description: "Complete missing information".to_string(),
            priority: "high".to_string(),
        });
    }

    if record.symptoms.is_some() {
        steps.push(NextStep {
            action: "schedule_appointment".to_string(),
            description: "Schedule appointment based on symptoms".to_string(),
            priority: "high".to_string(),
        });
    }

    steps.push(NextStep {
        action: "send_confirmation".to_string(),
        description: "Send confirmation email/SMS".to_string(),
        priority: "medium".to_string(),
    });

    steps
}
