// libs/scheduling-cell/src/services/classifier.rs
//
// Keyword classification of free-text symptom descriptions. Deterministic
// and total: every input maps to exactly one appointment type and one
// urgency tier.

use provider_cell::models::AppointmentType;

use crate::models::{UrgencyHint, UrgencyTier};

/// Derive appointment type and urgency tier from the symptom text and the
/// explicit urgency hint.
pub fn classify(symptoms: &str, hint: UrgencyHint) -> (AppointmentType, UrgencyTier) {
    let appointment_type = classify_appointment_type(symptoms);
    let urgency = classify_urgency(symptoms, hint, appointment_type);
    (appointment_type, urgency)
}

/// First-match-wins over an ordered rule list; emergency detection must
/// dominate all others.
pub fn classify_appointment_type(symptoms: &str) -> AppointmentType {
    let text = symptoms.to_lowercase();

    if contains_any(&text, &["emergency", "urgent", "bleeding", "unconscious"]) {
        return AppointmentType::Emergency;
    }

    if contains_any(&text, &["surgery", "operation"]) {
        return AppointmentType::Surgery;
    }

    if contains_any(&text, &["vaccination", "vaccine"]) {
        return AppointmentType::Vaccination;
    }

    if contains_any(&text, &["follow", "check"]) {
        return AppointmentType::FollowUp;
    }

    AppointmentType::Consultation
}

/// Urgency tier from the hint and the text. An emergency classification
/// dominates a routine hint, so `bleeding` phrasing lands in the high tier
/// even without an explicit emergency keyword.
pub fn classify_urgency(
    symptoms: &str,
    hint: UrgencyHint,
    appointment_type: AppointmentType,
) -> UrgencyTier {
    let text = symptoms.to_lowercase();

    if hint == UrgencyHint::Emergency
        || appointment_type == AppointmentType::Emergency
        || contains_any(&text, &["emergency", "urgent", "critical"])
    {
        return UrgencyTier::High;
    }

    if hint == UrgencyHint::Asap || contains_any(&text, &["soon", "quickly"]) {
        return UrgencyTier::Medium;
    }

    UrgencyTier::Low
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
