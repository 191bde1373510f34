// libs/intake-cell/src/services/extractor.rs
//
// Best-effort pattern-to-field extraction from intake transcripts. The
// scheduling core never depends on this directly; it is a capability behind
// the FieldExtractor trait with partial/fuzzy success semantics.

use anyhow::Result;
use regex::Regex;

use crate::models::ExtractedIntake;

pub trait FieldExtractor: Send + Sync {
    /// Pull whatever fields the transcript yields; always total, never
    /// fails on arbitrary text.
    fn extract(&self, transcript: &str) -> ExtractedIntake;
}

pub struct RegexFieldExtractor {
    first_name: Regex,
    last_name: Regex,
    full_name: Regex,
    phone: Regex,
    email: Regex,
    pet_name: Regex,
    pet_type: Regex,
    pet_breed: Regex,
    pet_age: Regex,
    pet_weight: Regex,
    symptoms: Regex,
    previous_conditions: Regex,
    medications: Regex,
    allergies: Regex,
    urgency: Regex,
    preferred_time: Regex,
}

impl RegexFieldExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            first_name: Regex::new(r"(?i)(?:first name|given name)\s*(?:is|:)?\s*([a-zA-Z]+)")?,
            last_name: Regex::new(
                r"(?i)(?:last name|surname|family name)\s*(?:is|:)?\s*([a-zA-Z]+)",
            )?,
            full_name: Regex::new(r"(?i)(?:name is|i'm|i am)\s+([a-zA-Z ]+)")?,
            phone: Regex::new(
                r"(?i)(?:phone|telephone|mobile)\s*(?:number)?\s*(?:is|:)?\s*(\d{3}[-.\s]?\d{3}[-.\s]?\d{4})",
            )?,
            email: Regex::new(
                r"(?i)(?:email|e-mail)\s*(?:address)?\s*(?:is|:)?\s*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
            )?,
            pet_name: Regex::new(
                r"(?i)(?:pet|animal|dog|cat|bird|fish)\s*(?:name is|is called|is named|called|named)\s*([a-zA-Z]+)",
            )?,
            pet_type: Regex::new(r"(?i)\b(dog|cat|bird|fish|hamster|rabbit|reptile|ferret)\b")?,
            pet_breed: Regex::new(r"(?i)breed\s*(?:is|of)\s*([a-zA-Z ]+)")?,
            pet_age: Regex::new(r"(?i)(\d+)\s*(years?|months?|weeks?)\s*old")?,
            pet_weight: Regex::new(
                r"(?i)weighs?\s*(?:about|around)?\s*(\d+(?:\.\d+)?)\s*(pounds?|lbs?|kilograms?|kg)",
            )?,
            symptoms: Regex::new(
                r"(?i)(?:symptoms|problems|issues|concerns)\s*(?:are|include)\s*([^.]+)",
            )?,
            previous_conditions: Regex::new(
                r"(?i)(?:previous|past|history of)\s*(?:conditions|illnesses|problems)\s*(?:are|include)\s*([^.]+)",
            )?,
            medications: Regex::new(
                r"(?i)(?:medications|meds|drugs)\s*(?:are|include)\s*([^.]+)",
            )?,
            allergies: Regex::new(r"(?i)(?:allergies|allergic)\s*(?:to|are)\s*([^.]+)")?,
            urgency: Regex::new(r"(?i)\b(urgent|emergency|asap|soon|routine|checkup)\b")?,
            preferred_time: Regex::new(r"(?i)\b(morning|afternoon|evening)\b")?,
        })
    }

    fn capture(&self, pattern: &Regex, transcript: &str) -> Option<String> {
        pattern
            .captures(transcript)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

impl FieldExtractor for RegexFieldExtractor {
    fn extract(&self, transcript: &str) -> ExtractedIntake {
        let mut extracted = ExtractedIntake {
            first_name: self.capture(&self.first_name, transcript),
            last_name: self.capture(&self.last_name, transcript),
            full_name: self.capture(&self.full_name, transcript),
            phone: self.capture(&self.phone, transcript),
            email: self.capture(&self.email, transcript),
            pet_name: self.capture(&self.pet_name, transcript),
            pet_type: self.capture(&self.pet_type, transcript),
            pet_breed: self.capture(&self.pet_breed, transcript),
            pet_age: None,
            pet_age_months: None,
            pet_weight: None,
            pet_weight_kg: None,
            symptoms: self.capture(&self.symptoms, transcript),
            previous_conditions: self.capture(&self.previous_conditions, transcript),
            medications: self.capture(&self.medications, transcript),
            allergies: self.capture(&self.allergies, transcript),
            urgency_mention: self.capture(&self.urgency, transcript),
            preferred_time_mention: self.capture(&self.preferred_time, transcript),
        };

        if let Some(captures) = self.pet_age.captures(transcript) {
            extracted.pet_age = Some(captures[0].trim().to_string());
            extracted.pet_age_months = parse_age_months(&captures[1], &captures[2]);
        }

        if let Some(captures) = self.pet_weight.captures(transcript) {
            extracted.pet_weight = Some(captures[0].trim().to_string());
            extracted.pet_weight_kg = parse_weight_kg(&captures[1], &captures[2]);
        }

        normalize(extracted)
    }
}

/// Clean up captured values: E.164 phone for 10-digit numbers, lowercased
/// email.
fn normalize(mut extracted: ExtractedIntake) -> ExtractedIntake {
    if let Some(phone) = extracted.phone.take() {
        let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
        extracted.phone = Some(if digits.len() == 10 {
            format!("+1{}", digits)
        } else {
            digits
        });
    }

    if let Some(email) = extracted.email.take() {
        extracted.email = Some(email.to_lowercase());
    }

    if let Some(pet_type) = extracted.pet_type.take() {
        extracted.pet_type = Some(pet_type.to_lowercase());
    }

    extracted
}

fn parse_age_months(value: &str, unit: &str) -> Option<u32> {
    let value: u32 = value.parse().ok()?;
    let unit = unit.to_lowercase();

    if unit.starts_with("year") {
        Some(value * 12)
    } else if unit.starts_with("month") {
        Some(value)
    } else if unit.starts_with("week") {
        Some((value as f64 / 4.0).round() as u32)
    } else {
        None
    }
}

fn parse_weight_kg(value: &str, unit: &str) -> Option<f64> {
    let value: f64 = value.parse().ok()?;
    let unit = unit.to_lowercase();

    if unit.starts_with("pound") || unit.starts_with("lb") {
        Some(value * 0.453592)
    } else {
        Some(value)
    }
}
