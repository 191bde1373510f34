// libs/scheduling-cell/src/services/recommendations.rs
use crate::models::{
    Recommendation, RecommendationKind, RecommendationPriority, SchedulingRequest, Slot,
    UrgencyHint,
};

/// Derive human-readable guidance from the classified request and the ranked
/// options. Emission order is fixed: urgent, best match, vaccination; each
/// entry appears at most once.
pub fn build_recommendations(
    request: &SchedulingRequest,
    ranked_slots: &[Slot],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if request.urgency == UrgencyHint::Emergency {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Urgent,
            message: "Based on the symptoms described, we recommend scheduling an emergency \
                      appointment as soon as possible."
                .to_string(),
            priority: RecommendationPriority::High,
        });
    }

    if let Some(best) = ranked_slots.first() {
        recommendations.push(Recommendation {
            kind: RecommendationKind::BestMatch,
            message: format!(
                "We recommend {} on {} at {}",
                best.provider.name,
                best.date,
                best.start_time.format("%H:%M")
            ),
            priority: RecommendationPriority::Medium,
        });
    }

    if request.symptoms.to_lowercase().contains("vaccination") {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Vaccination,
            message: "Vaccination appointments are typically quick and can be scheduled during \
                      regular hours."
                .to_string(),
            priority: RecommendationPriority::Low,
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};
    use provider_cell::models::{AppointmentType, ProviderSummary};
    use shared_models::patient::PatientDetails;
    use uuid::Uuid;

    use crate::models::UrgencyTier;

    fn request(symptoms: &str, urgency: UrgencyHint) -> SchedulingRequest {
        SchedulingRequest {
            patient: PatientDetails {
                first_name: "Ana".to_string(),
                last_name: "Reyes".to_string(),
                phone: "+15551234567".to_string(),
                email: None,
                pet_name: None,
                pet_type: None,
            },
            symptoms: symptoms.to_string(),
            urgency,
            preferred_date: None,
            preferred_time: None,
        }
    }

    fn slot() -> Slot {
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        Slot {
            id: Uuid::new_v4(),
            provider: ProviderSummary {
                id: Uuid::new_v4(),
                name: "Dr. Sarah Johnson".to_string(),
                specialties: vec!["general".to_string()],
            },
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            start_time: start,
            end_time: start + Duration::minutes(30),
            duration_minutes: 30,
            appointment_type: AppointmentType::Consultation,
            urgency: UrgencyTier::Low,
            is_available: true,
            score: 20.0,
        }
    }

    #[test]
    fn test_emission_order_with_all_conditions() {
        let request = request("vaccination for puppy", UrgencyHint::Emergency);
        let slots = vec![slot()];

        let recommendations = build_recommendations(&request, &slots);

        assert_eq!(recommendations.len(), 3);
        assert_eq!(recommendations[0].kind, RecommendationKind::Urgent);
        assert_eq!(recommendations[0].priority, RecommendationPriority::High);
        assert_eq!(recommendations[1].kind, RecommendationKind::BestMatch);
        assert_eq!(recommendations[1].priority, RecommendationPriority::Medium);
        assert_eq!(recommendations[2].kind, RecommendationKind::Vaccination);
        assert_eq!(recommendations[2].priority, RecommendationPriority::Low);
    }

    #[test]
    fn test_best_match_names_top_slot() {
        let request = request("itchy skin", UrgencyHint::Routine);
        let slots = vec![slot()];

        let recommendations = build_recommendations(&request, &slots);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(
            recommendations[0].message,
            "We recommend Dr. Sarah Johnson on 2025-06-02 at 09:00"
        );
    }

    #[test]
    fn test_empty_options_still_produce_advisories() {
        let request = request("emergency vaccination", UrgencyHint::Emergency);

        let recommendations = build_recommendations(&request, &[]);

        // No best-match entry, but the urgent and vaccination advisories
        // still apply.
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].kind, RecommendationKind::Urgent);
        assert_eq!(recommendations[1].kind, RecommendationKind::Vaccination);
    }

    #[test]
    fn test_routine_request_without_matches_is_silent() {
        let request = request("itchy skin", UrgencyHint::Routine);

        assert!(build_recommendations(&request, &[]).is_empty());
    }
}
