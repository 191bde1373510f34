// libs/scheduling-cell/src/services/ranking.rs
//
// Multi-factor suitability scoring. Scores accumulate additively from
// independent factors; mismatches contribute zero, never a penalty. The
// final sort is stable so tied slots keep the generator's emission order.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{SchedulingRequest, Slot, UrgencyHint, UrgencyTier};

/// Score every slot against the request and return them best-first.
pub fn rank_slots(
    mut slots: Vec<Slot>,
    request: &SchedulingRequest,
    now: DateTime<Utc>,
) -> Vec<Slot> {
    for slot in &mut slots {
        slot.score = score_slot(slot, request, now);
    }

    // Vec::sort_by is stable: equal scores retain generation order.
    slots.sort_by(|a, b| b.score.total_cmp(&a.score));

    if let Some(best) = slots.first() {
        debug!(
            "Ranked {} slots; best is {} on {} at {} (score {:.1})",
            slots.len(),
            best.provider.name,
            best.date,
            best.start_time,
            best.score
        );
    }

    slots
}

fn score_slot(slot: &Slot, request: &SchedulingRequest, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    // Urgency alignment
    score += match (request.urgency, slot.urgency) {
        (UrgencyHint::Emergency, UrgencyTier::High) => 50.0,
        (UrgencyHint::Asap, UrgencyTier::Medium) => 30.0,
        (UrgencyHint::Routine, UrgencyTier::Low) => 20.0,
        _ => 0.0,
    };

    // Time-of-day preference
    if let Some(preferred_time) = request.preferred_time {
        if preferred_time.matches_hour(slot.start_hour()) {
            score += 20.0;
        }
    }

    // Date preference: exact day wins, same 7-day window otherwise
    if let Some(preferred_date) = request.preferred_date {
        if slot.date == preferred_date {
            score += 30.0;
        } else if slot
            .date
            .signed_duration_since(preferred_date)
            .num_days()
            .abs()
            < 7
        {
            score += 15.0;
        }
    }

    // Provider specialty match, first matching branch only
    let symptoms = request.symptoms.to_lowercase();
    if !symptoms.is_empty() {
        if symptoms.contains("emergency") && slot.provider.has_specialty("emergency") {
            score += 25.0;
        } else if symptoms.contains("surgery") && slot.provider.has_specialty("surgery") {
            score += 25.0;
        } else if slot.provider.has_specialty("general") {
            score += 15.0;
        }
    }

    // Emergency proximity: earlier slots score higher, clamped at zero
    if request.urgency == UrgencyHint::Emergency {
        let hours_from_now =
            (slot.start_datetime() - now).num_minutes() as f64 / 60.0;
        score += (24.0 - hours_from_now).max(0.0);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate, NaiveTime};
    use provider_cell::models::{AppointmentType, ProviderSummary};
    use shared_models::patient::PatientDetails;
    use uuid::Uuid;

    use crate::models::TimeOfDay;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn request(
        symptoms: &str,
        urgency: UrgencyHint,
        preferred_date: Option<NaiveDate>,
        preferred_time: Option<TimeOfDay>,
    ) -> SchedulingRequest {
        SchedulingRequest {
            patient: PatientDetails {
                first_name: "Ana".to_string(),
                last_name: "Reyes".to_string(),
                phone: "+15551234567".to_string(),
                email: None,
                pet_name: Some("Mochi".to_string()),
                pet_type: Some("cat".to_string()),
            },
            symptoms: symptoms.to_string(),
            urgency,
            preferred_date,
            preferred_time,
        }
    }

    fn slot(
        specialties: &[&str],
        slot_date: NaiveDate,
        start: NaiveTime,
        urgency: UrgencyTier,
    ) -> Slot {
        Slot {
            id: Uuid::new_v4(),
            provider: ProviderSummary {
                id: Uuid::new_v4(),
                name: "Dr. Day".to_string(),
                specialties: specialties.iter().map(|s| s.to_string()).collect(),
            },
            date: slot_date,
            start_time: start,
            end_time: start + Duration::minutes(30),
            duration_minutes: 30,
            appointment_type: AppointmentType::Consultation,
            urgency,
            is_available: true,
            score: 0.0,
        }
    }

    #[test]
    fn test_emergency_morning_surgery_outranks_general_afternoon() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request(
            "needs surgery",
            UrgencyHint::Emergency,
            Some(today),
            Some(TimeOfDay::Morning),
        );

        let surgery_morning = slot(&["surgery"], today, time(9, 0), UrgencyTier::High);
        let general_tomorrow = slot(
            &["general"],
            today + Duration::days(1),
            time(14, 0),
            UrgencyTier::High,
        );

        let ranked = rank_slots(vec![general_tomorrow, surgery_morning], &request, now);

        // 50 urgency + 20 morning + 30 exact date + 25 specialty = 125 base,
        // plus a 23-hour proximity bonus.
        assert_eq!(ranked[0].start_time, time(9, 0));
        assert!(ranked[0].score >= 125.0);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_urgency_alignment_scores() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();

        let aligned = rank_slots(
            vec![slot(&[], today, time(9, 0), UrgencyTier::Low)],
            &request("itchy skin", UrgencyHint::Routine, None, None),
            now,
        );
        assert_eq!(aligned[0].score, 20.0);

        let mismatched = rank_slots(
            vec![slot(&[], today, time(9, 0), UrgencyTier::High)],
            &request("itchy skin", UrgencyHint::Routine, None, None),
            now,
        );
        assert_eq!(mismatched[0].score, 0.0);
    }

    #[test]
    fn test_date_bonus_exact_day_wins_over_week_window() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request("itchy skin", UrgencyHint::Asap, Some(today), None);

        let exact = slot(&[], today, time(9, 0), UrgencyTier::Low);
        let nearby = slot(&[], today + Duration::days(3), time(9, 0), UrgencyTier::Low);
        let far = slot(&[], today + Duration::days(10), time(9, 0), UrgencyTier::Low);

        let ranked = rank_slots(vec![far, nearby, exact], &request, now);

        assert_eq!(ranked[0].date, today);
        assert_eq!(ranked[0].score, 30.0);
        assert_eq!(ranked[1].score, 15.0);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_proximity_bonus_clamps_to_zero() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request("hurt paw", UrgencyHint::Emergency, None, None);

        // More than 24 hours out: the proximity term contributes nothing.
        let distant = slot(
            &[],
            today + Duration::days(3),
            time(9, 0),
            UrgencyTier::High,
        );

        let ranked = rank_slots(vec![distant], &request, now);
        assert_eq!(ranked[0].score, 50.0);
    }

    #[test]
    fn test_proximity_bonus_is_fractional() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request("hurt paw", UrgencyHint::Emergency, None, None);

        let soon = slot(&[], today, time(9, 30), UrgencyTier::High);

        let ranked = rank_slots(vec![soon], &request, now);
        // 50 urgency + (24 - 1.5) proximity
        assert_eq!(ranked[0].score, 72.5);
    }

    #[test]
    fn test_specialty_first_branch_only() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request("emergency surgery", UrgencyHint::Routine, None, None);

        // Provider has both tags; only the emergency branch fires. The
        // medium tier keeps the urgency-alignment factor out of the total.
        let both = slot(
            &["emergency", "surgery", "general"],
            today,
            time(9, 0),
            UrgencyTier::Medium,
        );

        let ranked = rank_slots(vec![both], &request, now);
        assert_eq!(ranked[0].score, 25.0);
    }

    #[test]
    fn test_ties_keep_generation_order() {
        let today = date();
        let now = today.and_time(time(8, 0)).and_utc();
        let request = request("itchy skin", UrgencyHint::Routine, None, None);

        let first = slot(&[], today, time(9, 0), UrgencyTier::Low);
        let second = slot(&[], today, time(9, 30), UrgencyTier::Low);
        let first_id = first.id;
        let second_id = second.id;

        let ranked = rank_slots(vec![first, second], &request, now);

        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].id, first_id);
        assert_eq!(ranked[1].id, second_id);
    }
}
