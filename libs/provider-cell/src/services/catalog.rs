// libs/provider-cell/src/services/catalog.rs
use chrono::NaiveTime;
use uuid::Uuid;

use crate::models::{
    AppointmentType, AppointmentTypeSpec, PriorityClass, Provider, WeeklySchedule, WorkingWindow,
};

/// Fallback duration when an appointment type has no spec entry.
const DEFAULT_DURATION_MINUTES: i32 = 30;

/// Read-only snapshot of providers and appointment-type specs. Loaded once
/// at startup and treated as immutable for the lifetime of a scheduling
/// computation.
#[derive(Debug, Clone)]
pub struct AvailabilityCatalog {
    providers: Vec<Provider>,
    appointment_types: Vec<AppointmentTypeSpec>,
}

impl AvailabilityCatalog {
    pub fn new(providers: Vec<Provider>, appointment_types: Vec<AppointmentTypeSpec>) -> Self {
        Self {
            providers,
            appointment_types,
        }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn provider(&self, id: Uuid) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn contains_provider(&self, id: Uuid) -> bool {
        self.provider(id).is_some()
    }

    pub fn appointment_types(&self) -> &[AppointmentTypeSpec] {
        &self.appointment_types
    }

    /// Base duration for an appointment type, falling back to the default
    /// consultation length when the type has no spec entry.
    pub fn duration_for(&self, appointment_type: AppointmentType) -> i32 {
        self.appointment_types
            .iter()
            .find(|spec| spec.appointment_type == appointment_type)
            .map(|spec| spec.duration_minutes)
            .unwrap_or(DEFAULT_DURATION_MINUTES)
    }
}

impl Default for AvailabilityCatalog {
    /// Seed roster for the demo clinic: one general/surgery vet on office
    /// hours and one emergency vet on extended hours.
    fn default() -> Self {
        let providers = vec![
            Provider {
                id: Uuid::new_v4(),
                name: "Dr. Sarah Johnson".to_string(),
                specialties: vec!["general".to_string(), "surgery".to_string()],
                availability: WeeklySchedule {
                    monday: Some(window(9, 0, 17, 0)),
                    tuesday: Some(window(9, 0, 17, 0)),
                    wednesday: Some(window(9, 0, 17, 0)),
                    thursday: Some(window(9, 0, 17, 0)),
                    friday: Some(window(9, 0, 17, 0)),
                    saturday: Some(window(10, 0, 14, 0)),
                    sunday: None,
                },
            },
            Provider {
                id: Uuid::new_v4(),
                name: "Dr. Michael Chen".to_string(),
                specialties: vec!["emergency".to_string(), "cardiology".to_string()],
                availability: WeeklySchedule {
                    monday: Some(window(8, 0, 20, 0)),
                    tuesday: Some(window(8, 0, 20, 0)),
                    wednesday: Some(window(8, 0, 20, 0)),
                    thursday: Some(window(8, 0, 20, 0)),
                    friday: Some(window(8, 0, 20, 0)),
                    saturday: Some(window(9, 0, 18, 0)),
                    sunday: Some(window(9, 0, 18, 0)),
                },
            },
        ];

        let appointment_types = vec![
            AppointmentTypeSpec {
                appointment_type: AppointmentType::Consultation,
                duration_minutes: 30,
                priority: PriorityClass::Normal,
            },
            AppointmentTypeSpec {
                appointment_type: AppointmentType::Emergency,
                duration_minutes: 60,
                priority: PriorityClass::High,
            },
            AppointmentTypeSpec {
                appointment_type: AppointmentType::Surgery,
                duration_minutes: 120,
                priority: PriorityClass::Normal,
            },
            AppointmentTypeSpec {
                appointment_type: AppointmentType::FollowUp,
                duration_minutes: 20,
                priority: PriorityClass::Normal,
            },
            AppointmentTypeSpec {
                appointment_type: AppointmentType::Vaccination,
                duration_minutes: 15,
                priority: PriorityClass::Normal,
            },
        ];

        Self::new(providers, appointment_types)
    }
}

fn window(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> WorkingWindow {
    WorkingWindow {
        start: NaiveTime::from_hms_opt(start_hour, start_min, 0).unwrap(),
        end: NaiveTime::from_hms_opt(end_hour, end_min, 0).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_default_catalog_durations() {
        let catalog = AvailabilityCatalog::default();

        assert_eq!(catalog.duration_for(AppointmentType::Consultation), 30);
        assert_eq!(catalog.duration_for(AppointmentType::Emergency), 60);
        assert_eq!(catalog.duration_for(AppointmentType::Surgery), 120);
        assert_eq!(catalog.duration_for(AppointmentType::FollowUp), 20);
        assert_eq!(catalog.duration_for(AppointmentType::Vaccination), 15);
    }

    #[test]
    fn test_duration_fallback_for_empty_catalog() {
        let catalog = AvailabilityCatalog::new(vec![], vec![]);

        assert_eq!(catalog.duration_for(AppointmentType::Surgery), 30);
    }

    #[test]
    fn test_weekday_windows() {
        let catalog = AvailabilityCatalog::default();
        let general_vet = &catalog.providers()[0];

        let monday = general_vet.availability.window_for(Weekday::Mon).unwrap();
        assert_eq!(monday.start, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(monday.end, NaiveTime::from_hms_opt(17, 0, 0).unwrap());

        // Closed on Sundays
        assert!(general_vet.availability.window_for(Weekday::Sun).is_none());
    }

    #[test]
    fn test_provider_lookup() {
        let catalog = AvailabilityCatalog::default();
        let id = catalog.providers()[1].id;

        assert!(catalog.contains_provider(id));
        assert!(catalog.provider(id).unwrap().has_specialty("emergency"));
        assert!(!catalog.contains_provider(Uuid::new_v4()));
    }
}
