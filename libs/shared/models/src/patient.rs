use serde::{Deserialize, Serialize};

/// Patient contact and pet details captured at intake time and snapshotted
/// onto confirmed bookings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetails {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub pet_name: Option<String>,
    pub pet_type: Option<String>,
}

impl PatientDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
