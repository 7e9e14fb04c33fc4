use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::geo;

/// Identifier wrapper for nurses in the candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NurseId(pub String);

/// Identifier wrapper for open missions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionId(pub String);

/// Decimal-degree position of a nurse or an establishment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_km_to(&self, other: &Coordinates) -> f64 {
        geo::distance_km(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// How the nurse travels to an assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mobility {
    #[default]
    None,
    PublicTransport,
    Vehicle,
}

/// Clinical domains a nurse has worked in beyond their listed specializations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializedExperience {
    #[serde(default)]
    pub infectious_disease: bool,
    #[serde(default)]
    pub pediatric: bool,
    #[serde(default)]
    pub geriatric: bool,
}

/// Snapshot of the nurse attributes read by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: NurseId,
    pub specializations: Vec<String>,
    pub experience_years: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub mobility: Mobility,
    #[serde(default)]
    pub night_shift_experience: bool,
    #[serde(default)]
    pub specialized_experience: SpecializedExperience,
    pub location: Coordinates,
    #[serde(default)]
    pub missions_with_establishment: u32,
}

impl CandidateProfile {
    /// Case-insensitive membership test against the nurse's specializations.
    pub fn has_specialization(&self, specialization: &str) -> bool {
        let wanted = normalize_label(specialization);
        self.specializations
            .iter()
            .any(|held| normalize_label(held) == wanted)
    }
}

/// Shift worked during the mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    #[default]
    Day,
    Evening,
    Night,
}

/// Staffing urgency advertised by the establishment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Critical,
}

/// Requirements of one open mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRequirement {
    pub id: MissionId,
    pub specialization: String,
    pub required_experience_years: f64,
    pub location: Coordinates,
    #[serde(default)]
    pub shift: ShiftType,
    #[serde(default)]
    pub urgency: Urgency,
    pub start_date: NaiveDate,
}

pub(crate) fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}
