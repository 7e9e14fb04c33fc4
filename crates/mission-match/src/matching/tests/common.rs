use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde_json::Value;

use crate::matching::domain::{
    CandidateProfile, Coordinates, MissionId, MissionRequirement, Mobility, NurseId, ShiftType,
    SpecializedExperience, Urgency,
};
use crate::matching::geo::EARTH_RADIUS_KM;
use crate::matching::EstablishmentScoringConfig;

/// Hôpital Lariboisière, Paris.
pub(super) const ESTABLISHMENT: Coordinates = Coordinates::new(48.8826, 2.3522);

/// A point `km` due north of the establishment.
pub(super) fn north_of_establishment(km: f64) -> Coordinates {
    let degrees = (km / EARTH_RADIUS_KM).to_degrees();
    Coordinates::new(ESTABLISHMENT.latitude + degrees, ESTABLISHMENT.longitude)
}

pub(super) fn mission(specialization: &str, required_experience_years: f64) -> MissionRequirement {
    MissionRequirement {
        id: MissionId("mission-0042".to_string()),
        specialization: specialization.to_string(),
        required_experience_years,
        location: ESTABLISHMENT,
        shift: ShiftType::Day,
        urgency: Urgency::Normal,
        start_date: NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid date"),
    }
}

pub(super) fn candidate(
    id: &str,
    specializations: &[&str],
    experience_years: f64,
    distance_km: f64,
) -> CandidateProfile {
    CandidateProfile {
        id: NurseId(id.to_string()),
        specializations: specializations.iter().map(|s| s.to_string()).collect(),
        experience_years,
        rating: 4.0,
        certifications: Vec::new(),
        languages: vec!["français".to_string()],
        mobility: Mobility::None,
        night_shift_experience: false,
        specialized_experience: SpecializedExperience::default(),
        location: north_of_establishment(distance_km),
        missions_with_establishment: 0,
    }
}

pub(super) fn custom_config(criteria: &[&str]) -> EstablishmentScoringConfig {
    EstablishmentScoringConfig {
        custom_scoring_enabled: true,
        selected_criteria: criteria.iter().map(|id| id.to_string()).collect(),
        specific_criterion: None,
        specific_criterion_weight: 10,
    }
}

pub(super) fn with_specific(
    mut config: EstablishmentScoringConfig,
    text: &str,
    weight: i64,
) -> EstablishmentScoringConfig {
    config.specific_criterion = Some(text.to_string());
    config.specific_criterion_weight = weight;
    config
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// In-memory sink for log lines emitted on the current thread.
#[derive(Clone, Default)]
pub(super) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub(super) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `scenario` with a warn-level subscriber installed and return what it logged.
pub(super) fn capture_warnings<T>(scenario: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .finish();

    let value = tracing::subscriber::with_default(subscriber, scenario);
    (value, logs.contents())
}
