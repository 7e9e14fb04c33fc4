use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use mission_match::error::AppError;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn read_json_file<T>(path: &Path) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    let raw = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&raw)?;
    Ok(value)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mission_match::matching::EstablishmentScoringConfig;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2026-11-02 "),
            Ok(NaiveDate::from_ymd_opt(2026, 11, 2).expect("valid"))
        );
        assert!(parse_date("02/11/2026").is_err());
    }

    #[test]
    fn read_json_file_reports_missing_file_as_io() {
        let result = read_json_file::<EstablishmentScoringConfig>(Path::new(
            "/nonexistent/mission-match/config.json",
        ));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn read_json_file_reports_malformed_json_as_input() {
        let path = std::env::temp_dir().join(format!(
            "mission-match-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ \"custom_scoring_enabled\": ").expect("temp file written");

        let result = read_json_file::<EstablishmentScoringConfig>(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Input(_))));
    }
}
