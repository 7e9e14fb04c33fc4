use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::criteria::ModularCriterion;
use super::specific::CriterionRule;

/// Allowed number of modular criteria when custom scoring is enabled.
pub const SELECTED_CRITERIA_RANGE: RangeInclusive<usize> = 2..=5;
/// Allowed weight for the establishment's specific criterion.
pub const SPECIFIC_WEIGHT_RANGE: RangeInclusive<u8> = 5..=15;
pub const DEFAULT_SPECIFIC_WEIGHT: u8 = 10;

/// Establishment-level scoring policy, as stored and edited by the establishment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishmentScoringConfig {
    #[serde(default)]
    pub custom_scoring_enabled: bool,
    #[serde(default)]
    pub selected_criteria: Vec<String>,
    #[serde(default)]
    pub specific_criterion: Option<String>,
    /// Kept wide so out-of-range input reaches validation instead of failing to decode.
    #[serde(default = "default_specific_weight")]
    pub specific_criterion_weight: i64,
}

fn default_specific_weight() -> i64 {
    i64::from(DEFAULT_SPECIFIC_WEIGHT)
}

impl Default for EstablishmentScoringConfig {
    fn default() -> Self {
        Self {
            custom_scoring_enabled: false,
            selected_criteria: Vec::new(),
            specific_criterion: None,
            specific_criterion_weight: default_specific_weight(),
        }
    }
}

impl EstablishmentScoringConfig {
    /// Baseline-only policy.
    pub fn baseline_only() -> Self {
        Self::default()
    }

    /// Check the policy and, when it holds, return the typed form the engine scores against.
    pub fn validated(&self) -> Result<ValidatedScoringConfig, ConfigurationError> {
        if !self.custom_scoring_enabled {
            return Ok(ValidatedScoringConfig::baseline_only());
        }

        let mut errors = Vec::new();

        let count = self.selected_criteria.len();
        if !SELECTED_CRITERIA_RANGE.contains(&count) {
            errors.push(format!(
                "minimum {} and maximum {} criteria must be selected (got {})",
                SELECTED_CRITERIA_RANGE.start(),
                SELECTED_CRITERIA_RANGE.end(),
                count
            ));
        }

        let mut criteria: Vec<ModularCriterion> = Vec::with_capacity(count);
        for id in &self.selected_criteria {
            match id.parse::<ModularCriterion>() {
                Ok(criterion) if criteria.contains(&criterion) => {
                    errors.push(format!("duplicate criterion: {id}"));
                }
                Ok(criterion) => criteria.push(criterion),
                Err(unknown) => errors.push(unknown.to_string()),
            }
        }

        let weight = u8::try_from(self.specific_criterion_weight)
            .ok()
            .filter(|weight| SPECIFIC_WEIGHT_RANGE.contains(weight));
        if weight.is_none() {
            errors.push(format!(
                "specific criterion weight must be between {} and {} (got {})",
                SPECIFIC_WEIGHT_RANGE.start(),
                SPECIFIC_WEIGHT_RANGE.end(),
                self.specific_criterion_weight
            ));
        }

        let Some(weight) = weight.filter(|_| errors.is_empty()) else {
            return Err(ConfigurationError { errors });
        };

        let specific = self
            .specific_criterion
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| SpecificCriterion::new(text, weight));

        Ok(ValidatedScoringConfig {
            custom_scoring_enabled: true,
            criteria,
            specific,
        })
    }
}

/// Free-text establishment criterion with its configured weight, classified once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificCriterion {
    pub text: String,
    pub weight: u8,
    /// `None` when no keyword rule recognises the text.
    pub rule: Option<CriterionRule>,
}

impl SpecificCriterion {
    fn new(text: &str, weight: u8) -> Self {
        let rule = CriterionRule::classify(text);
        if rule.is_none() {
            warn!(
                criterion = %text,
                "specific criterion matches no rule; scoring it as zero until tagged"
            );
        }

        Self {
            text: text.to_string(),
            weight,
            rule,
        }
    }
}

/// A policy that passed validation. Only constructible through
/// [`EstablishmentScoringConfig::validated`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedScoringConfig {
    custom_scoring_enabled: bool,
    criteria: Vec<ModularCriterion>,
    specific: Option<SpecificCriterion>,
}

impl ValidatedScoringConfig {
    pub fn baseline_only() -> Self {
        Self {
            custom_scoring_enabled: false,
            criteria: Vec::new(),
            specific: None,
        }
    }

    pub fn custom_scoring_enabled(&self) -> bool {
        self.custom_scoring_enabled
    }

    pub fn criteria(&self) -> &[ModularCriterion] {
        &self.criteria
    }

    pub fn specific(&self) -> Option<&SpecificCriterion> {
        self.specific.as_ref()
    }
}

/// Validation report suitable for a configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Run every rule against `config` and collect the violations.
pub fn validate_config(config: &EstablishmentScoringConfig) -> ConfigValidation {
    match config.validated() {
        Ok(_) => ConfigValidation {
            valid: true,
            errors: Vec::new(),
        },
        Err(err) => ConfigValidation {
            valid: false,
            errors: err.errors,
        },
    }
}

/// The establishment policy is unusable; scoring was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scoring configuration: {}", .errors.join("; "))]
pub struct ConfigurationError {
    pub errors: Vec<String>,
}
