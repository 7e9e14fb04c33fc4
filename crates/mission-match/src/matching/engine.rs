use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::base::score_base;
use super::config::{
    validate_config, ConfigValidation, ConfigurationError, EstablishmentScoringConfig,
    ValidatedScoringConfig,
};
use super::domain::{CandidateProfile, MissionRequirement};
use super::modular::score_modular;
use super::specific::{score_specific, SpecificCriterionStatus};

/// Minimum total score for a candidate to be shown for a mission.
pub const QUALIFICATION_THRESHOLD: u32 = 60;
/// Upper bound of the reported total; the three tiers can reach 105 on paper.
pub const MAX_TOTAL_SCORE: u32 = 100;

/// Stateless scorer. Construct one wherever it is needed; all methods are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityEngine;

impl CompatibilityEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_config(&self, config: &EstablishmentScoringConfig) -> ConfigValidation {
        validate_config(config)
    }

    /// Score one candidate against one mission, refusing an invalid establishment policy.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        mission: &MissionRequirement,
        config: &EstablishmentScoringConfig,
    ) -> Result<ScoringResult, ConfigurationError> {
        let validated = config.validated().map_err(|err| {
            warn!(
                mission_id = %mission.id.0,
                errors = ?err.errors,
                "refusing to score against invalid establishment configuration"
            );
            err
        })?;

        Ok(self.score_validated(candidate, mission, &validated))
    }

    /// Score against a policy validated once up front, e.g. when ranking a whole pool.
    pub fn score_validated(
        &self,
        candidate: &CandidateProfile,
        mission: &MissionRequirement,
        config: &ValidatedScoringConfig,
    ) -> ScoringResult {
        let base = score_base(candidate, mission);
        let modular = score_modular(candidate, mission, config);
        let (specific, specific_status) = score_specific(candidate, config);

        let breakdown = ScoreBreakdown {
            base: base.score,
            modular: modular.score,
            specific: specific.score,
        };
        let total_score = breakdown.sum().min(MAX_TOTAL_SCORE);

        let mut factors = base.factors;
        factors.extend(modular.factors);
        factors.extend(specific.factors);

        debug!(
            nurse_id = %candidate.id.0,
            mission_id = %mission.id.0,
            base = breakdown.base,
            modular = breakdown.modular,
            specific = breakdown.specific,
            total_score,
            "candidate scored"
        );

        ScoringResult {
            total_score,
            breakdown,
            factors,
            is_qualified: total_score >= QUALIFICATION_THRESHOLD,
            specific_criterion: specific_status,
        }
    }
}

/// Per-tier sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: u32,
    pub modular: u32,
    pub specific: u32,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> u32 {
        self.base + self.modular + self.specific
    }
}

/// Compatibility of one candidate with one mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
    /// Contributing sub-criteria in base, modular, specific order.
    pub factors: Vec<String>,
    pub is_qualified: bool,
    pub specific_criterion: SpecificCriterionStatus,
}
