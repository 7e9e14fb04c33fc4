//! Candidate/mission compatibility scoring.
//!
//! A score has three tiers: the mandatory baseline ([`base`], 70 points), the establishment's
//! modular criteria ([`modular`], 20 points), and its free-text specific criterion
//! ([`specific`], 5-15 points). [`CompatibilityEngine`] validates the establishment policy,
//! runs the tiers, and applies the qualification threshold.

pub mod base;
pub mod config;
pub mod criteria;
pub mod domain;
mod engine;
pub mod geo;
pub mod modular;
mod ranking;
pub mod router;
pub mod specialization;
pub mod specific;

#[cfg(test)]
mod tests;

pub use config::{
    validate_config, ConfigValidation, ConfigurationError, EstablishmentScoringConfig,
    SpecificCriterion, ValidatedScoringConfig,
};
pub use criteria::{evaluate_by_id, CriterionEvaluation, ModularCriterion, UnknownCriterion};
pub use domain::{
    CandidateProfile, Coordinates, MissionId, MissionRequirement, Mobility, NurseId, ShiftType,
    SpecializedExperience, Urgency,
};
pub use engine::{CompatibilityEngine, ScoreBreakdown, ScoringResult, QUALIFICATION_THRESHOLD};
pub use ranking::{qualified_only, rank_candidates, RankedCandidate};
pub use router::matching_router;
pub use specific::{CriterionRule, SpecificCriterionStatus};

/// Points and explanatory factors produced by one scoring tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SubScore {
    pub score: u32,
    pub factors: Vec<String>,
}

impl SubScore {
    pub(crate) fn add(&mut self, points: u32, factor: String) {
        self.score += points;
        self.factors.push(factor);
    }

    /// Record a factor that carries no points.
    pub(crate) fn note(&mut self, factor: String) {
        self.factors.push(factor);
    }
}
