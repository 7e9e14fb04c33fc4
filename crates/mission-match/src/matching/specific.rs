use serde::{Deserialize, Serialize};
use super::config::{SpecificCriterion, ValidatedScoringConfig};
use super::domain::CandidateProfile;
use super::SubScore;

/// Rating at or above which a rating-based criterion is met.
pub const RATING_THRESHOLD: f64 = 4.5;

const INFECTIOUS_KEYWORDS: &[&str] = &["covid", "infectio"];
const EMERGENCY_KEYWORDS: &[&str] = &["urgence", "urgent", "emergency"];
const RATING_KEYWORDS: &[&str] = &["rating", "note"];

/// How the establishment's free-text criterion resolved for a candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecificCriterionStatus {
    #[default]
    NotConfigured,
    Met,
    NotMet,
    /// No keyword rule recognises the text; it needs manual tagging before it can score.
    Unclassified,
}

/// Keyword rule the criterion text was mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionRule {
    InfectiousDiseaseExperience,
    EmergencySpecialization,
    HighRating,
}

impl CriterionRule {
    pub(crate) fn classify(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        let mentions = |keywords: &[&str]| keywords.iter().any(|keyword| text.contains(keyword));

        if mentions(INFECTIOUS_KEYWORDS) {
            Some(Self::InfectiousDiseaseExperience)
        } else if mentions(EMERGENCY_KEYWORDS) {
            Some(Self::EmergencySpecialization)
        } else if mentions(RATING_KEYWORDS) {
            Some(Self::HighRating)
        } else {
            None
        }
    }

    fn holds_for(self, candidate: &CandidateProfile) -> bool {
        match self {
            Self::InfectiousDiseaseExperience => candidate.specialized_experience.infectious_disease,
            Self::EmergencySpecialization => candidate.has_specialization("urgences"),
            Self::HighRating => candidate.rating >= RATING_THRESHOLD,
        }
    }
}

pub(crate) fn score_specific(
    candidate: &CandidateProfile,
    config: &ValidatedScoringConfig,
) -> (SubScore, SpecificCriterionStatus) {
    let Some(criterion) = config
        .specific()
        .filter(|_| config.custom_scoring_enabled())
    else {
        return (SubScore::default(), SpecificCriterionStatus::NotConfigured);
    };

    evaluate_criterion(candidate, criterion)
}

fn evaluate_criterion(
    candidate: &CandidateProfile,
    criterion: &SpecificCriterion,
) -> (SubScore, SpecificCriterionStatus) {
    let mut sub = SubScore::default();

    let Some(rule) = criterion.rule else {
        return (sub, SpecificCriterionStatus::Unclassified);
    };

    if rule.holds_for(candidate) {
        sub.add(u32::from(criterion.weight), criterion.text.clone());
        (sub, SpecificCriterionStatus::Met)
    } else {
        (sub, SpecificCriterionStatus::NotMet)
    }
}
