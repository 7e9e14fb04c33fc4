//! Modular bonus criteria an establishment may opt into.
//!
//! Evaluation dispatches through an exhaustive `match` on [`ModularCriterion`]; string
//! identifiers only exist at the configuration boundary where [`ModularCriterion::from_str`]
//! rejects unknown values.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::{normalize_label, CandidateProfile, Mobility, MissionRequirement, ShiftType};

/// Certifications recognised as advanced for the `advanced_certifications` criterion.
pub const ADVANCED_CERTIFICATIONS: &[&str] = &[
    "afgsu_2", "acls", "pals", "phtls", "iade", "ibode", "puericulture",
];

/// Completed missions with the establishment required before history counts.
pub const MISSION_HISTORY_THRESHOLD: u32 = 5;

/// Closed set of modular criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModularCriterion {
    AdvancedCertifications,
    NightExperience,
    Languages,
    EnhancedMobility,
    SpecializedExperience,
    MissionHistory,
}

impl ModularCriterion {
    pub const ALL: [ModularCriterion; 6] = [
        ModularCriterion::AdvancedCertifications,
        ModularCriterion::NightExperience,
        ModularCriterion::Languages,
        ModularCriterion::EnhancedMobility,
        ModularCriterion::SpecializedExperience,
        ModularCriterion::MissionHistory,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ModularCriterion::AdvancedCertifications => "advanced_certifications",
            ModularCriterion::NightExperience => "night_experience",
            ModularCriterion::Languages => "languages",
            ModularCriterion::EnhancedMobility => "enhanced_mobility",
            ModularCriterion::SpecializedExperience => "specialized_experience",
            ModularCriterion::MissionHistory => "mission_history",
        }
    }

    pub fn evaluate(
        self,
        candidate: &CandidateProfile,
        mission: &MissionRequirement,
    ) -> CriterionEvaluation {
        match self {
            ModularCriterion::AdvancedCertifications => {
                let held: Vec<&str> = candidate
                    .certifications
                    .iter()
                    .map(String::as_str)
                    .filter(|cert| {
                        ADVANCED_CERTIFICATIONS.contains(&normalize_label(cert).as_str())
                    })
                    .collect();
                CriterionEvaluation::when(
                    !held.is_empty(),
                    || format!("Certifications avancées : {}", held.join(", ")),
                )
            }
            ModularCriterion::NightExperience => CriterionEvaluation::when(
                candidate.night_shift_experience && mission.shift == ShiftType::Night,
                || "Expérience des gardes de nuit".to_string(),
            ),
            ModularCriterion::Languages => {
                let distinct: BTreeSet<String> = candidate
                    .languages
                    .iter()
                    .map(|language| normalize_label(language))
                    .filter(|language| !language.is_empty())
                    .collect();
                CriterionEvaluation::when(distinct.len() > 1, || {
                    format!("Multilingue : {}", candidate.languages.join(", "))
                })
            }
            ModularCriterion::EnhancedMobility => CriterionEvaluation::when(
                candidate.mobility == Mobility::Vehicle,
                || "Mobilité renforcée (véhicule)".to_string(),
            ),
            ModularCriterion::SpecializedExperience => {
                let domain = ExperienceDomain::for_specialization(&mission.specialization)
                    .filter(|domain| domain.held_by(candidate));
                match domain {
                    Some(domain) => CriterionEvaluation::qualified(format!(
                        "Expérience spécialisée : {}",
                        domain.label()
                    )),
                    None => CriterionEvaluation::not_qualified(),
                }
            }
            ModularCriterion::MissionHistory => CriterionEvaluation::when(
                candidate.missions_with_establishment > MISSION_HISTORY_THRESHOLD,
                || {
                    format!(
                        "Historique : {} missions avec l'établissement",
                        candidate.missions_with_establishment
                    )
                },
            ),
        }
    }
}

impl fmt::Display for ModularCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configuration names a criterion outside the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid criterion: {0}")]
pub struct UnknownCriterion(pub String);

impl FromStr for ModularCriterion {
    type Err = UnknownCriterion;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let key = raw.trim();
        ModularCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == key)
            .ok_or_else(|| UnknownCriterion(raw.to_string()))
    }
}

/// Outcome of one criterion for one candidate/mission pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionEvaluation {
    pub qualified: bool,
    pub factor: String,
}

impl CriterionEvaluation {
    fn qualified(factor: String) -> Self {
        Self {
            qualified: true,
            factor,
        }
    }

    pub fn not_qualified() -> Self {
        Self {
            qualified: false,
            factor: String::new(),
        }
    }

    fn when(qualified: bool, factor: impl FnOnce() -> String) -> Self {
        if qualified {
            Self::qualified(factor())
        } else {
            Self::not_qualified()
        }
    }
}

/// String-keyed evaluation for callers holding raw identifiers.
///
/// Unknown identifiers contribute zero instead of failing: configurations are expected to have
/// been rejected by the validator before reaching this point.
pub fn evaluate_by_id(
    id: &str,
    candidate: &CandidateProfile,
    mission: &MissionRequirement,
) -> CriterionEvaluation {
    match id.parse::<ModularCriterion>() {
        Ok(criterion) => criterion.evaluate(candidate, mission),
        Err(_) => CriterionEvaluation::not_qualified(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExperienceDomain {
    InfectiousDisease,
    Pediatric,
    Geriatric,
}

impl ExperienceDomain {
    const KEYWORDS: [(ExperienceDomain, &'static [&'static str]); 3] = [
        (
            ExperienceDomain::InfectiousDisease,
            &["infectio", "covid", "maladies_infectieuses"],
        ),
        (
            ExperienceDomain::Pediatric,
            &["pediatr", "pédiatr", "neonat", "néonat"],
        ),
        (
            ExperienceDomain::Geriatric,
            &["geriatr", "gériatr", "ehpad"],
        ),
    ];

    fn for_specialization(specialization: &str) -> Option<Self> {
        let label = normalize_label(specialization);
        Self::KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| label.contains(keyword)))
            .map(|(domain, _)| *domain)
    }

    fn held_by(self, candidate: &CandidateProfile) -> bool {
        let experience = &candidate.specialized_experience;
        match self {
            ExperienceDomain::InfectiousDisease => experience.infectious_disease,
            ExperienceDomain::Pediatric => experience.pediatric,
            ExperienceDomain::Geriatric => experience.geriatric,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ExperienceDomain::InfectiousDisease => "maladies infectieuses",
            ExperienceDomain::Pediatric => "pédiatrie",
            ExperienceDomain::Geriatric => "gériatrie",
        }
    }
}
