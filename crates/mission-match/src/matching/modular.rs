use super::config::ValidatedScoringConfig;
use super::domain::{CandidateProfile, MissionRequirement};
use super::SubScore;

pub const MODULAR_MAX: u32 = 20;

/// Points one qualifying criterion earns; floors so that the tier never exceeds its cap.
pub fn points_per_criterion(selected: usize) -> u32 {
    match u32::try_from(selected) {
        Ok(0) | Err(_) => 0,
        Ok(count) => MODULAR_MAX / count,
    }
}

pub(crate) fn score_modular(
    candidate: &CandidateProfile,
    mission: &MissionRequirement,
    config: &ValidatedScoringConfig,
) -> SubScore {
    let mut sub = SubScore::default();
    let criteria = config.criteria();
    if !config.custom_scoring_enabled() || criteria.is_empty() {
        return sub;
    }

    let points = points_per_criterion(criteria.len());
    for criterion in criteria {
        let evaluation = criterion.evaluate(candidate, mission);
        if evaluation.qualified {
            sub.add(points, evaluation.factor);
        }
    }
    sub
}
