use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{ConfigurationError, EstablishmentScoringConfig};
use super::domain::{CandidateProfile, MissionRequirement, NurseId};
use super::engine::{CompatibilityEngine, ScoringResult};

/// One entry of a ranked candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub nurse_id: NurseId,
    pub result: ScoringResult,
}

/// Score a whole pool against one mission.
///
/// The policy is validated once; candidates are scored in parallel. Ordering is qualified
/// first, then total score descending, then nurse id so ties are stable across runs.
pub fn rank_candidates(
    engine: &CompatibilityEngine,
    candidates: &[CandidateProfile],
    mission: &MissionRequirement,
    config: &EstablishmentScoringConfig,
) -> Result<Vec<RankedCandidate>, ConfigurationError> {
    let validated = config.validated()?;

    let mut ranked: Vec<RankedCandidate> = candidates
        .par_iter()
        .map(|candidate| RankedCandidate {
            nurse_id: candidate.id.clone(),
            result: engine.score_validated(candidate, mission, &validated),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .is_qualified
            .cmp(&a.result.is_qualified)
            .then_with(|| b.result.total_score.cmp(&a.result.total_score))
            .then_with(|| a.nurse_id.cmp(&b.nurse_id))
    });

    debug!(
        mission_id = %mission.id.0,
        pool = ranked.len(),
        qualified = ranked.iter().filter(|entry| entry.result.is_qualified).count(),
        "candidate pool ranked"
    );

    Ok(ranked)
}

/// Drop candidates under the qualification threshold, keeping order.
pub fn qualified_only(ranked: Vec<RankedCandidate>) -> Vec<RankedCandidate> {
    ranked
        .into_iter()
        .filter(|entry| entry.result.is_qualified)
        .collect()
}
