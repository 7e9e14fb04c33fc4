use std::cmp::Ordering;

use super::domain::{CandidateProfile, MissionRequirement};
use super::specialization;
use super::SubScore;

pub const BASE_MAX: u32 = 70;
pub const SPECIALIZATION_POINTS: u32 = 30;
pub const PARTIAL_SPECIALIZATION_POINTS: u32 = 15;
pub const EXPERIENCE_POINTS: u32 = 25;

/// Experience beyond `required * LARGELY_SUFFICIENT_RATIO` earns an extra factor, no points.
const LARGELY_SUFFICIENT_RATIO: f64 = 1.5;

/// Inclusive upper bound (km), points, factor label.
const DISTANCE_TIERS: [(f64, u32, &'static str); 4] = [
    (5.0, 15, "Très proche"),
    (15.0, 12, "Proche"),
    (30.0, 8, "Distance raisonnable"),
    (50.0, 4, "Distance acceptable"),
];

/// Mandatory equity baseline: specialization, experience, and proximity.
pub(crate) fn score_base(candidate: &CandidateProfile, mission: &MissionRequirement) -> SubScore {
    let mut sub = SubScore::default();
    score_specialization(candidate, mission, &mut sub);
    score_experience(candidate, mission, &mut sub);
    score_distance(candidate, mission, &mut sub);
    sub
}

fn score_specialization(
    candidate: &CandidateProfile,
    mission: &MissionRequirement,
    sub: &mut SubScore,
) {
    if candidate.has_specialization(&mission.specialization) {
        sub.add(
            SPECIALIZATION_POINTS,
            format!("Spécialisation exacte : {}", mission.specialization),
        );
    } else if let Some(related) =
        specialization::partial_match(&candidate.specializations, &mission.specialization)
    {
        sub.add(
            PARTIAL_SPECIALIZATION_POINTS,
            format!("Spécialisation connexe : {related}"),
        );
    }
}

fn score_experience(candidate: &CandidateProfile, mission: &MissionRequirement, sub: &mut SubScore) {
    let experience = candidate.experience_years;
    let required = mission.required_experience_years;

    // At or above the requirement saturates the sub-score; NaN on either side counts as unmet.
    match experience.partial_cmp(&required) {
        Some(Ordering::Less) | None => return,
        Some(_) => {}
    }

    sub.add(
        EXPERIENCE_POINTS,
        format!("Expérience suffisante : {experience} ans (requis {required})"),
    );

    if experience > required * LARGELY_SUFFICIENT_RATIO {
        sub.note("Expérience largement suffisante".to_string());
    }
}

fn score_distance(candidate: &CandidateProfile, mission: &MissionRequirement, sub: &mut SubScore) {
    let distance = candidate.location.distance_km_to(&mission.location);

    match distance_tier(distance) {
        Some((max_km, points, label)) => sub.add(
            points,
            format!("{label} : {distance:.1} km (≤ {max_km} km)"),
        ),
        None => sub.note(format!("Éloigné : {distance:.1} km (> 50 km)")),
    }
}

/// Closest tier containing `distance`; bounds are inclusive. NaN matches no tier.
fn distance_tier(distance: f64) -> Option<(f64, u32, &'static str)> {
    DISTANCE_TIERS
        .iter()
        .copied()
        .find(|(max_km, _, _)| distance <= *max_km)
}
