use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use super::config::{ConfigurationError, EstablishmentScoringConfig};
use super::domain::{CandidateProfile, MissionId, MissionRequirement};
use super::engine::CompatibilityEngine;
use super::ranking::{qualified_only, rank_candidates, RankedCandidate};
use crate::config::MatchingSettings;

/// Shared handler state; cheap to clone since the engine holds no data.
#[derive(Debug, Clone, Copy)]
pub struct MatchingState {
    pub engine: CompatibilityEngine,
    pub settings: MatchingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    pub mission: MissionRequirement,
    #[serde(default)]
    pub config: EstablishmentScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<CandidateProfile>,
    pub mission: MissionRequirement,
    #[serde(default)]
    pub config: EstablishmentScoringConfig,
    #[serde(default)]
    pub qualified_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub mission_id: MissionId,
    pub results: Vec<RankedCandidate>,
}

/// Router exposing scoring, ranking, and configuration validation.
pub fn matching_router(engine: CompatibilityEngine, settings: MatchingSettings) -> Router {
    Router::new()
        .route("/api/v1/matching/score", post(score_handler))
        .route("/api/v1/matching/rank", post(rank_handler))
        .route(
            "/api/v1/establishments/scoring-config/validate",
            post(validate_handler),
        )
        .with_state(MatchingState { engine, settings })
}

pub(crate) async fn score_handler(
    State(state): State<MatchingState>,
    Json(request): Json<ScoreRequest>,
) -> Response {
    match state
        .engine
        .score(&request.candidate, &request.mission, &request.config)
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => configuration_rejected(err),
    }
}

pub(crate) async fn rank_handler(
    State(state): State<MatchingState>,
    Json(request): Json<RankRequest>,
) -> Response {
    let pool = request.candidates.len();
    if pool > state.settings.max_pool_size {
        let payload = json!({
            "error": format!(
                "candidate pool of {} exceeds the limit of {}",
                pool, state.settings.max_pool_size
            ),
        });
        return (StatusCode::PAYLOAD_TOO_LARGE, Json(payload)).into_response();
    }

    let engine = state.engine;
    let ranked = tokio::task::spawn_blocking(move || {
        let RankRequest {
            candidates,
            mission,
            config,
            qualified_only: keep_qualified,
        } = request;
        rank_candidates(&engine, &candidates, &mission, &config).map(|ranked| {
            let results = if keep_qualified {
                qualified_only(ranked)
            } else {
                ranked
            };
            RankResponse {
                mission_id: mission.id,
                results,
            }
        })
    })
    .await;

    match ranked {
        Ok(Ok(response)) => (StatusCode::OK, Json(response)).into_response(),
        Ok(Err(err)) => configuration_rejected(err),
        Err(join_error) => {
            error!(error = %join_error, "ranking task failed");
            let payload = json!({ "error": "ranking task failed" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn validate_handler(
    State(state): State<MatchingState>,
    Json(config): Json<EstablishmentScoringConfig>,
) -> Response {
    let report = state.engine.validate_config(&config);
    (StatusCode::OK, Json(report)).into_response()
}

fn configuration_rejected(err: ConfigurationError) -> Response {
    let payload = json!({
        "error": err.to_string(),
        "errors": err.errors,
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
