use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::config::MatchingSettings;
use crate::matching::router::{score_handler, MatchingState, ScoreRequest};
use crate::matching::{matching_router, CompatibilityEngine, EstablishmentScoringConfig};

fn router_with_pool_limit(max_pool_size: usize) -> axum::Router {
    matching_router(CompatibilityEngine::new(), MatchingSettings { max_pool_size })
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn score_handler_returns_result() {
    let state = MatchingState {
        engine: CompatibilityEngine::new(),
        settings: MatchingSettings::default(),
    };
    let request = ScoreRequest {
        candidate: candidate("nurse-a", &["cardiologie"], 6.0, 3.0),
        mission: mission("cardiologie", 5.0),
        config: EstablishmentScoringConfig::baseline_only(),
    };

    let response = score_handler(State(state), axum::Json(request)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total_score"], 70);
    assert_eq!(body["is_qualified"], true);
    assert_eq!(body["breakdown"]["base"], 70);
    assert_eq!(body["specific_criterion"], "not_configured");
}

#[tokio::test]
async fn score_route_rejects_invalid_configuration() {
    let payload = json!({
        "candidate": candidate("nurse-a", &["cardiologie"], 6.0, 3.0),
        "mission": mission("cardiologie", 5.0),
        "config": custom_config(&["languages", "time_travel"]),
    });

    let response = router_with_pool_limit(10)
        .oneshot(post_json("/api/v1/matching/score", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["errors"], json!(["invalid criterion: time_travel"]));
}

#[tokio::test]
async fn score_route_defaults_to_baseline_when_config_missing() {
    let payload = json!({
        "candidate": candidate("nurse-a", &["cardiologie"], 6.0, 3.0),
        "mission": mission("cardiologie", 5.0),
    });

    let response = router_with_pool_limit(10)
        .oneshot(post_json("/api/v1/matching/score", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["breakdown"]["modular"], 0);
}

#[tokio::test]
async fn rank_route_orders_pool_and_filters() {
    let payload = json!({
        "candidates": [
            candidate("nurse-far", &["pneumologie"], 1.0, 40.0),
            candidate("nurse-best", &["urgences"], 6.0, 2.0),
        ],
        "mission": mission("urgences", 3.0),
        "qualified_only": true,
    });

    let response = router_with_pool_limit(10)
        .oneshot(post_json("/api/v1/matching/rank", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["mission_id"], "mission-0042");
    let results = body["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["nurse_id"], "nurse-best");
}

#[tokio::test]
async fn rank_route_enforces_pool_limit() {
    let payload = json!({
        "candidates": [
            candidate("nurse-1", &["urgences"], 6.0, 2.0),
            candidate("nurse-2", &["urgences"], 6.0, 2.0),
        ],
        "mission": mission("urgences", 3.0),
    });

    let response = router_with_pool_limit(1)
        .oneshot(post_json("/api/v1/matching/rank", payload))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn validate_route_reports_errors() {
    let mut config = custom_config(&["languages"]);
    config.specific_criterion_weight = 4;

    let response = router_with_pool_limit(10)
        .oneshot(post_json(
            "/api/v1/establishments/scoring-config/validate",
            serde_json::to_value(&config).expect("config serializes"),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn validate_route_reports_weights_outside_any_byte_range() {
    for weight in [300, -1] {
        let payload = json!({
            "custom_scoring_enabled": true,
            "selected_criteria": ["languages", "mission_history"],
            "specific_criterion": "Expérience COVID",
            "specific_criterion_weight": weight,
        });

        let response = router_with_pool_limit(10)
            .oneshot(post_json(
                "/api/v1/establishments/scoring-config/validate",
                payload,
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK, "weight {weight}");
        let body = read_json_body(response).await;
        assert_eq!(body["valid"], false);
        let errors = body["errors"].as_array().expect("errors array");
        assert_eq!(errors.len(), 1);
        assert!(errors[0]
            .as_str()
            .is_some_and(|error| error.contains(&format!("(got {weight})"))));
    }
}
