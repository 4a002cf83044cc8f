use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::advisor::router::score_handler;
use crate::advisor::{advisor_router, RequirementsProfile};

fn router() -> Router {
    advisor_router(Arc::new(service()))
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request builds")
}

#[tokio::test]
async fn recommendations_route_ranks_algorithms() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({
                "dataType": "text",
                "securityPriority": 9,
                "performancePriority": 3,
                "useCase": "password-storage",
                "compliance": ["FIPS"],
                "quantumConcern": false
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["no_strong_match"], json!(false));
    let recommendations = payload["recommendations"]
        .as_array()
        .expect("recommendations array");
    assert_eq!(recommendations.len(), 5);
    assert_eq!(recommendations[0]["key"], json!("FORTIS"));
    assert_eq!(recommendations[0]["score"], json!(119));
    assert_eq!(recommendations[0]["display_score"], json!(100));
    assert_eq!(recommendations[0]["best_match"], json!(true));
}

#[tokio::test]
async fn recommendations_route_rejects_out_of_range_priority() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({ "securityPriority": 0 }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("securityPriority"));
}

#[tokio::test]
async fn recommendations_route_rejects_unknown_data_type() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/recommendations",
            json!({ "dataType": "smell" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn score_handler_returns_not_found_for_unknown_key() {
    let response = score_handler(
        State(Arc::new(service())),
        Path("ROT13".to_string()),
        axum::Json(RequirementsProfile::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], json!("unknown algorithm 'ROT13'"));
}

#[tokio::test]
async fn score_route_returns_card_and_reasoning() {
    let response = router()
        .oneshot(post_json(
            "/api/v1/algorithms/LATTICE/score",
            json!({ "quantumConcern": true }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["card"]["score"], json!(60));
    assert!(payload["reasoning"]
        .as_str()
        .unwrap_or_default()
        .starts_with("This algorithm"));
}

#[tokio::test]
async fn algorithms_route_applies_filters() {
    let response = router()
        .oneshot(get("/api/v1/algorithms?search=&type=symmetric&sort=security-desc"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let keys: Vec<&str> = payload["algorithms"]
        .as_array()
        .expect("algorithms array")
        .iter()
        .filter_map(|entry| entry["key"].as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["FORTIS", "SWIFT", "TWIN-A", "TWIN-B", "TRIPLE", "RELIC"]
    );
}

#[tokio::test]
async fn algorithms_route_rejects_unknown_sort() {
    let response = router()
        .oneshot(get("/api/v1/algorithms?sort=random"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn algorithm_detail_route_returns_record() {
    let response = router()
        .oneshot(get("/api/v1/algorithms/LATTICE"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["key"], json!("LATTICE"));
    assert_eq!(payload["algorithm"]["type"], json!("asymmetric"));
    assert_eq!(payload["algorithm"]["quantumResistant"], json!(true));

    let missing = router()
        .oneshot(get("/api/v1/algorithms/ROT13"))
        .await
        .expect("route executes");
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn compare_route_keeps_first_four_distinct_keys() {
    let response = router()
        .oneshot(get(
            "/api/v1/compare?keys=SWIFT,SWIFT,FORTIS,TWIN-A,TWIN-B,LATTICE",
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["algorithms"],
        json!(["SWIFT", "FORTIS", "TWIN-A", "TWIN-B"])
    );
    assert_eq!(payload["rows"][0]["label"], json!("Full Name"));
}

#[tokio::test]
async fn reference_routes_list_use_cases_and_standards() {
    let use_cases = read_json_body(
        router()
            .oneshot(get("/api/v1/use-cases"))
            .await
            .expect("route executes"),
    )
    .await;
    assert_eq!(
        use_cases["password-storage"]["requirements"],
        json!({ "security": 9, "performance": 3 })
    );

    let standards = read_json_body(
        router()
            .oneshot(get("/api/v1/compliance-standards"))
            .await
            .expect("route executes"),
    )
    .await;
    assert_eq!(
        standards["FIPS"]["prohibitedAlgorithms"],
        json!(["RELIC", "TRIPLE"])
    );
}
