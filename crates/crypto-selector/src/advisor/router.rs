use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::comparison::ComparisonSet;
use super::explore::{ExploreFilters, KindFilter, SortOrder};
use super::requirements::RequirementsProfile;
use super::service::AdvisorService;
use crate::catalog::AlgorithmKey;

/// Router builder exposing recommendation, browsing, and comparison endpoints.
pub fn advisor_router(service: Arc<AdvisorService>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/algorithms", get(explore_handler))
        .route("/api/v1/algorithms/:key", get(detail_handler))
        .route("/api/v1/algorithms/:key/score", post(score_handler))
        .route("/api/v1/compare", get(compare_handler))
        .route("/api/v1/use-cases", get(use_cases_handler))
        .route("/api/v1/compliance-standards", get(standards_handler))
        .with_state(service)
}

/// Raw explorer query; blank parameters fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ExploreQuery {
    #[serde(default)]
    pub(crate) search: Option<String>,
    #[serde(default, rename = "type")]
    pub(crate) kind: Option<String>,
    #[serde(default)]
    pub(crate) sort: Option<String>,
}

impl ExploreQuery {
    fn into_filters(self) -> Result<ExploreFilters, String> {
        Ok(ExploreFilters {
            search: self.search.unwrap_or_default(),
            kind: self.kind.as_deref().unwrap_or_default().parse::<KindFilter>()?,
            sort: self.sort.as_deref().unwrap_or_default().parse::<SortOrder>()?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CompareQuery {
    /// Comma-separated algorithm keys.
    #[serde(default)]
    pub(crate) keys: String,
}

pub(crate) async fn recommend_handler(
    State(service): State<Arc<AdvisorService>>,
    Json(profile): Json<RequirementsProfile>,
) -> Response {
    match service.recommend(&profile) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => unprocessable(error.to_string()),
    }
}

pub(crate) async fn score_handler(
    State(service): State<Arc<AdvisorService>>,
    Path(key): Path<String>,
    Json(profile): Json<RequirementsProfile>,
) -> Response {
    let key = AlgorithmKey(key);
    match service.assess(&key, &profile) {
        Ok(Some(assessment)) => (StatusCode::OK, Json(assessment)).into_response(),
        Ok(None) => unknown_algorithm(&key),
        Err(error) => unprocessable(error.to_string()),
    }
}

pub(crate) async fn explore_handler(
    State(service): State<Arc<AdvisorService>>,
    Query(query): Query<ExploreQuery>,
) -> Response {
    match query.into_filters() {
        Ok(filters) => {
            let algorithms = service.explore(&filters);
            (StatusCode::OK, Json(json!({ "algorithms": algorithms }))).into_response()
        }
        Err(message) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
    }
}

pub(crate) async fn detail_handler(
    State(service): State<Arc<AdvisorService>>,
    Path(key): Path<String>,
) -> Response {
    let key = AlgorithmKey(key);
    match service.catalog().algorithm(&key) {
        Some(algorithm) => (
            StatusCode::OK,
            Json(json!({ "key": key, "algorithm": algorithm })),
        )
            .into_response(),
        None => unknown_algorithm(&key),
    }
}

pub(crate) async fn compare_handler(
    State(service): State<Arc<AdvisorService>>,
    Query(query): Query<CompareQuery>,
) -> Response {
    let set = ComparisonSet::from_keys(
        query
            .keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(AlgorithmKey::from),
    );
    (StatusCode::OK, Json(service.compare(&set))).into_response()
}

pub(crate) async fn use_cases_handler(State(service): State<Arc<AdvisorService>>) -> Response {
    (StatusCode::OK, Json(&service.catalog().use_cases)).into_response()
}

pub(crate) async fn standards_handler(State(service): State<Arc<AdvisorService>>) -> Response {
    (StatusCode::OK, Json(&service.catalog().standards)).into_response()
}

fn unknown_algorithm(key: &AlgorithmKey) -> Response {
    let payload = json!({
        "error": format!("unknown algorithm '{key}'"),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

fn unprocessable(message: String) -> Response {
    let payload = json!({ "error": message });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}
