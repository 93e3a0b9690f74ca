use crate::infra::{AppState, SharedCatalog};
use admission_ai::catalog::{CatalogError, CatalogSource, ProgramCatalog};
use admission_ai::error::AppError;
use admission_ai::scoring::{
    calculate_aggregate, plan_net_score, predict_chance, predict_merit_list, validate_curriculum,
    validate_input,
    AggregateBreakdown, ChancePrediction, ClosingThreshold, Curriculum, MeritListPrediction,
    NetScorePlan, PreferenceList, PreferenceListGenerator, PreferenceProfile, Program,
    ScoreInput, ValidationReport,
};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub(crate) enum RequestError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("{field} must be between 0 and 100")]
    OutOfRange { field: &'static str },
    #[error("invalid school results: {}", .0.errors.join("; "))]
    InvalidCurriculum(ValidationReport),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            RequestError::Catalog(err) => AppError::from(err).into_response(),
            RequestError::InvalidCurriculum(validation) => {
                let body = Json(json!({ "validation": validation }));
                (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
            }
            other => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

fn ensure_percentage(value: f64, field: &'static str) -> Result<f64, RequestError> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(RequestError::OutOfRange { field })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgramsResponse {
    pub(crate) source: CatalogSource,
    pub(crate) programs: Vec<Program>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AggregateResponse {
    pub(crate) validation: ValidationReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<AggregateBreakdown>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChanceRequest {
    pub(crate) aggregate: f64,
    #[serde(default)]
    pub(crate) closing_aggregate: Option<f64>,
    #[serde(default)]
    pub(crate) program_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeritListRequest {
    pub(crate) aggregate: f64,
    #[serde(default)]
    pub(crate) thresholds: Option<Vec<ClosingThreshold>>,
    #[serde(default)]
    pub(crate) program_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NetScoreRequest {
    pub(crate) closing_aggregate: f64,
    pub(crate) curriculum: Curriculum,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreferenceRequest {
    pub(crate) aggregate: f64,
    #[serde(default)]
    pub(crate) program_ids: Vec<String>,
    #[serde(default)]
    pub(crate) profile: PreferenceProfile,
}

/// Scoring endpoints backed by the shared catalog.
pub(crate) fn scoring_router(catalog: SharedCatalog) -> Router {
    Router::new()
        .route("/api/v1/programs", get(programs_endpoint))
        .route("/api/v1/aggregate", post(aggregate_endpoint))
        .route("/api/v1/predictions/chance", post(chance_endpoint))
        .route("/api/v1/predictions/merit-list", post(merit_list_endpoint))
        .route(
            "/api/v1/recommendations/net-score",
            post(net_score_endpoint),
        )
        .route("/api/v1/preferences", post(preferences_endpoint))
        .with_state(catalog)
}

pub(crate) fn with_service_routes(catalog: SharedCatalog) -> Router {
    scoring_router(catalog)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn programs_endpoint(
    State(catalog): State<SharedCatalog>,
) -> Json<ProgramsResponse> {
    Json(ProgramsResponse {
        source: catalog.source(),
        programs: catalog.programs().to_vec(),
    })
}

pub(crate) async fn aggregate_endpoint(Json(input): Json<ScoreInput>) -> Response {
    let validation = validate_input(&input);
    if !validation.is_valid {
        let body = AggregateResponse {
            validation,
            breakdown: None,
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }

    let breakdown = calculate_aggregate(&input);
    info!(
        total = breakdown.total_aggregate,
        curriculum = input.curriculum.label(),
        "aggregate calculated"
    );

    Json(AggregateResponse {
        validation,
        breakdown: Some(breakdown),
    })
    .into_response()
}

pub(crate) async fn chance_endpoint(
    State(catalog): State<SharedCatalog>,
    Json(request): Json<ChanceRequest>,
) -> Result<Json<ChancePrediction>, RequestError> {
    let aggregate = ensure_percentage(request.aggregate, "aggregate")?;
    let closing = match (request.closing_aggregate, request.program_id.as_deref()) {
        (Some(closing), _) => Some(ensure_percentage(closing, "closing_aggregate")?),
        (None, Some(id)) => catalog.candidate(id)?.reference_closing(),
        (None, None) => None,
    };

    Ok(Json(predict_chance(aggregate, closing)))
}

pub(crate) async fn merit_list_endpoint(
    State(catalog): State<SharedCatalog>,
    Json(request): Json<MeritListRequest>,
) -> Result<Json<MeritListPrediction>, RequestError> {
    let aggregate = ensure_percentage(request.aggregate, "aggregate")?;
    let thresholds = match (request.thresholds, request.program_id.as_deref()) {
        (Some(thresholds), _) => thresholds,
        (None, Some(id)) => catalog.candidate(id)?.thresholds,
        (None, None) => Vec::new(),
    };

    Ok(Json(predict_merit_list(aggregate, &thresholds)))
}

pub(crate) async fn net_score_endpoint(
    Json(request): Json<NetScoreRequest>,
) -> Result<Json<NetScorePlan>, RequestError> {
    let closing = ensure_percentage(request.closing_aggregate, "closing_aggregate")?;
    let validation = validate_curriculum(&request.curriculum);
    if !validation.is_valid {
        return Err(RequestError::InvalidCurriculum(validation));
    }

    Ok(Json(plan_net_score(closing, &request.curriculum)))
}

pub(crate) async fn preferences_endpoint(
    State(catalog): State<SharedCatalog>,
    Json(request): Json<PreferenceRequest>,
) -> Result<Json<PreferenceList>, RequestError> {
    let aggregate = ensure_percentage(request.aggregate, "aggregate")?;
    let list = build_preferences(&catalog, aggregate, &request.program_ids, &request.profile)?;

    info!(
        programs = list.summary.total_programs,
        safe = list.summary.safe_count,
        "preference list generated"
    );
    Ok(Json(list))
}

fn build_preferences(
    catalog: &ProgramCatalog,
    aggregate: f64,
    program_ids: &[String],
    profile: &PreferenceProfile,
) -> Result<PreferenceList, CatalogError> {
    let candidates = catalog.candidates(program_ids.iter().map(String::as_str))?;
    Ok(PreferenceListGenerator::new().generate(aggregate, &candidates, profile))
}
