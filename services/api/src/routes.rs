use crate::infra::AppState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use visa_ready::assessment::{ReadinessEngine, RiskScoreResult, VisaProfile};
use visa_ready::documents::{
    calculate_document_progress, catalog_keys, resolve_requirements, DocumentProfile,
    DocumentProgress, RequirementLookup, UploadedDocument,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssessmentResponse {
    pub(crate) assessed_at: DateTime<Utc>,
    pub(crate) readiness_label: &'static str,
    pub(crate) readiness_summary: &'static str,
    #[serde(flatten)]
    pub(crate) result: RiskScoreResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentProgressRequest {
    #[serde(flatten)]
    pub(crate) profile: DocumentProfile,
    #[serde(default)]
    pub(crate) documents: Vec<UploadedDocument>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) keys: Vec<&'static str>,
}

/// Readiness and document endpoints under `/api/v1`.
pub(crate) fn api_router(engine: ReadinessEngine) -> Router {
    Router::new()
        .route("/api/v1/readiness/assessment", post(assessment_endpoint))
        .route("/api/v1/documents/progress", post(document_progress_endpoint))
        .route("/api/v1/documents/catalog", get(catalog_endpoint))
        .route(
            "/api/v1/documents/requirements/:visa_type/:destination",
            get(requirements_endpoint),
        )
        .with_state(engine)
}

pub(crate) fn with_operational_routes(router: Router) -> Router {
    router
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

pub(crate) async fn assessment_endpoint(
    State(engine): State<ReadinessEngine>,
    Json(profile): Json<VisaProfile>,
) -> Json<AssessmentResponse> {
    let result = engine.assess(&profile);
    info!(
        total_score = result.total_score,
        level = result.readiness_level.label(),
        "readiness assessment served"
    );

    Json(AssessmentResponse {
        assessed_at: Utc::now(),
        readiness_label: result.readiness_level.label(),
        readiness_summary: result.readiness_level.summary(),
        result,
    })
}

pub(crate) async fn document_progress_endpoint(
    Json(request): Json<DocumentProgressRequest>,
) -> Json<DocumentProgress> {
    let DocumentProgressRequest { profile, documents } = request;
    let progress = calculate_document_progress(&profile, &documents);
    info!(
        uploaded = documents.len(),
        completed = progress.completed,
        total = progress.total,
        "document progress served"
    );
    Json(progress)
}

pub(crate) async fn requirements_endpoint(
    Path((visa_type, destination)): Path<(String, String)>,
) -> Json<RequirementLookup> {
    let lookup = resolve_requirements(&visa_type, &destination);
    if lookup.fallback {
        info!(key = %lookup.key, "no catalog entry, serving general requirements");
    }
    Json(lookup)
}

pub(crate) async fn catalog_endpoint() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        keys: catalog_keys().collect(),
    })
}
