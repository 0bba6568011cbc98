use crate::infra::{Advisors, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use farm_advisor::workflows::advisor_router;
use serde::Serialize;
use serde_json::json;

/// Crops with a dedicated schedule, plus the crop used for anything else.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CropListResponse {
    pub(crate) default_crop: String,
    pub(crate) crops: Vec<String>,
}

pub(crate) fn with_service_routes(advisors: Advisors) -> axum::Router {
    let Advisors {
        schemes,
        irrigation,
    } = advisors;

    let crops = CropListResponse {
        default_crop: irrigation.table().default_crop().to_string(),
        crops: irrigation.table().crops().map(str::to_string).collect(),
    };

    advisor_router(schemes, irrigation)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/irrigation/crops",
            axum::routing::get(move || async move { Json(crops) }),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "checked_at": Utc::now().to_rfc3339() }))
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
