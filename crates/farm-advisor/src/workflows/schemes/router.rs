use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::directory::{SchemeListing, SchemeQuery};
use super::domain::{FactorOutcome, MatchResult};
use super::intake::EligibilityForm;
use super::service::SchemeAdvisor;

/// Router builder exposing eligibility checks and scheme search.
pub fn scheme_router(advisor: Arc<SchemeAdvisor>) -> Router {
    Router::new()
        .route("/api/v1/schemes", get(search_handler))
        .route("/api/v1/schemes/eligibility", post(eligibility_handler))
        .with_state(advisor)
}

/// Recommended scheme as rendered for clients.
#[derive(Debug, Clone, Serialize)]
pub struct MatchView {
    pub scheme_name: String,
    pub match_percentage: u8,
    pub justification: String,
    pub explanations: Vec<String>,
    pub description: String,
    pub factors: Vec<FactorOutcome>,
}

impl From<MatchResult> for MatchView {
    fn from(result: MatchResult) -> Self {
        let explanations = result.explanations();
        Self {
            justification: explanations.join(" | "),
            explanations,
            scheme_name: result.scheme_name,
            match_percentage: result.match_percentage,
            description: result.description,
            factors: result.factors,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EligibilityResponse {
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemeSearchResponse {
    pub total: usize,
    pub schemes: Vec<SchemeListing>,
}

pub(crate) async fn eligibility_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
    Json(form): Json<EligibilityForm>,
) -> Response {
    match advisor.recommend(form) {
        Ok(matches) => {
            let body = EligibilityResponse {
                matches: matches.into_iter().map(MatchView::from).collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn search_handler(
    State(advisor): State<Arc<SchemeAdvisor>>,
    Query(query): Query<SchemeQuery>,
) -> Json<SchemeSearchResponse> {
    let schemes = advisor.search(&query);
    Json(SchemeSearchResponse {
        total: schemes.len(),
        schemes,
    })
}
