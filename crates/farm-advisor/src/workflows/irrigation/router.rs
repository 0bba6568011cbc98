use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::adjust::ScheduleAdjuster;
use super::domain::{ScheduleOutcome, WeatherReading};

/// Router builder exposing the weather-adjusted schedule endpoint.
pub fn irrigation_router(adjuster: Arc<ScheduleAdjuster>) -> Router {
    Router::new()
        .route("/api/v1/irrigation/schedule", post(schedule_handler))
        .with_state(adjuster)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRequest {
    pub crop: String,
    pub weather: WeatherReading,
}

pub(crate) async fn schedule_handler(
    State(adjuster): State<Arc<ScheduleAdjuster>>,
    Json(request): Json<ScheduleRequest>,
) -> Json<ScheduleOutcome> {
    let weather = request.weather.into_snapshot();
    Json(adjuster.adjust(&request.crop, &weather))
}
