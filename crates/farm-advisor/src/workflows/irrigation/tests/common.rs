use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::irrigation::{
    irrigation_router, AdjustmentConfig, CropScheduleTable, ScheduleAdjuster, WeatherSnapshot,
};

pub(super) fn weather(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64) -> WeatherSnapshot {
    WeatherSnapshot {
        temperature_c,
        humidity_pct,
        rainfall_mm,
        description: "observed".to_string(),
    }
}

/// Hot and dry afternoon.
pub(super) fn heatwave() -> WeatherSnapshot {
    weather(35.0, 60.0, 0.0)
}

/// Humid day with a heavy shower.
pub(super) fn monsoon_shower() -> WeatherSnapshot {
    weather(28.0, 85.0, 15.0)
}

pub(super) fn adjuster_with(config: AdjustmentConfig) -> ScheduleAdjuster {
    ScheduleAdjuster::with_config(Arc::new(CropScheduleTable::builtin()), config)
}

pub(super) fn router() -> axum::Router {
    irrigation_router(Arc::new(ScheduleAdjuster::default()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
