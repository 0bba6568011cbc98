use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn schedule_request(payload: Value) -> Request<Body> {
    Request::post("/api/v1/irrigation/schedule")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn schedule_route_adjusts_for_reported_weather() {
    let payload = json!({
        "crop": "rice",
        "weather": {
            "temperature_c": 28.0,
            "humidity_pct": 85.0,
            "rainfall_mm": 15.0,
            "description": "moderate rain"
        }
    });

    let response = router()
        .oneshot(schedule_request(payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["used_default_crop"], json!(false));
    assert_eq!(body["recommendation"]["frequency_text"], json!("Every 8-10 days"));
    assert_eq!(body["recommendation"]["water_text"], json!("20-40 cm"));
    assert_eq!(body["base"]["base_frequency_days"], json!("5-7"));
    assert_eq!(
        body["adjustment"]["applied_rules"],
        json!(["high_humidity", "heavy_rain"])
    );
}

#[tokio::test]
async fn missing_weather_uses_default_readings() {
    let response = router()
        .oneshot(schedule_request(json!({ "crop": "quinoa" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["used_default_crop"], json!(true));
    assert_eq!(body["crop"], json!("rice"));
    assert_eq!(body["weather"]["temperature_c"], json!(25.0));
    assert_eq!(body["weather"]["description"], json!("unknown"));
    assert_eq!(
        body["recommendation"]["next_watering_text"],
        json!("Today evening or tomorrow morning")
    );
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/irrigation/schedule")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"crop\": 12"))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}
