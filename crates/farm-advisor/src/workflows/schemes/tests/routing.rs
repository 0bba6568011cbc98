use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn eligibility_request(payload: Value) -> Request<Body> {
    Request::post("/api/v1/schemes/eligibility")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn eligibility_route_returns_ranked_matches() {
    let payload = serde_json::to_value(complete_form()).expect("form serializes");

    let response = router()
        .oneshot(eligibility_request(payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let matches = body
        .get("matches")
        .and_then(Value::as_array)
        .expect("matches array");
    assert_eq!(matches.len(), 6);
    assert_eq!(matches[0].get("match_percentage"), Some(&json!(100)));
    assert_eq!(
        matches[0].get("scheme_name").and_then(Value::as_str),
        Some("Kisan Credit Card (KCC)")
    );
    assert!(matches[3]
        .get("justification")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("Crop: 0%"));
}

#[tokio::test]
async fn eligibility_route_accepts_partial_forms() {
    let response = router()
        .oneshot(eligibility_request(json!({ "state": "Punjab" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert!(body.get("matches").and_then(Value::as_array).is_some());
}

#[tokio::test]
async fn eligibility_route_rejects_malformed_numbers() {
    let response = router()
        .oneshot(eligibility_request(json!({ "land_size": "lots" })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("land_size"));
}

#[tokio::test]
async fn search_route_applies_query_filters() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/schemes?scheme_type=insurance")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body.get("total"), Some(&json!(1)));
}
