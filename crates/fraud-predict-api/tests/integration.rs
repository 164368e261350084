//! Integration tests for the prediction endpoint
//!
//! Drives the full router (CORS, body limit, tracing layers included)
//! through `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Method, Request, StatusCode},
    Router,
};
use fraud_predict_api::{create_router, AppState, ServerConfig};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(AppState::default()))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_predict(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn predict(payload: Value) -> (StatusCode, Value) {
    send(app(), post_predict(payload.to_string())).await
}

#[tokio::test]
async fn test_error_above_threshold_is_fraud() {
    let (status, body) = predict(json!({"error": 20})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 1}));
}

#[tokio::test]
async fn test_error_at_threshold_is_not_fraud() {
    let (status, body) = predict(json!({"error": 15})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 0}));
}

#[tokio::test]
async fn test_numeric_string_is_coerced() {
    let (_, body) = predict(json!({"error": "16.5"})).await;
    assert_eq!(body, json!({"prediction": 1}));
}

#[tokio::test]
async fn test_empty_object_defaults_to_not_fraud() {
    let (status, body) = predict(json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 0}));
}

#[tokio::test]
async fn test_non_numeric_error_is_not_fraud() {
    let (_, body) = predict(json!({"error": "abc"})).await;
    assert_eq!(body, json!({"prediction": 0}));
}

#[tokio::test]
async fn test_full_transaction_payload() {
    let payload = json!({
        "month": "9",
        "day": "14",
        "time": "06:21",
        "amount": "134.09",
        "useChip": "Swipe Transaction",
        "merchantName": "3527213246127876953",
        "merchantCity": "La Verne",
        "merchantState": "CA",
        "zip": "91750",
        "mcc": "5300",
        "error": 18
    });
    let (status, body) = predict(payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 1}));
}

#[tokio::test]
async fn test_numbers_beyond_f64_range_still_classify() {
    let (status, body) = send(app(), post_predict(r#"{"error": 1e400}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 1}));

    let (status, body) = send(app(), post_predict(r#"{"amount": 1e400, "error": 20}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 1}));

    let (status, body) = send(app(), post_predict(r#"{"error": -1e400}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 0}));
}

#[tokio::test]
async fn test_integer_beyond_f64_range_is_not_fraud() {
    let payload = format!(r#"{{"error": 1{}}}"#, "0".repeat(400));
    let (status, body) = send(app(), post_predict(payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 0}));
}

#[tokio::test]
async fn test_missing_body_is_bad_request() {
    let (status, body) = send(app(), post_predict(Body::empty())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No input data provided"}));
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (status, body) = send(app(), post_predict("{\"error\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "No input data provided"}));
}

#[tokio::test]
async fn test_non_object_is_bad_request() {
    for payload in ["[1, 2]", "null", "42", "\"error\""] {
        let (status, body) = send(app(), post_predict(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body, json!({"error": "No input data provided"}));
    }
}

#[tokio::test]
async fn test_content_type_not_required() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .body(Body::from(r#"{"error": 21}"#))
        .unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"prediction": 1}));
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ServerConfig {
        max_body_bytes: 16,
        ..Default::default()
    };
    let router = create_router(Arc::new(AppState::new(config)));
    let payload = json!({"merchantName": "a".repeat(64), "error": 20}).to_string();

    let (status, body) = send(router, post_predict(payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("16 bytes"));
}

#[tokio::test]
async fn test_stalled_body_times_out() {
    let config = ServerConfig {
        timeout_ms: 50,
        ..Default::default()
    };
    let router = create_router(Arc::new(AppState::new(config)));
    let stalled = Body::from_stream(futures_util::stream::pending::<Result<Bytes, std::io::Error>>());

    let (status, _) = send(router, post_predict(stalled)).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/predict")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_header_on_prediction() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .header(header::ORIGIN, "https://example.org")
        .body(Body::from("{}"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "fraud-predict");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_error_codes_catalogue() {
    let request = Request::builder().uri("/error-codes").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let codes = body.as_array().unwrap();
    assert_eq!(codes.len(), 23);
    assert_eq!(codes[0], json!({"code": 1, "label": "Bad CVV"}));
    assert_eq!(codes[22], json!({"code": 23, "label": "Technical Glitch"}));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

fn run_predict(payload: Value) -> (StatusCode, Value) {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(predict(payload))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_prediction_follows_threshold(error in -1000i64..1000) {
        let (status, body) = run_predict(json!({"error": error}));
        prop_assert_eq!(status, StatusCode::OK);
        let expected = if error > 15 { 1 } else { 0 };
        prop_assert_eq!(body, json!({"prediction": expected}));
    }

    #[test]
    fn prop_missing_error_is_never_fraud(amount in 0.0f64..100_000.0, month in 1i64..=12) {
        let (_, body) = run_predict(json!({"amount": amount, "month": month}));
        prop_assert_eq!(body, json!({"prediction": 0}));
    }
}
