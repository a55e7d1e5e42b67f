use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use slotplanner_api::config::ApiConfig;
use slotplanner_core::models::slot::{AvailabilityResponse, GenerateSlotsResponse};

use crate::test_utils::TestContext;

fn morning_booking() -> Value {
    json!({ "id": "apt-1", "start": "2024-05-06T08:30:00", "end": "2024-05-06T09:00:00" })
}

#[test_log::test(tokio::test)]
async fn test_generate_slots_back_to_back() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "step_minutes": 30,
            "working_window": ["08:00", "10:00"],
            "booked": [morning_booking()]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "date": "2024-05-06", "slots": ["08:00", "09:00", "09:30"] })
    );
}

#[tokio::test]
async fn test_generate_slots_ignores_edited_appointment() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "step_minutes": 30,
            "ignore_id": "apt-1",
            "working_window": ["08:00", "10:00"],
            "booked": [morning_booking()]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<GenerateSlotsResponse>();
    let slots: Vec<String> = body.slots.iter().map(ToString::to_string).collect();
    assert_eq!(slots, vec!["08:00", "08:30", "09:00", "09:30"]);
}

#[tokio::test]
async fn test_generate_slots_uses_configured_default_step() {
    let ctx = TestContext::with_config(ApiConfig {
        default_step_minutes: 20,
        ..ApiConfig::default()
    });

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 20,
            "working_window": ["08:00", "09:00"]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["slots"], json!(["08:00", "08:20", "08:40"]));
}

#[tokio::test]
async fn test_generate_slots_without_window_searches_whole_day() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 120,
            "step_minutes": 240
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["slots"],
        json!(["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"])
    );
}

#[test_log::test(tokio::test)]
async fn test_generate_slots_rejects_zero_duration() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({ "date": "2024-05-06", "duration_minutes": 0 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap_or_default().to_string();
    assert!(message.contains("duration_minutes"), "unexpected error: {message}");
}

#[tokio::test]
async fn test_generate_slots_rejects_inverted_booking() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "booked": [{ "id": "bad", "start": "2024-05-06T10:00:00", "end": "2024-05-06T09:00:00" }]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_slots_rejects_malformed_time() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "2024-05-06",
            "duration_minutes": 30,
            "working_window": ["8am", "10:00"]
        }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_generate_slots_on_last_supported_date() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/slots")
        .json(&json!({
            "date": "+262142-12-31",
            "duration_minutes": 1440,
            "step_minutes": 10
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["slots"], json!([]));
}

#[tokio::test]
async fn test_availability_open_day() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/availability")
        .json(&json!({
            "schedule": { "1": ["08:00", "10:00"] },
            "date": "2024-05-06",
            "duration_minutes": 30,
            "step_minutes": 30,
            "booked": [morning_booking()]
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "date": "2024-05-06",
            "open": true,
            "window": ["08:00", "10:00"],
            "slots": ["08:00", "09:00", "09:30"]
        })
    );
}

#[tokio::test]
async fn test_availability_closed_day() {
    let ctx = TestContext::new();

    // 2024-05-05 is a Sunday
    let response = ctx
        .server
        .post("/api/availability")
        .json(&json!({
            "schedule": { "1": ["08:00", "10:00"] },
            "date": "2024-05-05",
            "duration_minutes": 30
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<AvailabilityResponse>();
    assert!(!body.open);
    assert_eq!(body.window, None);
    assert!(body.slots.is_empty());
}
