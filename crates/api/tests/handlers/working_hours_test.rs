use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

fn schedule() -> Value {
    json!({
        "1": ["08:00", "17:00"],
        "2": ["13:00", "18:00"],
        "3": null
    })
}

#[tokio::test]
async fn test_resolve_open_day() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/working-window")
        .json(&json!({ "schedule": schedule(), "date": "2024-05-07" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "date": "2024-05-07", "window": ["13:00", "18:00"] })
    );
}

#[tokio::test]
async fn test_resolve_closed_day_is_null() {
    let ctx = TestContext::new();

    // 2024-05-08 is a Wednesday, explicitly closed
    let response = ctx
        .server
        .post("/api/working-window")
        .json(&json!({ "schedule": schedule(), "date": "2024-05-08" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["window"], Value::Null);
}

#[tokio::test]
async fn test_resolve_rejects_inverted_window() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/working-window")
        .json(&json!({ "schedule": { "1": ["17:00", "08:00"] }, "date": "2024-05-06" }))
        .await;

    assert!(response.status_code().is_client_error());
    assert_ne!(response.status_code(), StatusCode::OK);
}
