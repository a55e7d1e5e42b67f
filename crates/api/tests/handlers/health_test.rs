use serde_json::Value;

use crate::test_utils::TestContext;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_version_reports_default_step() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/version").await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "slotplanner-api");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["default_step_minutes"], ctx.state.default_step_minutes);
}
