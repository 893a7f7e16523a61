mod common;

#[tokio::test]
async fn test_health_reports_healthy() {
    let state = common::create_test_state();
    let server = common::make_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
    assert!(body["version"].is_string());
}
