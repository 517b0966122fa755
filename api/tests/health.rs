mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn health_endpoints_answer_ok() {
    let app = TestApp::new();
    let (status, _) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/health/db").await;
    assert_eq!(status, StatusCode::OK);
}
