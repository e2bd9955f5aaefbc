use crate::helpers::{body_json, empty_request, make_test_app};
use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn health_check_returns_ok_json() {
    let (app, store) = make_test_app();

    let response = app.oneshot(empty_request("GET", "/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Health check passed");
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (app, _) = make_test_app();

    let response = app.oneshot(empty_request("GET", "/api/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
