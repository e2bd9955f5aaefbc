use crate::helpers::{body_json, empty_request, make_test_app};
use axum::http::StatusCode;
use tower::ServiceExt;

#[tokio::test]
async fn unsupported_methods_are_rejected_without_store_calls() {
    let cases = [
        ("DELETE", "/api/attendance"),
        ("PUT", "/api/attendance"),
        ("PATCH", "/api/messages"),
        ("DELETE", "/api/messages"),
        ("POST", "/api/students"),
        ("GET", "/api/students/upload"),
        ("POST", "/api/health"),
    ];

    for (method, uri) in cases {
        let (app, store) = make_test_app();
        let response = app.oneshot(empty_request(method, uri)).await.unwrap();

        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "{method} {uri}"
        );
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "Method tidak diizinkan");
        assert_eq!(store.operation_count(), 0, "{method} {uri}");
    }
}
