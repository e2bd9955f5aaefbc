use crate::helpers::{body_json, empty_request, json_request, make_test_app};
use axum::http::StatusCode;
use db::Collection;
use db::bson::{Bson, doc};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn create_attendance_returns_insert_ack() {
    let (app, store) = make_test_app();

    let body = json!({ "studentId": "S1", "courseId": "C1", "status": "hadir" });
    let response = app
        .oneshot(json_request("POST", "/api/attendance", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["acknowledged"], true);

    let stored = store.documents(Collection::Attendance);
    assert_eq!(stored.len(), 1);
    let id = stored[0].get_object_id("_id").unwrap();
    assert_eq!(json["insertedId"], id.to_hex());
    assert_eq!(stored[0].get_str("studentId").unwrap(), "S1");
    assert_eq!(stored[0].get_str("courseId").unwrap(), "C1");
    assert_eq!(stored[0].get_str("status").unwrap(), "hadir");
    assert!(matches!(stored[0].get("timestamp"), Some(Bson::DateTime(_))));
}

#[tokio::test]
async fn english_status_alias_is_stored_canonically() {
    let (app, store) = make_test_app();

    let body = json!({ "studentId": "S1", "courseId": "C1", "status": "absent" });
    let response = app
        .oneshot(json_request("POST", "/api/attendance", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let stored = store.documents(Collection::Attendance);
    assert_eq!(stored[0].get_str("status").unwrap(), "tidak hadir");
}

#[tokio::test]
async fn missing_fields_are_rejected_without_insert() {
    let bodies = [
        json!({ "courseId": "C1", "status": "hadir" }),
        json!({ "studentId": "S1", "status": "hadir" }),
        json!({ "studentId": "S1", "courseId": "C1" }),
        json!({ "studentId": "", "courseId": "C1", "status": "hadir" }),
        json!({}),
    ];

    for body in bodies {
        let (app, store) = make_test_app();
        let response = app
            .oneshot(json_request("POST", "/api/attendance", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().unwrap().starts_with("Data tidak lengkap"));
        assert_eq!(store.operation_count(), 0);
        assert!(store.documents(Collection::Attendance).is_empty());
    }
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let (app, store) = make_test_app();

    let body = json!({ "studentId": "S1", "courseId": "C1", "status": "late" });
    let response = app
        .oneshot(json_request("POST", "/api/attendance", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let (app, store) = make_test_app();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/attendance")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn store_failure_is_a_server_error() {
    let (app, store) = make_test_app();
    store.set_unavailable(true);

    let body = json!({ "studentId": "S1", "courseId": "C1", "status": "hadir" });
    let response = app
        .oneshot(json_request("POST", "/api/attendance", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Terjadi kesalahan server")
    );
}

#[tokio::test]
async fn list_attendance_returns_bare_array() {
    let (app, store) = make_test_app();
    store.seed(
        Collection::Attendance,
        vec![
            doc! { "studentId": "S1", "courseId": "C1", "status": "hadir" },
            doc! { "studentId": "S2", "courseId": "C1", "status": "tidak hadir" },
        ],
    );

    let response = app.oneshot(empty_request("GET", "/api/attendance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["studentId"], "S1");
    assert_eq!(records[1]["status"], "tidak hadir");
    assert!(records[0]["_id"].is_string());
}

#[tokio::test]
async fn list_attendance_reports_store_failure() {
    let (app, store) = make_test_app();
    store.set_unavailable(true);

    let response = app.oneshot(empty_request("GET", "/api/attendance")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
