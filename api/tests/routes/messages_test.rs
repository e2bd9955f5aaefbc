use crate::helpers::{body_json, empty_request, json_request, make_test_app};
use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use db::Collection;
use db::bson::{Bson, DateTime as BsonDateTime, doc};
use serde_json::{Value, json};
use tower::ServiceExt;

fn parse_time(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn save_message_scenario() {
    let (app, store) = make_test_app();
    let before = Utc::now() - Duration::milliseconds(1);

    let body = json!({ "name": "Alice", "timestamp": "2024-01-01T00:00:00Z" });
    let response = app
        .oneshot(json_request("POST", "/api/messages", &body))
        .await
        .unwrap();
    let after = Utc::now() + Duration::milliseconds(1);

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Data berhasil disimpan");

    let data = &json["data"];
    assert_eq!(data["name"], "Alice");
    assert_eq!(data["timestamp"], "2024-01-01T00:00:00Z");
    assert_eq!(data["status"], "Hadir");

    let saved_at = parse_time(&data["savedAt"]);
    assert!(saved_at >= before && saved_at <= after);
    assert_eq!(data["lastUpdated"], data["savedAt"]);
    assert_eq!(data["createdAt"], data["savedAt"]);

    let stored = store.documents(Collection::Messages);
    assert_eq!(stored.len(), 1);
    assert!(matches!(stored[0].get("savedAt"), Some(Bson::DateTime(_))));
}

#[tokio::test]
async fn server_stamps_overwrite_client_values() {
    let (app, store) = make_test_app();
    let before = Utc::now() - Duration::milliseconds(1);

    let body = json!({
        "name": "Bob",
        "timestamp": 1704067200,
        "status": "Izin",
        "device": "gate-1",
        "savedAt": "1999-01-01T00:00:00Z",
        "createdAt": "1999-01-01T00:00:00Z",
        "lastUpdated": "1999-01-01T00:00:00Z"
    });
    let response = app
        .oneshot(json_request("POST", "/api/messages", &body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["status"], "Izin");
    assert_eq!(data["device"], "gate-1");
    assert_eq!(data["timestamp"], 1704067200);
    for field in ["savedAt", "createdAt", "lastUpdated"] {
        assert!(parse_time(&data[field]) >= before, "{field} kept the client value");
    }

    let stored = &store.documents(Collection::Messages)[0];
    assert_eq!(stored.get_str("device").unwrap(), "gate-1");
    for field in ["savedAt", "createdAt", "lastUpdated"] {
        assert!(matches!(stored.get(field), Some(Bson::DateTime(_))));
    }
}

#[tokio::test]
async fn missing_name_or_timestamp_is_rejected() {
    for body in [
        json!({ "timestamp": "2024-01-01T00:00:00Z" }),
        json!({ "name": "Alice" }),
        json!({ "name": "", "timestamp": "2024-01-01T00:00:00Z" }),
    ] {
        let (app, store) = make_test_app();
        let response = app
            .oneshot(json_request("POST", "/api/messages", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(store.operation_count(), 0);
    }
}

#[tokio::test]
async fn save_failure_carries_store_message() {
    let (app, store) = make_test_app();
    store.set_reject_inserts(true);

    let body = json!({ "name": "Alice", "timestamp": "2024-01-01T00:00:00Z" });
    let response = app
        .oneshot(json_request("POST", "/api/messages", &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let message = body_json(response).await["message"].as_str().unwrap().to_owned();
    assert!(message.starts_with("Gagal menyimpan data ke database"));
    assert!(message.contains("rejecting inserts"));
}

#[tokio::test]
async fn list_messages_is_newest_first_with_count() {
    let (app, store) = make_test_app();
    store.seed(
        Collection::Messages,
        vec![
            doc! { "name": "old", "savedAt": BsonDateTime::from_millis(1_000) },
            doc! { "name": "new", "savedAt": BsonDateTime::from_millis(3_000) },
            doc! { "name": "mid", "savedAt": BsonDateTime::from_millis(2_000) },
        ],
    );

    let response = app.oneshot(empty_request("GET", "/api/messages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["count"], 3);
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["new", "mid", "old"]);
}

#[tokio::test]
async fn list_messages_reports_store_failure() {
    let (app, store) = make_test_app();
    store.set_unavailable(true);

    let response = app.oneshot(empty_request("GET", "/api/messages")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Gagal mengambil data dari database")
    );
}
