use crate::helpers::{body_json, empty_request, make_test_app, multipart_request, xlsx};
use axum::http::StatusCode;
use db::Collection;
use db::bson::{Bson, doc};
use tower::ServiceExt;

const UPLOAD: &str = "/api/students/upload";

fn seed_existing(store: &db::store::memory::MemoryStore) {
    store.seed(
        Collection::Students,
        vec![doc! { "name": "Old Student", "course": "History" }],
    );
}

#[tokio::test]
async fn upload_replaces_the_collection() {
    let (app, store) = make_test_app();
    seed_existing(&store);

    let file = xlsx(&[
        &["name", "course"],
        &["Alice", "Math"],
        &["Bob", "Physics"],
    ]);
    let response = app
        .oneshot(multipart_request(UPLOAD, "excel", &file))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["acknowledged"], true);
    assert_eq!(json["data"]["insertedCount"], 2);
    assert_eq!(json["data"]["insertedIds"].as_array().unwrap().len(), 2);

    let stored = store.documents(Collection::Students);
    let names: Vec<&str> = stored.iter().map(|d| d.get_str("name").unwrap()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(stored[1].get_str("course").unwrap(), "Physics");
}

#[tokio::test]
async fn later_rows_may_lack_a_column() {
    let (app, store) = make_test_app();

    let file = xlsx(&[&["name", "course"], &["Alice", "Math"], &["Bob", ""]]);
    let response = app
        .oneshot(multipart_request(UPLOAD, "excel", &file))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stored = store.documents(Collection::Students);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].get("course"), Some(&Bson::Null));
}

#[tokio::test]
async fn bad_first_row_leaves_collection_unchanged() {
    let (app, store) = make_test_app();
    seed_existing(&store);

    let file = xlsx(&[&["name", "course"], &["Alice", ""], &["Bob", "Physics"]]);
    let response = app
        .oneshot(multipart_request(UPLOAD, "excel", &file))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "File XLS harus memiliki kolom 'name' dan 'course'"
    );
    assert_eq!(store.operation_count(), 0);

    let stored = store.documents(Collection::Students);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_str("name").unwrap(), "Old Student");
}

#[tokio::test]
async fn missing_file_is_a_bad_request() {
    let (app, store) = make_test_app();
    seed_existing(&store);

    let file = xlsx(&[&["name", "course"], &["Alice", "Math"]]);
    let response = app
        .oneshot(multipart_request(UPLOAD, "spreadsheet", &file))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "No file uploaded");
    assert_eq!(store.documents(Collection::Students).len(), 1);
}

#[tokio::test]
async fn non_multipart_request_is_a_bad_request() {
    let (app, store) = make_test_app();

    let response = app.oneshot(empty_request("POST", UPLOAD)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "No file uploaded");
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn garbage_file_is_a_bad_request() {
    let (app, store) = make_test_app();

    let response = app
        .oneshot(multipart_request(
            UPLOAD,
            "excel",
            &[0xff, 0xfe, 0x00, 0x9f, 0x80, 0x81],
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.operation_count(), 0);
}

#[tokio::test]
async fn csv_upload_is_imported() {
    let (app, store) = make_test_app();
    seed_existing(&store);

    let response = app
        .oneshot(multipart_request(
            UPLOAD,
            "excel",
            b"name,course\nAlice,Math\nBob,Physics\n",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["insertedCount"], 2);

    let stored = store.documents(Collection::Students);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].get_str("name").unwrap(), "Alice");
}

#[tokio::test]
async fn list_students_returns_bare_array() {
    let (app, store) = make_test_app();
    seed_existing(&store);

    let response = app.oneshot(empty_request("GET", "/api/students")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Old Student");
}

#[tokio::test]
async fn list_students_reports_store_failure() {
    let (app, store) = make_test_app();
    store.set_unavailable(true);

    let response = app.oneshot(empty_request("GET", "/api/students")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["status"], "error");
}
