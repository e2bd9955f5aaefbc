use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use db::json::document_to_json;
use serde_json::Value;
use services::normalizer::{self, RecordKind};
use tracing::info;

/// POST /api/messages
///
/// ### Request Body
/// ```json
/// { "name": "Alice", "timestamp": "2024-01-01T00:00:00Z", "device": "gate-1" }
/// ```
///
/// `status` defaults to `"Hadir"`. `savedAt`, `lastUpdated` and `createdAt`
/// are set to the write time, overwriting whatever the caller sent. Other
/// fields pass through untouched.
///
/// ### Response: 201 Created
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "device": "gate-1",
///     "name": "Alice",
///     "timestamp": "2024-01-01T00:00:00Z",
///     "status": "Hadir",
///     "savedAt": "...",
///     "lastUpdated": "...",
///     "createdAt": "..."
///   },
///   "message": "Data berhasil disimpan"
/// }
/// ```
///
/// ### Errors
/// - 400: missing `name` or `timestamp`
/// - 500: `Gagal menyimpan data ke database: ...`
pub async fn save_message(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), ApiError> {
    let Json(payload) = body?;
    let record = normalizer::normalize(RecordKind::Message, &payload, Utc::now())?;
    let document = record.to_document();

    let result = state
        .store()
        .insert_one(record.collection(), document.clone())
        .await
        .map_err(|e| ApiError::store("Gagal menyimpan data ke database", e))?;

    info!(inserted_id = ?result.inserted_id(), "message saved");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(document_to_json(&document)).with_message("Data berhasil disimpan")),
    ))
}
