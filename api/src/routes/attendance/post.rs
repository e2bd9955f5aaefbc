use crate::error::ApiError;
use crate::response::InsertAck;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde_json::Value;
use services::normalizer::{self, RecordKind};
use tracing::info;

/// POST /api/attendance
///
/// ### Request Body
/// ```json
/// { "studentId": "S1", "courseId": "C1", "status": "hadir" }
/// ```
///
/// `status` also accepts `present` / `absent` (any case). Whatever spelling is
/// posted, the record is stored with the canonical value, so `present` reads
/// back as `hadir` and `absent` as `tidak hadir` from `GET /api/attendance`.
/// The timestamp is always the server's write time.
///
/// ### Response: 201 Created
/// ```json
/// { "acknowledged": true, "insertedId": "665f1c..." }
/// ```
///
/// ### Errors
/// - 400: missing `studentId`, `courseId` or `status`, or an unknown status
/// - 500: store failure
pub async fn create_attendance(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<InsertAck>), ApiError> {
    let Json(payload) = body?;
    let record = normalizer::normalize(RecordKind::Attendance, &payload, Utc::now())?;

    let result = state
        .store()
        .insert_one(record.collection(), record.to_document())
        .await?;

    info!(inserted_id = ?result.inserted_id(), "attendance recorded");

    Ok((StatusCode::CREATED, Json(InsertAck::from(&result))))
}
