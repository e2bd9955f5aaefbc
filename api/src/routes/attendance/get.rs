use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use db::Collection;
use db::json::documents_to_json;
use serde_json::Value;

/// GET /api/attendance
///
/// Every attendance record in store order, as a bare JSON array.
///
/// ### Response: 200 OK
/// ```json
/// [
///   {
///     "_id": "665f1c...",
///     "studentId": "S1",
///     "courseId": "C1",
///     "status": "hadir",
///     "timestamp": "2024-01-01T08:00:00.000Z"
///   }
/// ]
/// ```
///
/// ### Errors
/// - 500: store failure
pub async fn list_attendance(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state.store().find_all(Collection::Attendance).await?;
    Ok(Json(documents_to_json(&records)))
}
