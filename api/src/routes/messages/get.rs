use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use db::json::documents_to_json;
use db::{Collection, SortKey};
use serde_json::Value;

/// GET /api/messages
///
/// Every message, newest `savedAt` first.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "status": "success",
///   "data": [ { "name": "Alice", "status": "Hadir", "savedAt": "..." } ],
///   "count": 1
/// }
/// ```
///
/// ### Errors
/// - 500: `Gagal mengambil data dari database: ...`
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let messages = state
        .store()
        .find_sorted(Collection::Messages, &[SortKey::descending("savedAt")])
        .await
        .map_err(|e| ApiError::store("Gagal mengambil data dari database", e))?;

    let count = messages.len();
    Ok(Json(
        ApiResponse::success(documents_to_json(&messages)).with_count(count),
    ))
}
