use crate::error::ApiError;
use crate::response::{ApiResponse, BulkInsertAck};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartRejection},
};
use chrono::Utc;
use services::ImportError;
use services::importer::import_students;

/// Multipart field that carries the spreadsheet.
pub const UPLOAD_FIELD: &str = "excel";

/// POST /api/students/upload
///
/// Replaces every student with the rows of the uploaded spreadsheet.
///
/// ### Request (multipart/form-data)
/// - `excel` (required): `.xlsx`, `.xls` or `.ods` file. The first sheet's
///   first row is the header and must name `name` and `course` columns.
///
/// Only the first data row is checked for both columns. The existing
/// collection is deleted before the new rows are inserted, so a failed
/// insert leaves it empty.
///
/// ### Response: 200 OK
/// ```json
/// {
///   "status": "success",
///   "data": {
///     "acknowledged": true,
///     "insertedCount": 2,
///     "insertedIds": ["665f1c...", "665f1d..."]
///   }
/// }
/// ```
///
/// ### Errors
/// - 400: `No file uploaded`, unreadable file, or missing columns
/// - 500: store failure
pub async fn upload_students(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<BulkInsertAck>>, ApiError> {
    let mut multipart = multipart?;
    let upload = read_upload(&mut multipart).await?;

    let summary = import_students(state.store(), upload.as_deref(), Utc::now()).await?;

    Ok(Json(ApiResponse::success(BulkInsertAck::from(&summary.insert))))
}

/// Bytes of the first `excel` field, if the form has one.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Vec<u8>>, ImportError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ImportError::UnparseableFile(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ImportError::UnparseableFile(e.body_text()))?;
        return Ok(Some(bytes.to_vec()));
    }
    Ok(None)
}
