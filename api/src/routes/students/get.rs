use crate::error::ApiError;
use crate::state::AppState;
use axum::{Json, extract::State};
use db::Collection;
use db::json::documents_to_json;
use serde_json::Value;

/// GET /api/students
///
/// Every student in store order, as a bare JSON array.
///
/// ### Errors
/// - 500: store failure
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let students = state.store().find_all(Collection::Students).await?;
    Ok(Json(documents_to_json(&students)))
}
