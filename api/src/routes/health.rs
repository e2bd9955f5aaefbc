use crate::response::ApiResponse;
use crate::routes::common::method_not_allowed;
use axum::{Json, Router, response::IntoResponse, routing::get};
use crate::state::AppState;

/// Builds the `/health` route group.
///
/// A single `GET /health` endpoint that never touches the store, for
/// uptime checks and load balancer probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check).fallback(method_not_allowed))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "status": "success",
///   "message": "Health check passed"
/// }
/// ```
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::<()>::message("Health check passed"))
}
