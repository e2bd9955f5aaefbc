//! HTTP surface of the attendance backend.

pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

use axum::{
    Router,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    middleware::from_fn,
};
use state::AppState;
use tower_http::cors::CorsLayer;

/// Builds the complete application: every route under `/api`, request
/// logging, and permissive CORS for the devices and dashboard.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_DISPOSITION, CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(middleware::log_request))
        .layer(cors)
}
