//! # Attendance Routes Module
//!
//! - `get.rs`: list every attendance record
//! - `post.rs`: record one attendance event

use crate::routes::common::method_not_allowed;
use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_attendance;
use post::create_attendance;

pub mod get;
pub mod post;

/// Builds the `/attendance` route group.
///
/// - `GET /attendance` → `list_attendance`
/// - `POST /attendance` → `create_attendance`
pub fn attendance_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_attendance)
            .post(create_attendance)
            .fallback(method_not_allowed),
    )
}
