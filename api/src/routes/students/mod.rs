//! # Student Routes Module
//!
//! - `get.rs`: list every student
//! - `post.rs`: replace the whole collection from a spreadsheet upload

use crate::routes::common::method_not_allowed;
use crate::state::AppState;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use get::list_students;
use post::upload_students;

pub mod get;
pub mod post;

/// Upper bound for an uploaded spreadsheet request body.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Builds the `/students` route group.
///
/// - `GET /students` → `list_students`
/// - `POST /students/upload` → `upload_students` (multipart, field `excel`)
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).fallback(method_not_allowed))
        .route(
            "/upload",
            post(upload_students)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
}
