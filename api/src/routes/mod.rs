//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Health check endpoint
//! - `/attendance` → Record and list attendance events
//! - `/messages` → Device check-in messages, newest first
//! - `/students` → Student listing and spreadsheet import
//!
//! Every route answers an unsupported method with `405` before any store call.

use crate::routes::{
    attendance::attendance_routes, health::health_routes, messages::message_routes,
    students::student_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod attendance;
pub mod common;
pub mod health;
pub mod messages;
pub mod students;

/// Builds the complete application router for all HTTP endpoints.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/attendance", attendance_routes())
        .nest("/messages", message_routes())
        .nest("/students", student_routes())
        .with_state(app_state)
}
