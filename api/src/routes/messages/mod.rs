//! # Message Routes Module
//!
//! Messages are the loosely typed check-ins sent by attendance devices.
//! The canonical fields are `name`, `timestamp` and `status`. Anything else
//! the device sends is stored as-is.

use crate::routes::common::method_not_allowed;
use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_messages;
use post::save_message;

pub mod get;
pub mod post;

/// Builds the `/messages` route group.
///
/// - `GET /messages` → `list_messages`
/// - `POST /messages` → `save_message`
pub fn message_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(list_messages)
            .post(save_message)
            .fallback(method_not_allowed),
    )
}
