use crate::error::ApiError;

/// Fallback for every route: any method without a handler answers 405.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
