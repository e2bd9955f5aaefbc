use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::StoreError;
use services::{ImportError, ValidationError};
use thiserror::Error;

pub const SERVER_ERROR: &str = "Terjadi kesalahan server";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", describe_validation(.0))]
    Validation(#[from] ValidationError),

    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        source: StoreError,
    },

    #[error("Method tidak diizinkan")]
    MethodNotAllowed,

    #[error(transparent)]
    Import(#[from] ImportError),
}

fn describe_validation(err: &ValidationError) -> String {
    match err {
        ValidationError::MissingField(field) => format!("Data tidak lengkap: {field} wajib diisi"),
        ValidationError::InvalidField { field, reason } => {
            format!("Data tidak valid: {field} ({reason})")
        }
    }
}

impl ApiError {
    pub fn store(context: &'static str, source: StoreError) -> Self {
        ApiError::Store { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Import(ImportError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Import(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(source: StoreError) -> Self {
        ApiError::store(SERVER_ERROR, source)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::invalid("body", rejection.body_text()))
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(_: MultipartRejection) -> Self {
        ApiError::Import(ImportError::NoFileUploaded)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ApiResponse::<()>::error(self.to_string()))).into_response()
    }
}
