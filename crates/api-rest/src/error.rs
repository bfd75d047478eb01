//! Mapping of handler failures to HTTP responses.
//!
//! Only two outcomes reach clients: "not found" and a generic upload failure. Detail from the
//! underlying multipart error is logged and never returned.

use api_shared::messages::{FILE_NOT_FOUND, MISSING_FILE_FIELD, UPLOAD_FAILED};
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Unknown identifier on delete or metadata lookup.
    #[error("file not found")]
    NotFound,

    /// Unknown identifier on download. Answered with an empty body.
    #[error("file not found for download")]
    DownloadNotFound,

    #[error("upload has no `file` field")]
    MissingFileField,

    #[error("failed to read upload: {0}")]
    UploadRead(#[from] MultipartError),

    #[error("upload is not a readable multipart body: {0}")]
    UploadRejected(#[from] MultipartRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, FILE_NOT_FOUND).into_response(),
            ApiError::DownloadNotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::MissingFileField => {
                tracing::warn!("{}", self);
                (StatusCode::BAD_REQUEST, MISSING_FILE_FIELD).into_response()
            }
            ApiError::UploadRead(_) | ApiError::UploadRejected(_) => {
                tracing::error!("Upload error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, UPLOAD_FAILED).into_response()
            }
        }
    }
}
