use axum::{
    Json,
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Errors surfaced to HTTP callers. Upstream failures never end up here;
/// the generator absorbs them.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No image uploaded")]
    MissingImage,
    #[error("Unsupported file type")]
    UnsupportedFileType,
    #[error("Image is larger than {max_bytes} bytes")]
    ImageTooLarge { max_bytes: usize },
    #[error("{}", .0.body_text())]
    InvalidForm(#[from] MultipartRejection),
    #[error("{}", .0.body_text())]
    Multipart(#[from] MultipartError),
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingImage | AppError::UnsupportedFileType => StatusCode::BAD_REQUEST,
            AppError::ImageTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidForm(err) => err.status(),
            AppError::Multipart(err) => err.status(),
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub fn json_error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        json_error(self.status(), &self.to_string())
    }
}
