//! Error types for the parser API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request carried no usable upload.
    #[error("{0}")]
    MissingInput(&'static str),

    /// The multipart body could not be decoded. User-correctable, so
    /// it maps to 400 rather than a processing failure.
    #[error("{0}")]
    Multipart(String),

    /// The engine failed to open or extract a document. `details`
    /// carries the diagnostic trace on the single-document path and
    /// is absent on the batch path.
    #[error("{message}")]
    Extraction {
        message: String,
        details: Option<String>,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingInput(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Multipart(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Extraction { message, details } => {
                tracing::error!("Extraction failed: {}", message);
                let body = match details {
                    Some(details) => {
                        json!({ "ok": false, "error": message, "details": details })
                    }
                    None => json!({ "ok": false, "error": message }),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
