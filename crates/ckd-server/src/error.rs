use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// The request body could not be read as an in-domain patient record.
    Rejected { status: StatusCode, message: String },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Rejected { status, message } => (status, message),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<ckd_core::error::CoreError> for ApiError {
    fn from(e: ckd_core::error::CoreError) -> Self {
        match e {
            ckd_core::error::CoreError::UnknownField(id) => {
                ApiError::NotFound(format!("field not found: {id}"))
            }
            other => ApiError::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: other.to_string(),
            },
        }
    }
}

impl From<ckd_export::error::ExportError> for ApiError {
    fn from(e: ckd_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
