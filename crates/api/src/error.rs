use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vidlens_analysis::AnalysisError;
use vidlens_services::{CatalogError, MediaError, SttError, ThumbnailError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// The request was well-formed but its content cannot be analyzed,
    /// e.g. an upload that transcribes to nothing.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
    /// An external collaborator (media retrieval, speech-to-text, catalog,
    /// generation provider) failed before or outside the analysis core.
    #[error("Upstream failure: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", msg)
            }
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptyTranscript => ApiError::Unprocessable(err.to_string()),
        }
    }
}

impl From<SttError> for ApiError {
    fn from(err: SttError) -> Self {
        ApiError::Upstream(format!("The source could not be processed: {err}"))
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::InvalidUrl => ApiError::BadRequest("Invalid video URL".to_string()),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownCategory(_) => ApiError::BadRequest(err.to_string()),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<ThumbnailError> for ApiError {
    fn from(err: ThumbnailError) -> Self {
        match err {
            ThumbnailError::ContentPolicy => ApiError::BadRequest(err.to_string()),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
