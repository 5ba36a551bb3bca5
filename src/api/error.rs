use crate::domain::SscTimeError;
use crate::ssc::{FetchError, NormalizeError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("invalid {parameter}: {source}")]
    InvalidTimeFormat { parameter: &'static str, source: SscTimeError },
    #[error(transparent)]
    UpstreamUnavailable(#[from] FetchError),
    #[error(transparent)]
    ParseFailure(#[from] NormalizeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter(_) | ApiError::InvalidTimeFormat { .. } => StatusCode::BAD_REQUEST,
            ApiError::UpstreamUnavailable(err) => err
                .status()
                .filter(|status| !status.is_success())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::ParseFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to clients. Upstream and parse failures stay generic.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingParameter(_) => "Missing start_time or end_time. Expected format YYYYMMDDTHHMMSSZ.",
            ApiError::InvalidTimeFormat { .. } => "Invalid time format. Expected YYYYMMDDTHHMMSSZ.",
            ApiError::UpstreamUnavailable(_) => "Failed to fetch satellite data.",
            ApiError::ParseFailure(_) => "Unexpected error occurred.",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, "❌ {}", self);
        } else {
            warn!(%status, "⚠️ {}", self);
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
