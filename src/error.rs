use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while serving a translation bundle.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// No readable bundle for the requested code (also used for codes that fail validation).
    #[error("Translation not found")]
    NotFound,

    /// The bundle file exists but is not valid JSON.
    #[error("Failed to parse JSON")]
    Malformed(#[source] serde_json::Error),
}

impl TranslationError {
    pub fn status(&self) -> StatusCode {
        match self {
            TranslationError::NotFound => StatusCode::NOT_FOUND,
            TranslationError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for TranslationError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Failures while fetching a bundle from the translation server.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no translation for '{0}'")]
    NotFound(String),

    #[error("translation server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("invalid translation payload: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid server url '{0}'")]
    InvalidUrl(String),
}

impl FetchError {
    /// Only connection-level failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }
}
