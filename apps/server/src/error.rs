//! Error types for the search service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid provider credentials/endpoint. Raised at startup,
    /// never per-request.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Remote-side failure reported by the search index.
    #[error("Search provider error: {0}")]
    Provider(String),

    /// Transport failure talking to the search index.
    #[error("Search provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The index returned documents that no longer match the expected shape.
    #[error("Result mapping error: {0}")]
    Mapping(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Stable machine-readable code, distinguishing caller-fixable faults
    /// from transient provider faults.
    fn code(&self) -> &'static str {
        match self {
            Error::Validation(_) => "invalid-request",
            Error::NotFound(_) => "not-found",
            Error::Provider(_) | Error::Http(_) => "provider-unavailable",
            Error::Mapping(_) => "mapping-failed",
            Error::Config(_) | Error::Database(_) | Error::Other(_) => "internal",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // Transient: the caller may retry later. The full cause is logged
            // server-side only.
            Error::Provider(_) | Error::Http(_) => {
                tracing::error!("Search provider failure: {}", self);
                (
                    StatusCode::BAD_GATEWAY,
                    "Search provider is unavailable".to_string(),
                )
            }
            Error::Mapping(_) => {
                tracing::error!("Index schema drift: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            Error::Config(_) | Error::Database(_) | Error::Other(_) => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
