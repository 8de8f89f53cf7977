use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mediadock_core::ConfigError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing Content-Length header")]
    MissingContentLength,

    #[error("Invalid Content-Length header: {0}")]
    InvalidContentLength(String),

    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not implemented")]
    MethodNotImplemented,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingContentLength
            | Self::InvalidContentLength(_)
            | Self::Body(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotImplemented => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::RouteNotFound | Self::MethodNotImplemented => self.status().into_response(),
            // Save failures carry their message back to the caller
            _ => (self.status(), Json(json!({"error": self.to_string()}))).into_response(),
        }
    }
}
