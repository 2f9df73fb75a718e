use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the chess.com client, the player directory and the API handlers
#[derive(Error, Debug)]
pub enum GlanceError {
    #[error("Player not found: {0}")]
    NotFound(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Unknown title: {0:?}")]
    InvalidTitle(String),

    #[error("Invalid request parameter: {0}")]
    InvalidParameter(String),

    #[error("chess.com API returned status {status} for {url}")]
    Upstream { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl GlanceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GlanceError::NotFound(_) => StatusCode::NOT_FOUND,
            GlanceError::InvalidUsername(_)
            | GlanceError::InvalidTitle(_)
            | GlanceError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            GlanceError::Upstream { .. } | GlanceError::Http(_) | GlanceError::Json(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for GlanceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Context line for a failed fetch
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}
