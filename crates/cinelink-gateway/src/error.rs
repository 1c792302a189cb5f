use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cinelink_core::CoreError;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("redirect token not found")]
    NotFound,
    #[error("redirect token expired")]
    Expired,
    #[error("invalid redirect token: {0}")]
    InvalidToken(#[from] CoreError),
    #[error("redirect target cannot be sent as a Location header")]
    InvalidTarget,
}

impl GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::NotFound | GatewayError::InvalidToken(_) => StatusCode::NOT_FOUND,
            GatewayError::Expired => StatusCode::GONE,
            GatewayError::InvalidTarget => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GatewayError::NotFound => "NOT_FOUND",
            GatewayError::Expired => "EXPIRED",
            GatewayError::InvalidToken(_) => "INVALID_TOKEN",
            GatewayError::InvalidTarget => "INVALID_TARGET",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }

        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
