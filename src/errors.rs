use axum::response::IntoResponse;
use http::{HeaderMap, HeaderValue, StatusCode};
use thiserror::Error;

use crate::external::UpstreamError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Upstream error ({status}): {detail}")]
    UpstreamStatus { status: u16, detail: String },
    #[error("Upstream connection error: {0}")]
    UpstreamConnection(String),
    #[error("Rate limit exceeded")]
    RateLimited,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::UpstreamStatus { status, detail } => {
                // The upstream's status is echoed as-is; anything that does
                // not parse as a status code degrades to a bad gateway.
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (code, detail).into_response()
            }
            AppError::UpstreamConnection(msg) => {
                (StatusCode::BAD_GATEWAY, format!("Proxy error: {msg}")).into_response()
            }
            AppError::RateLimited => {
                let mut headers = HeaderMap::new();
                headers.insert("Retry-After", HeaderValue::from_static("60"));
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    headers,
                    "Rate limit exceeded: 5 per minute",
                )
                    .into_response()
            }
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(value: UpstreamError) -> Self {
        match value {
            UpstreamError::Status { status, detail } => {
                AppError::UpstreamStatus { status, detail }
            }
            UpstreamError::Connection(msg) => AppError::UpstreamConnection(msg),
            UpstreamError::Parse(msg) => AppError::UpstreamConnection(msg),
        }
    }
}
