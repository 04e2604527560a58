//! HTTP error mapping: every failure surfaces synchronously as a plain
//! message, 400 for bad input, 500 for server-side faults.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use atriarisk_common::AtriaError;

#[derive(Debug)]
pub enum WebError {
    /// Client-side problem: malformed upload, unreadable table, no plots.
    Bad(String),
    /// Server-side fault: template or render failure, I/O.
    Internal(String),
}

impl WebError {
    pub fn bad(msg: impl Into<String>) -> WebError {
        WebError::Bad(msg.into())
    }
}

impl From<AtriaError> for WebError {
    fn from(err: AtriaError) -> WebError {
        match err {
            AtriaError::Io(_)
            | AtriaError::Render(_)
            | AtriaError::Template(_)
            | AtriaError::Other(_) => WebError::Internal(err.to_string()),
            _ => WebError::Bad(err.to_string()),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Bad(msg) => {
                tracing::warn!(%msg, "rejecting request");
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            WebError::Internal(msg) => {
                tracing::error!(%msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}
