//! Error types for the movies API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging.

use thiserror::Error;

use crate::http::TransportError;

/// Errors returned by `MovieApi` parse methods and `MovieListClient`
/// operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or no response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    /// The server returned 404; the requested movie does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// Coarse failure classes. Both are handled the same way (logged, no retry),
/// but hosts may want to word them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Nothing usable came back: the request was never sent, or the reply
    /// could not be read.
    NetworkFailure,
    /// A response arrived with a failure status.
    ServerRejection,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::NotFound | ApiError::HttpError { .. } => FailureKind::ServerRejection,
            ApiError::Transport(_)
            | ApiError::DeserializationError(_)
            | ApiError::SerializationError(_) => FailureKind::NetworkFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_are_server_rejections() {
        assert_eq!(ApiError::NotFound.kind(), FailureKind::ServerRejection);
        let err = ApiError::HttpError {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.kind(), FailureKind::ServerRejection);
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn transport_and_parse_failures_are_network_failures() {
        let err: ApiError = TransportError("connection refused".to_string()).into();
        assert_eq!(err.kind(), FailureKind::NetworkFailure);
        assert_eq!(err.to_string(), "request failed: connection refused");
        assert_eq!(
            ApiError::DeserializationError("eof".to_string()).kind(),
            FailureKind::NetworkFailure
        );
    }
}
