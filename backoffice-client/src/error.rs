//! Client error types

use shared::error::{AppError, ErrorCode, extract_message};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; the raw body is kept for message extraction
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::NotFound(_) => Some(404),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw error body, if the backend sent one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::NotFound(body) => Some(body),
            _ => None,
        }
    }

    /// Convert into a user-facing [`AppError`]
    ///
    /// The body goes through the decoder chain; when nothing usable comes out
    /// the error is `Unknown` and carries `fallback`'s fixed message.
    /// Code describing a failure that never produced an error body
    pub fn transport_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Http(_) => Some(ErrorCode::NetworkError),
            Self::Serialization(_) | Self::InvalidResponse(_) => Some(ErrorCode::InvalidResponse),
            _ => None,
        }
    }

    /// Convert into the shared taxonomy, `fallback` naming the failed operation
    ///
    /// A usable message in the body makes an Api error carrying that message.
    /// Transport and decode failures are Api errors with the fallback message.
    /// Anything else is Unknown with the fallback message.
    pub fn to_app_error(&self, fallback: ErrorCode) -> AppError {
        let extracted = match self {
            Self::Unauthorized => Some("Authentication required".to_string()),
            _ => self.body().and_then(extract_message),
        };

        let err = match (extracted, self.transport_code()) {
            (Some(message), _) => AppError::api(fallback, message),
            (None, Some(code)) => AppError::api(fallback, fallback.message())
                .with_detail("error_code", code.code())
                .with_detail("cause", self.to_string()),
            (None, None) => AppError::unknown(fallback).with_detail("cause", self.to_string()),
        };
        match self.status() {
            Some(status) => err.with_detail("status", status),
            None => err,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
