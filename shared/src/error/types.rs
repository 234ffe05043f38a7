//! Error type

use super::codes::ErrorCode;
use super::kind::ErrorKind;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with code, kind and a user-facing message
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the failure
    pub code: ErrorCode,
    /// Where the failure came from
    pub kind: ErrorKind,
    /// Human-readable message, safe to show to the user
    pub message: String,
    /// Optional additional details (status, field, ids)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message and kind for the code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            kind: ErrorKind::for_code(code),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::for_code(code),
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Local validation failure, never sent to the network
    pub fn validation(code: ErrorCode) -> Self {
        Self {
            kind: ErrorKind::Validation,
            ..Self::new(code)
        }
    }

    /// Backend or transport failure carrying an extracted message
    pub fn api(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Api,
            ..Self::with_message(code, message)
        }
    }

    /// Failure with nothing extractable: the code's fixed message is used
    pub fn unknown(code: ErrorCode) -> Self {
        Self {
            kind: ErrorKind::Unknown,
            ..Self::new(code)
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }
}

/// Result alias
pub type AppResult<T> = Result<T, AppError>;
