//! Error codes for the variation engine
//!
//! Error codes are organized by range:
//! - 6xxx: Product / variation errors
//! - 9xxx: System and transport errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code enum
///
/// Represented as `u16` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 6xxx: Product / Variation ====================
    /// Product refresh after a mutation failed
    ProductRefreshFailed = 6002,
    /// Variation not found
    VariationNotFound = 6101,
    /// Color not selected
    VariationColorRequired = 6102,
    /// Variant not selected
    VariationVariantRequired = 6103,
    /// Selling price missing or not positive
    VariationPriceInvalid = 6104,
    /// Create call failed
    VariationCreateFailed = 6105,
    /// Update call failed
    VariationUpdateFailed = 6106,
    /// Delete call failed
    VariationDeleteFailed = 6107,
    /// Row is not in editing state
    VariationNotEditing = 6108,
    /// No delete is awaiting confirmation
    VariationDeleteNotRequested = 6109,
    /// Lookup data could not be loaded
    LookupFailed = 6201,

    // ==================== 9xxx: System ====================
    /// Network / transport failure
    NetworkError = 9002,
    /// Response body could not be decoded
    InvalidResponse = 9003,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default user-facing message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ProductRefreshFailed => "Failed to refresh product variations",
            ErrorCode::VariationNotFound => "Variation not found",
            ErrorCode::VariationColorRequired => "Color required",
            ErrorCode::VariationVariantRequired => "Variant required",
            ErrorCode::VariationPriceInvalid => "Selling price must be greater than 0",
            ErrorCode::VariationCreateFailed => "Failed to add variation",
            ErrorCode::VariationUpdateFailed => "Failed to update variation",
            ErrorCode::VariationDeleteFailed => "Failed to delete variation",
            ErrorCode::VariationNotEditing => "Variation is not being edited",
            ErrorCode::VariationDeleteNotRequested => "No variation selected for deletion",
            ErrorCode::LookupFailed => "Failed to load reference data",

            ErrorCode::NetworkError => "Network error",
            ErrorCode::InvalidResponse => "Invalid response",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            6002 => Ok(ErrorCode::ProductRefreshFailed),
            6101 => Ok(ErrorCode::VariationNotFound),
            6102 => Ok(ErrorCode::VariationColorRequired),
            6103 => Ok(ErrorCode::VariationVariantRequired),
            6104 => Ok(ErrorCode::VariationPriceInvalid),
            6105 => Ok(ErrorCode::VariationCreateFailed),
            6106 => Ok(ErrorCode::VariationUpdateFailed),
            6107 => Ok(ErrorCode::VariationDeleteFailed),
            6108 => Ok(ErrorCode::VariationNotEditing),
            6109 => Ok(ErrorCode::VariationDeleteNotRequested),
            6201 => Ok(ErrorCode::LookupFailed),

            9002 => Ok(ErrorCode::NetworkError),
            9003 => Ok(ErrorCode::InvalidResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
