//! Tagged error classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// How an error came about, independent of its code
///
/// - `Validation`: rejected locally before any network call
/// - `Api`: network/status failure or backend-reported error with a usable message
/// - `Unknown`: nothing usable could be extracted; a fixed fallback message is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Api,
    Unknown,
}

impl ErrorKind {
    /// Default kind for a code when no other information is available
    pub fn for_code(code: ErrorCode) -> Self {
        match code {
            ErrorCode::VariationColorRequired
            | ErrorCode::VariationVariantRequired
            | ErrorCode::VariationPriceInvalid
            | ErrorCode::VariationNotEditing
            | ErrorCode::VariationDeleteNotRequested => Self::Validation,
            ErrorCode::VariationNotFound
            | ErrorCode::NetworkError
            | ErrorCode::InvalidResponse => Self::Api,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Api => "api",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_code() {
        assert_eq!(
            ErrorKind::for_code(ErrorCode::VariationVariantRequired),
            ErrorKind::Validation
        );
        assert_eq!(ErrorKind::for_code(ErrorCode::NetworkError), ErrorKind::Api);
        assert_eq!(
            ErrorKind::for_code(ErrorCode::VariationCreateFailed),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_kind_serialize() {
        let json = serde_json::to_string(&ErrorKind::Validation).unwrap();
        assert_eq!(json, "\"validation\"");
    }
}
