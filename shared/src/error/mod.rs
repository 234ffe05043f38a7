//! Error system for the variation engine
//!
//! - [`ErrorCode`]: standardized numeric codes
//! - [`ErrorKind`]: tagged classification (validation / api / unknown)
//! - [`AppError`]: code + kind + message + optional details
//! - [`extract_message`]: ordered decoder chain over backend error bodies
//!
//! # Error Code Ranges
//!
//! - 6xxx: Product / variation errors
//! - 9xxx: System and transport errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ErrorKind};
//!
//! let err = AppError::validation(ErrorCode::VariationVariantRequired);
//! assert_eq!(err.kind, ErrorKind::Validation);
//! assert_eq!(err.message, "Variant required");
//! ```

mod codes;
mod extract;
mod kind;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use extract::{DECODERS, Decoder, extract_from_value, extract_message};
pub use kind::ErrorKind;
pub use types::{AppError, AppResult};
