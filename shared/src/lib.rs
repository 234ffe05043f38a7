//! Shared types for the back-office variation engine
//!
//! Wire models exchanged with the back-office REST API, the error code
//! taxonomy and the error-body decoder chain.

pub mod error;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode, ErrorKind};
pub use response::Envelope;
pub use types::{AttributeId, ColorId, ProductId, VariantId, VariationId};
