//! Data models
//!
//! Shared between the variation engine and the back-office API.
//! All IDs are `i64`; prices travel as JSON numbers (`f64`).

pub mod attribute;
pub mod color;
pub mod product;
pub mod variation;

// Re-exports
pub use attribute::*;
pub use color::*;
pub use product::*;
pub use variation::*;
