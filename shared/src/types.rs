//! Common identifier types
//!
//! All IDs are `i64` as assigned by the backend. `0` is the wire value for
//! "nothing selected" in form payloads.

/// Color reference id
pub type ColorId = i64;

/// Attribute (variation axis) id
pub type AttributeId = i64;

/// Backend variant record id (one per attribute value)
pub type VariantId = i64;

/// Persisted variation id
pub type VariationId = i64;

/// Product id
pub type ProductId = i64;

/// Placeholder for an unselected id in form payloads
pub const UNSET_ID: i64 = 0;
