//! Attribute Model

use crate::types::{AttributeId, VariantId};
use serde::{Deserialize, Serialize};

/// Attribute entity (a named axis of variation, e.g. "Size")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: AttributeId,
    pub name: String,
}

/// One valid value of an attribute
///
/// `value` is the key used inside the variation matrix; `variant_id` is the
/// backend variant record the value maps to once a row is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AttributeValueWire")]
pub struct AttributeValue {
    pub attribute_id: AttributeId,
    pub value: String,
    pub variant_id: VariantId,
    pub label: String,
}

/// Accepted input shapes: `{attribute_id, value, variant_id, label}` or the
/// bare `{id, name}` record, where the name doubles as the value
#[derive(Deserialize)]
struct AttributeValueWire {
    #[serde(default)]
    attribute_id: AttributeId,
    #[serde(default)]
    value: Option<String>,
    #[serde(default, alias = "id")]
    variant_id: VariantId,
    #[serde(default, alias = "name")]
    label: String,
}

impl From<AttributeValueWire> for AttributeValue {
    fn from(wire: AttributeValueWire) -> Self {
        let value = wire
            .value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| wire.label.clone());
        Self {
            attribute_id: wire.attribute_id,
            value,
            variant_id: wire.variant_id,
            label: wire.label,
        }
    }
}

impl AttributeValue {
    pub fn new(
        attribute_id: AttributeId,
        variant_id: VariantId,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            attribute_id,
            value: value.into(),
            variant_id,
            label: label.into(),
        }
    }

    /// Label for display, falling back to the raw value
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.value
        } else {
            &self.label
        }
    }
}
