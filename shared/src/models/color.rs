//! Color Model

use crate::types::ColorId;
use serde::{Deserialize, Serialize};

/// Color option (reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: ColorId,
    pub name: String,
    /// Display swatch, e.g. "#FF0000"
    #[serde(default, alias = "code")]
    pub hex: String,
}

impl ColorOption {
    pub fn new(id: ColorId, name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hex: hex.into(),
        }
    }
}
