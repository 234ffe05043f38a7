//! Product Model

use super::variation::PersistedVariation;
use crate::types::ProductId;
use serde::{Deserialize, Serialize};

/// Product entity as returned by the product fetch, with its nested variations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub variations: Vec<PersistedVariation>,
}

impl Product {
    /// Find a nested variation by id
    pub fn variation(&self, id: i64) -> Option<&PersistedVariation> {
        self.variations.iter().find(|v| v.id == id)
    }
}
