//! Product Variation Model

use crate::types::{ColorId, ProductId, VariantId, VariationId};
use serde::{Deserialize, Serialize};

/// Variation status as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationStatus {
    #[default]
    Active,
    Inactive,
}

/// Persisted variation entity (a color × variant cell with its own price and stock)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedVariation {
    pub id: VariationId,
    pub product_id: ProductId,
    pub color_id: ColorId,
    pub variant_id: VariantId,
    /// Buying price in currency unit
    #[serde(default)]
    pub buying_price: f64,
    /// Selling price in currency unit, must be > 0 for an active row
    pub selling_price: f64,
    /// Discount percentage (0-100)
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub status: VariationStatus,
}

impl PersistedVariation {
    pub fn is_active(&self) -> bool {
        self.status == VariationStatus::Active
    }
}

/// Create / update variation payload
///
/// `PUT` replaces every business field, so update uses the same shape as create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationPayload {
    pub product_id: ProductId,
    pub color_id: ColorId,
    pub variant_id: VariantId,
    pub buying_price: f64,
    pub selling_price: f64,
    pub discount: f64,
    pub stock: i64,
    pub sku: String,
}

impl From<&PersistedVariation> for VariationPayload {
    fn from(v: &PersistedVariation) -> Self {
        Self {
            product_id: v.product_id,
            color_id: v.color_id,
            variant_id: v.variant_id,
            buying_price: v.buying_price,
            selling_price: v.selling_price,
            discount: v.discount,
            stock: v.stock,
            sku: v.sku.clone(),
        }
    }
}
