//! Product variation engine
//!
//! Before a product exists on the server, variations are edited as a draft
//! matrix ([`VariantMatrix`]): selected colors × selected attribute values,
//! reconciled after every selection change. Once the product exists, each
//! persisted variation is edited inline with its own draft ([`EditBook`]) and
//! synchronized row by row ([`VariationSyncService`]).

pub mod aggregate;
pub mod api;
pub mod edit;
pub mod matrix;
pub mod selection;
pub mod sku;
pub mod sync;
pub mod validate;

pub use aggregate::{VariationSummary, low_stock_count, summarize};
pub use api::VariationApi;
pub use edit::{EditBook, EditDraft, RowState};
pub use matrix::{
    ColorGroup, DefaultPricing, MatrixKey, MatrixRow, Reconciled, VariantMatrix, group_by_color,
    reconcile,
};
pub use selection::{OrderedSet, SelectionStore};
pub use sync::{MatrixSubmission, VariationSyncService};

use shared::models::PersistedVariation;
use shared::types::ColorId;

/// Fields shared by draft matrix rows and persisted variations
pub trait VariationRow {
    fn color_id(&self) -> ColorId;
    fn stock(&self) -> i64;
    fn selling_price(&self) -> f64;
    fn discount(&self) -> f64;
}

impl VariationRow for PersistedVariation {
    fn color_id(&self) -> ColorId {
        self.color_id
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn selling_price(&self) -> f64 {
        self.selling_price
    }

    fn discount(&self) -> f64 {
        self.discount
    }
}
