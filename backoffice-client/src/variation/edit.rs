//! Per-row inline edit state
//!
//! Each persisted row is either Viewing or Editing. Editing rows own an
//! independent draft; any number of rows may be editing at once.

use shared::models::{PersistedVariation, VariationPayload};
use shared::types::{ColorId, ProductId, UNSET_ID, VariantId, VariationId};
use std::collections::HashMap;

/// Editable copy of a variation's business fields
///
/// Also used as the "add variation" form, where it starts from [`Default`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditDraft {
    pub color_id: ColorId,
    pub variant_id: VariantId,
    pub buying_price: f64,
    pub selling_price: f64,
    pub discount: f64,
    pub stock: i64,
    pub sku: String,
}

impl EditDraft {
    /// Negative input is clipped to 0
    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock.max(0);
    }

    pub fn has_color(&self) -> bool {
        self.color_id != UNSET_ID
    }

    pub fn has_variant(&self) -> bool {
        self.variant_id != UNSET_ID
    }

    pub fn to_payload(&self, product_id: ProductId) -> VariationPayload {
        VariationPayload {
            product_id,
            color_id: self.color_id,
            variant_id: self.variant_id,
            buying_price: self.buying_price,
            selling_price: self.selling_price,
            discount: self.discount,
            stock: self.stock,
            sku: self.sku.trim().to_string(),
        }
    }
}

impl From<&PersistedVariation> for EditDraft {
    fn from(v: &PersistedVariation) -> Self {
        Self {
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

/// State of one persisted row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowState<'a> {
    Viewing,
    Editing(&'a EditDraft),
}

impl RowState<'_> {
    pub fn is_editing(&self) -> bool {
        matches!(self, RowState::Editing(_))
    }
}

/// Drafts of every row currently in Editing state, keyed by row id
#[derive(Debug, Clone, Default)]
pub struct EditBook {
    drafts: HashMap<VariationId, EditDraft>,
}

impl EditBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewing → Editing
    ///
    /// Copies the row's server values, or keeps the draft already in progress.
    pub fn begin(&mut self, row: &PersistedVariation) -> &mut EditDraft {
        self.drafts
            .entry(row.id)
            .or_insert_with(|| EditDraft::from(row))
    }

    /// Editing → Viewing, discarding the draft. Returns whether the row was editing.
    pub fn cancel(&mut self, id: VariationId) -> bool {
        self.drafts.remove(&id).is_some()
    }

    /// Editing → Viewing after a successful save
    pub fn finish(&mut self, id: VariationId) -> Option<EditDraft> {
        self.drafts.remove(&id)
    }

    pub fn state(&self, id: VariationId) -> RowState<'_> {
        match self.drafts.get(&id) {
            Some(draft) => RowState::Editing(draft),
            None => RowState::Viewing,
        }
    }

    pub fn is_editing(&self, id: VariationId) -> bool {
        self.drafts.contains_key(&id)
    }

    pub fn draft(&self, id: VariationId) -> Option<&EditDraft> {
        self.drafts.get(&id)
    }

    pub fn draft_mut(&mut self, id: VariationId) -> Option<&mut EditDraft> {
        self.drafts.get_mut(&id)
    }

    /// Ids currently editing, ascending
    pub fn editing_ids(&self) -> Vec<VariationId> {
        let mut ids: Vec<VariationId> = self.drafts.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Drop drafts whose row no longer exists. Returns the pruned ids.
    pub fn retain_rows(&mut self, rows: &[PersistedVariation]) -> Vec<VariationId> {
        let mut pruned = Vec::new();
        self.drafts.retain(|id, _| {
            let keep = rows.iter().any(|r| r.id == *id);
            if !keep {
                pruned.push(*id);
            }
            keep
        });
        pruned.sort_unstable();
        pruned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::VariationStatus;

    fn row(id: VariationId, stock: i64) -> PersistedVariation {
        PersistedVariation {
            id,
            product_id: 1,
            color_id: 2,
            variant_id: 3,
            buying_price: 4.0,
            selling_price: 10.0,
            discount: 0.0,
            stock,
            sku: format!("SKU-{id}"),
            status: VariationStatus::Active,
        }
    }

    #[test]
    fn test_begin_copies_server_values() {
        let mut book = EditBook::new();
        let draft = book.begin(&row(3, 6));
        assert_eq!(draft.stock, 6);
        assert_eq!(draft.sku, "SKU-3");
        assert!(book.is_editing(3));
        assert!(book.state(3).is_editing());
        assert_eq!(book.state(4), RowState::Viewing);
    }

    #[test]
    fn test_reentering_keeps_in_progress_draft() {
        let mut book = EditBook::new();
        book.begin(&row(3, 6)).set_stock(20);
        let draft = book.begin(&row(3, 6));
        assert_eq!(draft.stock, 20);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_drafts_are_independent() {
        let mut book = EditBook::new();
        book.begin(&row(3, 1));
        book.begin(&row(4, 1));
        book.draft_mut(4).unwrap().selling_price = 99.0;

        assert!(book.finish(3).is_some());
        assert!(!book.is_editing(3));
        assert_eq!(book.draft(4).unwrap().selling_price, 99.0);
        assert_eq!(book.editing_ids(), vec![4]);
    }

    #[test]
    fn test_cancel_then_begin_starts_fresh() {
        let mut book = EditBook::new();
        book.begin(&row(5, 2)).set_stock(40);
        assert!(book.cancel(5));
        assert!(!book.cancel(5));
        assert_eq!(book.begin(&row(5, 2)).stock, 2);
    }

    #[test]
    fn test_set_stock_clips_negative() {
        let mut draft = EditDraft::default();
        draft.set_stock(-9);
        assert_eq!(draft.stock, 0);
    }

    #[test]
    fn test_retain_rows_prunes_missing() {
        let mut book = EditBook::new();
        book.begin(&row(1, 0));
        book.begin(&row(7, 0));
        book.begin(&row(9, 0));
        let pruned = book.retain_rows(&[row(1, 0), row(9, 0)]);
        assert_eq!(pruned, vec![7]);
        assert_eq!(book.editing_ids(), vec![1, 9]);
    }

    #[test]
    fn test_to_payload_trims_sku() {
        let draft = EditDraft {
            color_id: 1,
            variant_id: 2,
            sku: "  ABC-1234 ".into(),
            ..Default::default()
        };
        let payload = draft.to_payload(77);
        assert_eq!(payload.product_id, 77);
        assert_eq!(payload.sku, "ABC-1234");
    }
}
