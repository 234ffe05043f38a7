//! Draft variation matrix
//!
//! Rows are the cartesian product of selected colors × selected values, in
//! (color index, value index) order. Reconciliation keeps rows whose key is
//! still selected exactly as the user left them and seeds new ones from the
//! default pricing.

use super::VariationRow;
use super::aggregate::{self, VariationSummary};
use super::selection::SelectionStore;
use super::sku;
use crate::money;
use shared::models::{AttributeValue, ColorOption, VariationPayload};
use shared::types::{AttributeId, ColorId, ProductId};
use std::collections::HashMap;
use std::fmt;

/// Composite row key, unique within a matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatrixKey {
    pub color_id: ColorId,
    pub value: String,
}

impl MatrixKey {
    pub fn new(color_id: ColorId, value: impl Into<String>) -> Self {
        Self {
            color_id,
            value: value.into(),
        }
    }
}

impl fmt::Display for MatrixKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.color_id, self.value)
    }
}

/// Pricing used to seed newly created rows
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefaultPricing {
    pub buying_price: f64,
    pub selling_price: f64,
    pub discount: f64,
}

/// One draft cell of the matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
    pub key: MatrixKey,
    pub buying_price: f64,
    pub selling_price: f64,
    /// Discount percentage (0-100)
    pub discount: f64,
    pub stock: i64,
    pub available: bool,
}

impl MatrixRow {
    /// Fresh row: default prices, no stock, available
    pub fn seeded(key: MatrixKey, defaults: &DefaultPricing) -> Self {
        Self {
            key,
            buying_price: defaults.buying_price,
            selling_price: defaults.selling_price,
            discount: money::clamp_discount(defaults.discount),
            stock: 0,
            available: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.key.value
    }

    /// Price before discount
    pub fn old_price(&self) -> f64 {
        self.selling_price
    }

    /// Price after discount
    pub fn new_price(&self) -> f64 {
        money::discounted_price(self.selling_price, self.discount)
    }
}

impl VariationRow for MatrixRow {
    fn color_id(&self) -> ColorId {
        self.key.color_id
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

/// Result of one reconciliation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub rows: Vec<MatrixRow>,
    /// False when the key sequence was identical and `rows` is the previous vector
    pub changed: bool,
    /// Keys that left the selection; their edits are gone
    pub dropped: Vec<MatrixKey>,
}

/// Keys of the cartesian product in (color index, value index) order
fn selected_keys(selection: &SelectionStore) -> Vec<MatrixKey> {
    selection
        .colors()
        .iter()
        .flat_map(|&color_id| {
            selection
                .values()
                .iter()
                .map(move |value| MatrixKey::new(color_id, value.clone()))
        })
        .collect()
}

/// Compute the next row list from the selection and the previous rows
///
/// Rows whose key survives are moved over untouched; new keys get a seeded
/// row; everything else is dropped. When the key sequence is unchanged the
/// previous vector is returned as-is.
pub fn reconcile(
    selection: &SelectionStore,
    previous: Vec<MatrixRow>,
    defaults: &DefaultPricing,
) -> Reconciled {
    let keys = selected_keys(selection);

    if keys.len() == previous.len() && keys.iter().zip(&previous).all(|(k, row)| *k == row.key) {
        return Reconciled {
            rows: previous,
            changed: false,
            dropped: Vec::new(),
        };
    }

    let mut by_key: HashMap<MatrixKey, MatrixRow> = previous
        .into_iter()
        .map(|row| (row.key.clone(), row))
        .collect();

    let rows: Vec<MatrixRow> = keys
        .into_iter()
        .map(|key| match by_key.remove(&key) {
            Some(existing) => existing,
            None => MatrixRow::seeded(key, defaults),
        })
        .collect();

    let mut dropped: Vec<MatrixKey> = by_key.into_keys().collect();
    dropped.sort_by(|a, b| (a.color_id, &a.value).cmp(&(b.color_id, &b.value)));

    Reconciled {
        rows,
        changed: true,
        dropped,
    }
}

/// Rows of one color, for row-span rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ColorGroup<'a, R> {
    pub color_id: ColorId,
    pub rows: Vec<&'a R>,
}

impl<R> ColorGroup<'_, R> {
    pub fn row_span(&self) -> usize {
        self.rows.len()
    }
}

/// Group rows by color, groups ordered by first appearance
///
/// Matrix rows are already contiguous per color; persisted rows from the
/// backend need not be.
pub fn group_by_color<R: VariationRow>(rows: &[R]) -> Vec<ColorGroup<'_, R>> {
    let mut groups: Vec<ColorGroup<'_, R>> = Vec::new();
    for row in rows {
        let color_id = row.color_id();
        match groups.iter().position(|g| g.color_id == color_id) {
            Some(idx) => groups[idx].rows.push(row),
            None => groups.push(ColorGroup {
                color_id,
                rows: vec![row],
            }),
        }
    }
    groups
}

/// Draft matrix used while creating a product
///
/// Owns the selection and re-runs [`reconcile`] synchronously after every
/// selection mutation.
#[derive(Debug, Clone, Default)]
pub struct VariantMatrix {
    selection: SelectionStore,
    rows: Vec<MatrixRow>,
    defaults: DefaultPricing,
}

impl VariantMatrix {
    pub fn new(defaults: DefaultPricing) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    pub fn defaults(&self) -> &DefaultPricing {
        &self.defaults
    }

    /// Change the seed pricing; existing rows keep their values
    pub fn set_defaults(&mut self, defaults: DefaultPricing) {
        self.defaults = defaults;
    }

    pub fn row(&self, key: &MatrixKey) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| &r.key == key)
    }

    // ========== Selection ==========

    pub fn add_color(&mut self, id: ColorId) -> bool {
        let changed = self.selection.add_color(id);
        self.recompute_if(changed)
    }

    pub fn remove_color(&mut self, id: ColorId) -> bool {
        let changed = self.selection.remove_color(id);
        self.recompute_if(changed)
    }

    pub fn toggle_color(&mut self, id: ColorId) -> bool {
        let changed = self.selection.toggle_color(id);
        self.recompute_if(changed)
    }

    pub fn add_value(&mut self, value: impl Into<String>) -> bool {
        let changed = self.selection.add_value(value);
        self.recompute_if(changed)
    }

    pub fn remove_value(&mut self, value: &str) -> bool {
        let changed = self.selection.remove_value(value);
        self.recompute_if(changed)
    }

    pub fn toggle_value(&mut self, value: impl Into<String>) -> bool {
        let changed = self.selection.toggle_value(value);
        self.recompute_if(changed)
    }

    pub fn set_active_attribute(
        &mut self,
        attribute_id: AttributeId,
        domain: &[AttributeValue],
    ) -> bool {
        let changed = self.selection.set_active_attribute(attribute_id, domain);
        self.recompute_if(changed)
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.selection.clear();
        self.recompute_if(changed)
    }

    fn recompute_if(&mut self, selection_changed: bool) -> bool {
        if selection_changed {
            self.recompute();
        }
        selection_changed
    }

    /// Rebuild rows from the current selection. Returns the dropped keys.
    pub fn recompute(&mut self) -> Vec<MatrixKey> {
        let previous = std::mem::take(&mut self.rows);
        let result = reconcile(&self.selection, previous, &self.defaults);
        self.rows = result.rows;

        if result.changed {
            tracing::debug!(
                rows = self.rows.len(),
                dropped = result.dropped.len(),
                "Variation matrix reconciled"
            );
        }
        result.dropped
    }

    // ========== Row edits ==========

    fn update(&mut self, key: &MatrixKey, f: impl FnOnce(&mut MatrixRow)) -> bool {
        match self.rows.iter_mut().find(|r| &r.key == key) {
            Some(row) => {
                f(row);
                true
            }
            None => false,
        }
    }

    /// Negative input is clipped to 0
    pub fn set_stock(&mut self, key: &MatrixKey, stock: i64) -> bool {
        self.update(key, |row| row.stock = stock.max(0))
    }

    pub fn set_buying_price(&mut self, key: &MatrixKey, price: f64) -> bool {
        self.update(key, |row| row.buying_price = price)
    }

    pub fn set_selling_price(&mut self, key: &MatrixKey, price: f64) -> bool {
        self.update(key, |row| row.selling_price = price)
    }

    pub fn set_discount(&mut self, key: &MatrixKey, discount: f64) -> bool {
        self.update(key, |row| row.discount = money::clamp_discount(discount))
    }

    /// Zero the stock and mark the row unavailable, without confirmation
    pub fn disable(&mut self, key: &MatrixKey) -> bool {
        self.update(key, |row| {
            row.stock = 0;
            row.available = false;
        })
    }

    pub fn enable(&mut self, key: &MatrixKey) -> bool {
        self.update(key, |row| row.available = true)
    }

    // ========== Views ==========

    pub fn groups(&self) -> Vec<ColorGroup<'_, MatrixRow>> {
        group_by_color(&self.rows)
    }

    pub fn summary(&self) -> VariationSummary {
        aggregate::summarize(&self.rows)
    }

    /// Create payloads for every available row
    ///
    /// `domain` is the active attribute's values and maps each row value to
    /// its backend variant; rows whose value has no variant are skipped. SKUs
    /// are generated from the product name, color name and value label.
    pub fn to_payloads(
        &self,
        product_id: ProductId,
        product_name: &str,
        colors: &[ColorOption],
        domain: &[AttributeValue],
    ) -> Vec<(MatrixKey, VariationPayload)> {
        self.rows
            .iter()
            .filter(|row| row.available)
            .filter_map(|row| {
                let Some(value) = domain.iter().find(|v| v.value == row.key.value) else {
                    tracing::warn!(key = %row.key, "No variant for matrix value, skipping row");
                    return None;
                };
                let color_name = colors
                    .iter()
                    .find(|c| c.id == row.key.color_id)
                    .map(|c| c.name.as_str())
                    .unwrap_or_default();

                let payload = VariationPayload {
                    product_id,
                    color_id: row.key.color_id,
                    variant_id: value.variant_id,
                    buying_price: row.buying_price,
                    selling_price: row.selling_price,
                    discount: row.discount,
                    stock: row.stock,
                    sku: sku::generate(&[product_name, color_name, value.display_label()]),
                };
                Some((row.key.clone(), payload))
            })
            .collect()
    }
}
