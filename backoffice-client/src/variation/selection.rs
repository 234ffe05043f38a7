//! Selected colors and attribute values

use shared::models::AttributeValue;
use shared::types::{AttributeId, ColorId};

/// Insertion-ordered set
///
/// Order is selection order, not sort order. Selections are small, so
/// membership is a linear scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`; no-op when already present. Returns whether it was added.
    pub fn insert(&mut self, item: T) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns whether the item was present
    pub fn remove(&mut self, item: &T) -> bool {
        match self.index_of(item) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Add when absent, remove when present. Returns whether it is now selected.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.remove(&item) {
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Keep only matching items. Returns whether anything was dropped.
    pub fn retain(&mut self, f: impl FnMut(&T) -> bool) -> bool {
        let before = self.items.len();
        self.items.retain(f);
        self.items.len() != before
    }

    /// Returns whether anything was cleared
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

/// Current color / attribute-value selection
///
/// Every mutator returns whether the selection changed, so callers only
/// reconcile when needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    colors: OrderedSet<ColorId>,
    values: OrderedSet<String>,
    active_attribute: Option<AttributeId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &[ColorId] {
        self.colors.as_slice()
    }

    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }

    pub fn active_attribute(&self) -> Option<AttributeId> {
        self.active_attribute
    }

    pub fn add_color(&mut self, id: ColorId) -> bool {
        self.colors.insert(id)
    }

    pub fn remove_color(&mut self, id: ColorId) -> bool {
        self.colors.remove(&id)
    }

    pub fn toggle_color(&mut self, id: ColorId) -> bool {
        self.colors.toggle(id);
        true
    }

    pub fn add_value(&mut self, value: impl Into<String>) -> bool {
        self.values.insert(value.into())
    }

    pub fn remove_value(&mut self, value: &str) -> bool {
        self.values.retain(|v| v != value)
    }

    pub fn toggle_value(&mut self, value: impl Into<String>) -> bool {
        self.values.toggle(value.into());
        true
    }

    /// Switch the active attribute
    ///
    /// Selected values not in the new attribute's domain are dropped for good.
    /// Returns whether the selected values changed.
    pub fn set_active_attribute(
        &mut self,
        attribute_id: AttributeId,
        domain: &[AttributeValue],
    ) -> bool {
        self.active_attribute = Some(attribute_id);
        self.values.retain(|selected| {
            domain
                .iter()
                .any(|v| v.attribute_id == attribute_id && &v.value == selected)
        })
    }

    /// Deselect everything. Returns whether anything was selected.
    pub fn clear(&mut self) -> bool {
        let colors = self.colors.clear();
        let values = self.values.clear();
        colors || values
    }

    /// Number of cells the selection spans
    pub fn cell_count(&self) -> usize {
        self.colors.len() * self.values.len()
    }
}
