//! Reference data lookups (colors, attributes, attribute values)
//!
//! Loaded once per session and treated as immutable afterwards.

use crate::http::{HttpClient, NetworkHttpClient};
use crate::ClientResult;
use async_trait::async_trait;
use shared::error::{AppResult, ErrorCode};
use shared::models::{Attribute, AttributeValue, ColorOption};
use shared::types::{AttributeId, ColorId};
use std::collections::HashMap;

/// Source of lookup lists
#[async_trait]
pub trait LookupProvider: Send + Sync {
    async fn colors(&self) -> ClientResult<Vec<ColorOption>>;
    async fn attributes(&self) -> ClientResult<Vec<Attribute>>;
    async fn attribute_values(&self, attribute_id: AttributeId)
    -> ClientResult<Vec<AttributeValue>>;
}

#[async_trait]
impl LookupProvider for NetworkHttpClient {
    async fn colors(&self) -> ClientResult<Vec<ColorOption>> {
        self.get("color").await
    }

    async fn attributes(&self) -> ClientResult<Vec<Attribute>> {
        self.get("attribute").await
    }

    async fn attribute_values(
        &self,
        attribute_id: AttributeId,
    ) -> ClientResult<Vec<AttributeValue>> {
        let mut values: Vec<AttributeValue> =
            self.get(&format!("attribute/{attribute_id}/values")).await?;
        // Some backends omit the owning attribute on nested values
        for v in &mut values {
            v.attribute_id = attribute_id;
        }
        Ok(values)
    }
}

/// Immutable snapshot of lookup data
#[derive(Debug, Clone, Default)]
pub struct LookupCache {
    colors: Vec<ColorOption>,
    attributes: Vec<Attribute>,
    values: HashMap<AttributeId, Vec<AttributeValue>>,
}

impl LookupCache {
    /// Build a cache from already-loaded lists
    pub fn new(
        colors: Vec<ColorOption>,
        attributes: Vec<Attribute>,
        values: impl IntoIterator<Item = AttributeValue>,
    ) -> Self {
        let mut by_attribute: HashMap<AttributeId, Vec<AttributeValue>> = HashMap::new();
        for v in values {
            by_attribute.entry(v.attribute_id).or_default().push(v);
        }
        Self {
            colors,
            attributes,
            values: by_attribute,
        }
    }

    /// Load every list from a provider
    pub async fn load<P: LookupProvider + ?Sized>(provider: &P) -> AppResult<Self> {
        let fail = |e: crate::ClientError| e.to_app_error(ErrorCode::LookupFailed);

        let colors = provider.colors().await.map_err(fail)?;
        let attributes = provider.attributes().await.map_err(fail)?;
        let mut values = Vec::new();
        for attribute in &attributes {
            values.extend(
                provider
                    .attribute_values(attribute.id)
                    .await
                    .map_err(fail)?,
            );
        }

        tracing::info!(
            colors = colors.len(),
            attributes = attributes.len(),
            values = values.len(),
            "Lookup data loaded"
        );
        Ok(Self::new(colors, attributes, values))
    }

    pub fn colors(&self) -> &[ColorOption] {
        &self.colors
    }

    pub fn color(&self, id: ColorId) -> Option<&ColorOption> {
        self.colors.iter().find(|c| c.id == id)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value domain of one attribute, in backend order
    pub fn values_for(&self, attribute_id: AttributeId) -> &[AttributeValue] {
        self.values
            .get(&attribute_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn value(&self, attribute_id: AttributeId, value: &str) -> Option<&AttributeValue> {
        self.values_for(attribute_id)
            .iter()
            .find(|v| v.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> LookupCache {
        LookupCache::new(
            vec![
                ColorOption::new(1, "Red", "#FF0000"),
                ColorOption::new(2, "Blue", "#0000FF"),
            ],
            vec![
                Attribute { id: 10, name: "Size".into() },
                Attribute { id: 20, name: "Material".into() },
            ],
            vec![
                AttributeValue::new(10, 101, "S", "Small"),
                AttributeValue::new(10, 102, "M", "Medium"),
                AttributeValue::new(20, 201, "Cotton", ""),
            ],
        )
    }

    #[test]
    fn test_values_grouped_by_attribute() {
        let cache = cache();
        assert_eq!(cache.values_for(10).len(), 2);
        assert_eq!(cache.values_for(20).len(), 1);
        assert!(cache.values_for(99).is_empty());
    }

    #[test]
    fn test_value_lookup() {
        let cache = cache();
        assert_eq!(cache.value(10, "M").map(|v| v.variant_id), Some(102));
        assert!(cache.value(20, "M").is_none());
        assert_eq!(cache.color(2).map(|c| c.name.as_str()), Some("Blue"));
    }
}
