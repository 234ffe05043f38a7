//! Backend operations the sync service depends on

use crate::http::{HttpClient, NetworkHttpClient};
use crate::ClientResult;
use async_trait::async_trait;
use shared::models::{PersistedVariation, Product, VariationPayload};
use shared::types::{ProductId, VariationId};

/// Variation endpoints of the back-office API
#[async_trait]
pub trait VariationApi: Send + Sync {
    /// `POST /product/variation`
    async fn create_variation(&self, payload: &VariationPayload)
    -> ClientResult<PersistedVariation>;

    /// `PUT /product/variation/:id`
    async fn update_variation(
        &self,
        id: VariationId,
        payload: &VariationPayload,
    ) -> ClientResult<PersistedVariation>;

    /// `DELETE /product/variation/:id`
    async fn delete_variation(&self, id: VariationId) -> ClientResult<()>;

    /// `GET /product/:id`, including nested variations
    async fn fetch_product(&self, product_id: ProductId) -> ClientResult<Product>;
}

#[async_trait]
impl VariationApi for NetworkHttpClient {
    async fn create_variation(
        &self,
        payload: &VariationPayload,
    ) -> ClientResult<PersistedVariation> {
        self.post("product/variation", payload).await
    }

    async fn update_variation(
        &self,
        id: VariationId,
        payload: &VariationPayload,
    ) -> ClientResult<PersistedVariation> {
        self.put(&format!("product/variation/{id}"), payload).await
    }

    async fn delete_variation(&self, id: VariationId) -> ClientResult<()> {
        self.delete(&format!("product/variation/{id}")).await
    }

    async fn fetch_product(&self, product_id: ProductId) -> ClientResult<Product> {
        self.get(&format!("product/{product_id}")).await
    }
}
