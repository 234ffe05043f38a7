//! Row-by-row synchronization of persisted variations
//!
//! Every successful create/update/delete is followed by a full re-fetch of
//! the parent product; the fetched snapshot replaces the local one. Failures
//! are notified once and leave local state exactly as it was, so the user can
//! retry or cancel.

use super::aggregate::{self, VariationSummary};
use super::api::VariationApi;
use super::edit::{EditBook, EditDraft, RowState};
use super::matrix::{ColorGroup, MatrixKey, VariantMatrix, group_by_color};
use super::sku;
use super::validate::validate_payload;
use crate::config::ClientConfig;
use crate::lookup::LookupCache;
use crate::notify::{Notifier, TracingNotifier};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AttributeValue, PersistedVariation, Product};
use shared::types::{ProductId, VariationId};

/// Outcome of submitting a draft matrix
#[derive(Debug, Default)]
pub struct MatrixSubmission {
    pub created: Vec<PersistedVariation>,
    pub failed: Vec<(MatrixKey, AppError)>,
}

impl MatrixSubmission {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Variation table of one existing product
pub struct VariationSyncService<A, N = TracingNotifier> {
    api: A,
    notifier: N,
    product_id: ProductId,
    /// Last fetched server snapshot
    product: Option<Product>,
    edits: EditBook,
    add_form: EditDraft,
    pending_delete: Option<VariationId>,
    low_stock_threshold: i64,
}

impl<A: VariationApi> VariationSyncService<A, TracingNotifier> {
    pub fn new(api: A, product_id: ProductId) -> Self {
        Self::with_notifier(api, TracingNotifier, product_id)
    }

    /// Service using the configured low-stock threshold
    pub fn from_config(api: A, config: &ClientConfig, product_id: ProductId) -> Self {
        Self::new(api, product_id).with_low_stock_threshold(config.low_stock_threshold)
    }
}

impl<A: VariationApi, N: Notifier> VariationSyncService<A, N> {
    pub fn with_notifier(api: A, notifier: N, product_id: ProductId) -> Self {
        Self {
            api,
            notifier,
            product_id,
            product: None,
            edits: EditBook::new(),
            add_form: EditDraft::default(),
            pending_delete: None,
            low_stock_threshold: aggregate::LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    pub fn variations(&self) -> &[PersistedVariation] {
        self.product
            .as_ref()
            .map(|p| p.variations.as_slice())
            .unwrap_or(&[])
    }

    pub fn variation(&self, id: VariationId) -> Option<&PersistedVariation> {
        self.variations().iter().find(|v| v.id == id)
    }

    pub fn summary(&self) -> VariationSummary {
        aggregate::summarize_with_threshold(self.variations(), self.low_stock_threshold)
    }

    pub fn groups(&self) -> Vec<ColorGroup<'_, PersistedVariation>> {
        group_by_color(self.variations())
    }

    // ========== Snapshot ==========

    /// Fetch the product and replace the local snapshot
    pub async fn load(&mut self) -> AppResult<()> {
        match self.api.fetch_product(self.product_id).await {
            Ok(product) => {
                self.apply_snapshot(product);
                Ok(())
            }
            Err(e) => Err(self.fail(
                e.to_app_error(ErrorCode::ProductRefreshFailed)
                    .with_detail("product_id", self.product_id),
            )),
        }
    }

    /// Re-fetch after a successful mutation
    ///
    /// A failed refresh is notified but does not undo the mutation; the
    /// previous snapshot stays until the next successful fetch.
    async fn refresh(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!(product_id = self.product_id, error = %e, "Refresh after mutation failed");
        }
    }

    fn apply_snapshot(&mut self, product: Product) {
        let pruned = self.edits.retain_rows(&product.variations);
        if let Some(id) = self.pending_delete
            && product.variation(id).is_none()
        {
            self.pending_delete = None;
        }
        tracing::debug!(
            product_id = self.product_id,
            variations = product.variations.len(),
            pruned_drafts = pruned.len(),
            "Product snapshot applied"
        );
        self.product = Some(product);
    }

    /// Notify and log a failure, handing it back to the caller
    fn fail(&self, err: AppError) -> AppError {
        tracing::warn!(
            product_id = self.product_id,
            code = %err.code,
            kind = err.kind.name(),
            "{}",
            err.message
        );
        self.notifier.error(&err.message);
        err
    }

    // ========== Create ==========

    pub fn add_form(&self) -> &EditDraft {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut EditDraft {
        &mut self.add_form
    }

    pub fn reset_add_form(&mut self) {
        self.add_form = EditDraft::default();
    }

    /// Fill the add form's SKU from name fragments
    pub fn generate_add_sku(&mut self, parts: &[&str]) -> &str {
        self.add_form.sku = sku::generate(parts);
        &self.add_form.sku
    }

    /// Create a variation from the add form
    pub async fn create(&mut self) -> AppResult<PersistedVariation> {
        let payload = self.add_form.to_payload(self.product_id);
        if let Err(e) = validate_payload(&payload) {
            return Err(self.fail(e));
        }

        let created = match self.api.create_variation(&payload).await {
            Ok(v) => v,
            Err(e) => return Err(self.fail(e.to_app_error(ErrorCode::VariationCreateFailed))),
        };

        tracing::info!(
            product_id = self.product_id,
            variation_id = created.id,
            "Variation created"
        );
        self.notifier.success("Variation added successfully");
        self.reset_add_form();
        self.refresh().await;
        Ok(created)
    }

    // ========== Inline edit ==========

    /// Viewing → Editing for a row of the current snapshot
    pub fn begin_edit(&mut self, id: VariationId) -> AppResult<&mut EditDraft> {
        let Some(row) = self.product.as_ref().and_then(|p| p.variation(id)) else {
            return Err(AppError::new(ErrorCode::VariationNotFound).with_detail("id", id));
        };
        Ok(self.edits.begin(row))
    }

    pub fn cancel_edit(&mut self, id: VariationId) -> bool {
        self.edits.cancel(id)
    }

    pub fn draft_mut(&mut self, id: VariationId) -> Option<&mut EditDraft> {
        self.edits.draft_mut(id)
    }

    pub fn row_state(&self, id: VariationId) -> RowState<'_> {
        self.edits.state(id)
    }

    pub fn is_editing(&self, id: VariationId) -> bool {
        self.edits.is_editing(id)
    }

    pub fn editing_ids(&self) -> Vec<VariationId> {
        self.edits.editing_ids()
    }

    /// Save one row's draft
    ///
    /// Only this row's draft is read; on success only this row leaves
    /// Editing.
    pub async fn save(&mut self, id: VariationId) -> AppResult<PersistedVariation> {
        let Some(draft) = self.edits.draft(id) else {
            return Err(AppError::new(ErrorCode::VariationNotEditing).with_detail("id", id));
        };
        let payload = draft.to_payload(self.product_id);
        if let Err(e) = validate_payload(&payload) {
            return Err(self.fail(e.with_detail("id", id)));
        }

        let updated = match self.api.update_variation(id, &payload).await {
            Ok(v) => v,
            Err(e) => {
                return Err(self.fail(
                    e.to_app_error(ErrorCode::VariationUpdateFailed)
                        .with_detail("id", id),
                ));
            }
        };

        self.edits.finish(id);
        tracing::info!(product_id = self.product_id, variation_id = id, "Variation updated");
        self.notifier.success("Variation updated successfully");
        self.refresh().await;
        Ok(updated)
    }

    // ========== Delete ==========

    /// Ask for confirmation before deleting a row
    pub fn request_delete(&mut self, id: VariationId) -> AppResult<()> {
        if self.variation(id).is_none() {
            return Err(AppError::new(ErrorCode::VariationNotFound).with_detail("id", id));
        }
        self.pending_delete = Some(id);
        Ok(())
    }

    pub fn cancel_delete(&mut self) -> Option<VariationId> {
        self.pending_delete.take()
    }

    pub fn pending_delete(&self) -> Option<VariationId> {
        self.pending_delete
    }

    /// Delete the row awaiting confirmation
    pub async fn confirm_delete(&mut self) -> AppResult<VariationId> {
        let Some(id) = self.pending_delete else {
            return Err(AppError::new(ErrorCode::VariationDeleteNotRequested));
        };

        if let Err(e) = self.api.delete_variation(id).await {
            return Err(self.fail(
                e.to_app_error(ErrorCode::VariationDeleteFailed)
                    .with_detail("id", id),
            ));
        }

        self.pending_delete = None;
        self.edits.cancel(id);
        tracing::info!(product_id = self.product_id, variation_id = id, "Variation deleted");
        self.notifier.success("Variation deleted successfully");
        self.refresh().await;
        Ok(id)
    }

    // ========== Draft matrix ==========

    /// Create every available row of a draft matrix, in matrix order
    ///
    /// Rows failing validation or the create call are collected and notified
    /// individually; the rest still go through. One refresh follows if
    /// anything was created.
    pub async fn submit_matrix(
        &mut self,
        matrix: &VariantMatrix,
        product_name: &str,
        lookup: &LookupCache,
    ) -> MatrixSubmission {
        let domain: &[AttributeValue] = match matrix.selection().active_attribute() {
            Some(attribute_id) => lookup.values_for(attribute_id),
            None => {
                tracing::warn!(product_id = self.product_id, "No active attribute, nothing to submit");
                &[]
            }
        };
        let payloads = matrix.to_payloads(self.product_id, product_name, lookup.colors(), domain);

        let mut outcome = MatrixSubmission::default();
        for (key, payload) in payloads {
            let result = match validate_payload(&payload) {
                Ok(()) => self
                    .api
                    .create_variation(&payload)
                    .await
                    .map_err(|e| e.to_app_error(ErrorCode::VariationCreateFailed)),
                Err(e) => Err(e),
            };
            match result {
                Ok(created) => outcome.created.push(created),
                Err(e) => {
                    let e = e.with_detail("key", key.to_string());
                    tracing::warn!(key = %key, code = %e.code, "{}", e.message);
                    self.notifier.error(&format!("{key}: {}", e.message));
                    outcome.failed.push((key, e));
                }
            }
        }

        if !outcome.created.is_empty() {
            tracing::info!(
                product_id = self.product_id,
                created = outcome.created.len(),
                failed = outcome.failed.len(),
                "Variation matrix submitted"
            );
            self.notifier
                .success(&format!("{} variations created", outcome.created.len()));
            self.refresh().await;
        }
        outcome
    }
}
