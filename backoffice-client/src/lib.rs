//! Back-office client - variation matrix engine over the back-office REST API
//!
//! - [`variation`]: selection, matrix reconciliation, SKU generation,
//!   aggregation, per-row edit state and the sync service
//! - [`http`]: network client for the REST API
//! - [`lookup`]: color / attribute reference data
//! - [`notify`]: user-facing notification seam

pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod lookup;
pub mod money;
pub mod notify;
pub mod variation;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use lookup::{LookupCache, LookupProvider};
pub use notify::{Notifier, TracingNotifier};

// Variation engine
pub use variation::{
    DefaultPricing, EditBook, EditDraft, MatrixKey, MatrixRow, MatrixSubmission, RowState,
    SelectionStore, VariantMatrix, VariationApi, VariationRow, VariationSummary,
    VariationSyncService,
};

// Re-export shared types for convenience
pub use shared::error::{AppError, AppResult, ErrorCode, ErrorKind};
pub use shared::models::{
    Attribute, AttributeValue, ColorOption, PersistedVariation, Product, VariationPayload,
};
