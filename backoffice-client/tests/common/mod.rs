// In-memory backend and recording notifier shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use backoffice_client::{ClientError, ClientResult, Notifier, VariationApi};
use shared::models::{PersistedVariation, Product, VariationPayload, VariationStatus};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(VariationPayload),
    Update(i64, VariationPayload),
    Delete(i64),
    Fetch(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Create,
    Update,
    Delete,
    Fetch,
}

struct Backend {
    product_id: i64,
    name: String,
    variations: Vec<PersistedVariation>,
    next_id: i64,
    calls: Vec<Call>,
    failures: VecDeque<(Op, Failure)>,
}

enum Failure {
    Status(u16, String),
    /// Success status with a body that does not decode
    Undecodable(String),
}

impl Failure {
    fn into_error(self) -> ClientError {
        match self {
            Failure::Status(status, body) => ClientError::Api { status, body },
            Failure::Undecodable(body) => match serde_json::from_str::<PersistedVariation>(&body) {
                Err(e) => ClientError::Serialization(e),
                Ok(_) => ClientError::InvalidResponse(body),
            },
        }
    }
}

/// Fake back-office API recording every call
#[derive(Clone)]
pub struct MockApi {
    inner: Arc<Mutex<Backend>>,
}

impl MockApi {
    pub fn new(product_id: i64, name: &str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Backend {
                product_id,
                name: name.to_string(),
                variations: Vec::new(),
                next_id: 100,
                calls: Vec::new(),
                failures: VecDeque::new(),
            })),
        }
    }

    pub fn with_variations(self, rows: Vec<PersistedVariation>) -> Self {
        self.inner.lock().unwrap().variations = rows;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn count(&self, op: Op) -> usize {
        self.calls()
            .iter()
            .filter(|c| {
                matches!(
                    (c, op),
                    (Call::Create(_), Op::Create)
                        | (Call::Update(..), Op::Update)
                        | (Call::Delete(_), Op::Delete)
                        | (Call::Fetch(_), Op::Fetch)
                )
            })
            .count()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    /// Make the next call of `op` fail with this status and body
    pub fn fail_next(&self, op: Op, status: u16, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .push_back((op, Failure::Status(status, body.to_string())));
    }

    /// Make the next call of `op` answer 200 with a body that cannot be decoded
    pub fn fail_next_undecodable(&self, op: Op, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .failures
            .push_back((op, Failure::Undecodable(body.to_string())));
    }

    /// Remove a row behind the service's back (another user deleting it)
    pub fn remove_on_server(&self, id: i64) {
        self.inner.lock().unwrap().variations.retain(|v| v.id != id);
    }

    pub fn server_rows(&self) -> Vec<PersistedVariation> {
        self.inner.lock().unwrap().variations.clone()
    }

    fn take_failure(backend: &mut Backend, op: Op) -> ClientResult<()> {
        if let Some(pos) = backend.failures.iter().position(|(o, _)| *o == op) {
            let (_, failure) = backend.failures.remove(pos).unwrap();
            return Err(failure.into_error());
        }
        Ok(())
    }
}

fn apply(row: &mut PersistedVariation, p: &VariationPayload) {
    row.color_id = p.color_id;
    row.variant_id = p.variant_id;
    row.buying_price = p.buying_price;
    row.selling_price = p.selling_price;
    row.discount = p.discount;
    row.stock = p.stock;
    row.sku = p.sku.clone();
}

#[async_trait]
impl VariationApi for MockApi {
    async fn create_variation(
        &self,
        payload: &VariationPayload,
    ) -> ClientResult<PersistedVariation> {
        let mut b = self.inner.lock().unwrap();
        b.calls.push(Call::Create(payload.clone()));
        Self::take_failure(&mut b, Op::Create)?;

        let mut row = variation(b.next_id, payload.color_id, payload.variant_id, 0.0, 0);
        row.product_id = payload.product_id;
        apply(&mut row, payload);
        b.next_id += 1;
        b.variations.push(row.clone());
        Ok(row)
    }

    async fn update_variation(
        &self,
        id: i64,
        payload: &VariationPayload,
    ) -> ClientResult<PersistedVariation> {
        let mut b = self.inner.lock().unwrap();
        b.calls.push(Call::Update(id, payload.clone()));
        Self::take_failure(&mut b, Op::Update)?;

        let row = b
            .variations
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| ClientError::NotFound(r#"{"message": "Variation not found"}"#.into()))?;
        apply(row, payload);
        Ok(row.clone())
    }

    async fn delete_variation(&self, id: i64) -> ClientResult<()> {
        let mut b = self.inner.lock().unwrap();
        b.calls.push(Call::Delete(id));
        Self::take_failure(&mut b, Op::Delete)?;

        let before = b.variations.len();
        b.variations.retain(|v| v.id != id);
        if b.variations.len() == before {
            return Err(ClientError::NotFound(String::new()));
        }
        Ok(())
    }

    async fn fetch_product(&self, product_id: i64) -> ClientResult<Product> {
        let mut b = self.inner.lock().unwrap();
        b.calls.push(Call::Fetch(product_id));
        Self::take_failure(&mut b, Op::Fetch)?;

        if product_id != b.product_id {
            return Err(ClientError::NotFound(r#"{"error": "Product not found"}"#.into()));
        }
        Ok(Product {
            id: b.product_id,
            name: b.name.clone(),
            sku: None,
            category_id: None,
            brand_id: None,
            variations: b.variations.clone(),
        })
    }
}

pub fn variation(id: i64, color_id: i64, variant_id: i64, price: f64, stock: i64) -> PersistedVariation {
    PersistedVariation {
        id,
        product_id: 1,
        color_id,
        variant_id,
        buying_price: 5.0,
        selling_price: price,
        discount: 0.0,
        stock,
        sku: format!("ROW-{id}"),
        status: VariationStatus::Active,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Notifier that keeps every message
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(m) => Some(m),
                Notice::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Success(m) => Some(m),
                Notice::Error(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notices
            .lock()
            .unwrap()
            .push(Notice::Error(message.to_string()));
    }
}
