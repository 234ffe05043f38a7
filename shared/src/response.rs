//! API response envelope
//!
//! Some back-office endpoints return the resource bare, others wrap it:
//! ```json
//! { "success": true, "data": { ... } }
//! ```
//! [`Envelope`] accepts both.

use serde::Deserialize;

/// Bare-or-wrapped response body
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(data) => data,
        }
    }
}
