//! User-facing notifications
//!
//! The engine only fires messages; presentation (toasts, status bars) is the
//! embedder's business.

use std::sync::Arc;

/// Fire-and-forget notification surface
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that writes to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(notification = "success", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(notification = "error", "{message}");
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
