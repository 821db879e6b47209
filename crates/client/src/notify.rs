//! User-facing notifications for mutations that report their outcome.

use tracing::{info, warn};

/// Receives success and failure notices meant for the end user.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: routes notices into the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = "success", "{message}");
    }

    fn error(&self, message: &str) {
        warn!(notification = "error", "{message}");
    }
}
