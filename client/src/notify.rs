//! User-facing notifications
//!
//! Store operations that refuse a user action (duplicate comparison item,
//! full basket) tell the user directly instead of returning an error.

/// Sink for messages meant for the user, not the calling code.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Logs alerts at warn level. The CLI's stderr layer is what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(alert = message, "User alert");
    }
}
