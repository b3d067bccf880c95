//! Notifier that records toasts for inspection in tests.

use std::sync::Mutex;

use crate::ports::{Notifier, Severity, Toast};

/// Records every toast it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All toasts received so far, in order.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    /// The most recent toast, if any.
    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().unwrap().last().cloned()
    }

    /// Number of destructive toasts received.
    pub fn error_count(&self) -> usize {
        self.toasts
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.severity == Severity::Destructive)
            .count()
    }

    /// Drops all recorded toasts.
    pub fn clear(&self) {
        self.toasts.lock().unwrap().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
