//! Notifier that renders toasts as structured log events.

use crate::ports::{Notifier, Severity, Toast};

/// Service-side notification sink: toasts become tracing events.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.severity {
            Severity::Default => {
                tracing::info!(title = %toast.title, description = %toast.description, "toast")
            }
            Severity::Destructive => {
                tracing::error!(title = %toast.title, description = %toast.description, "toast")
            }
        }
    }
}
