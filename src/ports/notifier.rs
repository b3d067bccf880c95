//! Notification port.
//!
//! Every success and failure of a user-visible action is reported through
//! this channel as a transient toast. Injecting the channel keeps the
//! orchestration free of ambient side effects and gives tests a seam to
//! observe what the user would have seen.

use serde::{Deserialize, Serialize};

/// Visual weight of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    Destructive,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    /// A success toast.
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    /// A failure toast.
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}
