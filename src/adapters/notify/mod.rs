//! Notification adapters.

mod recording;
mod tracing;

pub use self::recording::RecordingNotifier;
pub use self::tracing::TracingNotifier;
