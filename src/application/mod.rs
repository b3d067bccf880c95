//! Application layer - Orchestration over the domain and ports.
//!
//! `PlanningService` wraps the store with schema resolution and presence
//! checks; `GridSession`/`FormSession` are the editor state machines a
//! frontend drives; `Workspace` maps sidebar routes to mounted editors.

pub mod dashboard;
pub mod form;
pub mod grid;
pub mod service;
pub mod workspace;

pub use dashboard::DashboardCounts;
pub use form::FormSession;
pub use grid::{GridSession, LoadState};
pub use service::{BatchDeleteReport, DeleteOutcome, PlanningService};
pub use workspace::{Route, Workspace};
