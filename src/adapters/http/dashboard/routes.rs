//! HTTP routes for the dashboard.

use axum::routing::get;
use axum::Router;

use super::handlers::{overview, DashboardHandlers};

/// Creates the dashboard router.
pub fn dashboard_routes(handlers: DashboardHandlers) -> Router {
    Router::new().route("/", get(overview)).with_state(handlers)
}
