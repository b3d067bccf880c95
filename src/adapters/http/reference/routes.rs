//! HTTP routes for the reference catalog.

use axum::routing::get;
use axum::Router;

use super::handlers::{list_reference, ReferenceHandlers};

/// Creates the reference router.
pub fn reference_routes(handlers: ReferenceHandlers) -> Router {
    Router::new()
        .route("/:level", get(list_reference))
        .with_state(handlers)
}
