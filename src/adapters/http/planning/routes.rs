//! HTTP routes for the planning CRUD endpoints.

use axum::routing::{get, patch, post};
use axum::Router;

use super::handlers::{
    batch_delete, create_record, delete_record, list_parents, list_records, resolve_parent,
    update_record, PlanningHandlers,
};

/// Creates the planning router with all endpoints.
pub fn planning_routes(handlers: PlanningHandlers) -> Router {
    Router::new()
        .route("/:kind/:level", get(list_records).post(create_record))
        .route("/:kind/:level/:id", patch(update_record).delete(delete_record))
        .route("/:kind/:level/batch-delete", post(batch_delete))
        .route("/:kind/:level/parents", get(list_parents))
        .route("/:kind/program/parent", get(resolve_parent))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlanningStore;
    use crate::adapters::notify::TracingNotifier;
    use crate::application::service::PlanningService;
    use std::sync::Arc;

    #[test]
    fn planning_routes_compiles() {
        let service = Arc::new(PlanningService::new(Arc::new(InMemoryPlanningStore::new())));
        let _router = planning_routes(PlanningHandlers::new(service, Arc::new(TracingNotifier::new())));
    }
}
