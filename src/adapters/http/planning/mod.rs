//! Planning CRUD endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::PlanningHandlers;
pub use routes::planning_routes;
