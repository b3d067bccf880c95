//! Dashboard endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::DashboardHandlers;
pub use routes::dashboard_routes;
