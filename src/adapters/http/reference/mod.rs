//! Kepmen reference endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::ReferenceHandlers;
pub use routes::reference_routes;
