//! PostgreSQL adapters - Database implementations for the store port.

mod store;

pub use store::PostgresPlanningStore;
