//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL-backed planning store
//! - `memory` - In-memory planning store for tests and local runs
//! - `notify` - Toast notification sinks
//! - `http` - REST API exposure

pub mod http;
pub mod memory;
pub mod notify;
pub mod postgres;
