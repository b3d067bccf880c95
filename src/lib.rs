//! SIMRENDA - Regional Planning Data Service
//!
//! This crate implements the hierarchical master-data and strategic-plan
//! (Renstra) editors for regional government planning, backed by the
//! immutable Kepmen reference catalog.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
