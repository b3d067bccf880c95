//! Hierarchy module - The four planning levels and their schema mapping.

mod level;
mod schema;

pub use level::HierarchyLevel;
pub use schema::{field_set, parent_field_set, DatasetKind, FieldSet, PlanFields};
