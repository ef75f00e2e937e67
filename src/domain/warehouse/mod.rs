//! Warehouse aggregate
//!
//! Warehouses are seeded from fixtures only; the store has no mutations for
//! them.

pub mod model;

pub use model::{Warehouse, WarehouseStatus};
