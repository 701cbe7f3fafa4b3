//! Inventory domain module.
//!
//! This crate owns the product catalog: catalog entries and the in-memory
//! store keyed by product id. Pure domain logic (no IO, no console).

pub mod entry;
pub mod store;

pub use entry::CatalogEntry;
pub use store::{AddOutcome, InventoryStore};
