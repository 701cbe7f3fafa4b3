//! Sales domain module.
//!
//! Sells and restocks products held in an [`InventoryStore`](stockroom_inventory::InventoryStore)
//! and keeps the append-only log of completed sales.

pub mod ledger;
pub mod record;

pub use ledger::{SaleError, TransactionLedger};
pub use record::{SaleRecord, TIMESTAMP_FORMAT};
