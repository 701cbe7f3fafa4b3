use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use stockroom_core::{Money, ProductId};

/// Rendering of sale timestamps (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed sale (immutable once appended to the ledger).
///
/// The product name is captured at sale time; later catalog changes do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity_sold: i64,
    pub total_cost: Money,
    /// Local wall-clock time, second resolution.
    pub timestamp: NaiveDateTime,
}

impl SaleRecord {
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}
