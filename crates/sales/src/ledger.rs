use chrono::{NaiveDateTime, SubsecRound};
use thiserror::Error;

use stockroom_core::{Money, ProductId};
use stockroom_inventory::InventoryStore;

use crate::record::SaleRecord;

/// Why a sale was rejected. A rejected sale never mutates the store or the log.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaleError {
    #[error("product '{0}' not found")]
    UnknownProduct(ProductId),

    #[error("insufficient stock for '{product_id}' (requested: {requested}, available: {available})")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    #[error("sale quantity must be positive (got {0})")]
    NonPositiveQuantity(i64),
}

/// Append-only history of completed sales.
///
/// The ledger does not own the inventory. Operations that touch stock borrow
/// the store for the duration of the call, so the caller keeps a single owner
/// for both objects.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    sales: Vec<SaleRecord>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sell `quantity` units of `id` at the current unit price.
    ///
    /// On success the stock is decremented, one [`SaleRecord`] is appended and
    /// the total cost is returned. A free product yields `Ok(Money::ZERO)`,
    /// which is distinct from any rejection.
    pub fn sell(
        &mut self,
        store: &mut InventoryStore,
        id: &str,
        quantity: i64,
        at: NaiveDateTime,
    ) -> Result<Money, SaleError> {
        if quantity <= 0 {
            tracing::warn!(product_id = %id, quantity, "rejected sale with non-positive quantity");
            return Err(SaleError::NonPositiveQuantity(quantity));
        }

        let entry = store
            .get(id)
            .ok_or_else(|| SaleError::UnknownProduct(ProductId::from(id)))?;

        if entry.quantity_on_hand() < quantity {
            tracing::warn!(
                product_id = %id,
                requested = quantity,
                available = entry.quantity_on_hand(),
                "rejected sale: insufficient stock"
            );
            return Err(SaleError::InsufficientStock {
                product_id: entry.id_typed().clone(),
                requested: quantity,
                available: entry.quantity_on_hand(),
            });
        }

        let total_cost = entry.unit_price() * quantity;
        let record = SaleRecord {
            product_id: entry.id_typed().clone(),
            product_name: entry.name().to_string(),
            quantity_sold: quantity,
            total_cost,
            timestamp: at.trunc_subsecs(0),
        };

        store.adjust_quantity(id, -quantity);
        tracing::info!(
            product_id = %record.product_id,
            quantity,
            total_cost = %total_cost,
            "sale recorded"
        );
        self.sales.push(record);

        Ok(total_cost)
    }

    /// Add `quantity` units to `id`. Unknown ids are a no-op.
    ///
    /// Restocks are not logged and the quantity is not validated.
    /// Returns whether the id was found.
    pub fn restock(&self, store: &mut InventoryStore, id: &str, quantity: i64) -> bool {
        store.adjust_quantity(id, quantity)
    }

    /// Completed sales in chronological (insertion) order.
    pub fn sales_log(&self) -> &[SaleRecord] {
        &self.sales
    }

    /// Sum of `total_cost` over every logged sale.
    pub fn total_revenue(&self) -> Money {
        self.sales.iter().map(|s| s.total_cost).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use stockroom_inventory::CatalogEntry;

    fn price(s: &str) -> Money {
        s.parse().unwrap()
    }

    fn test_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_milli_opt(14, 5, 7, 830)
            .unwrap()
    }

    fn widget_store() -> InventoryStore {
        let mut store = InventoryStore::new();
        store.add_or_merge(CatalogEntry::new("P1", "Widget", price("10.0"), 5));
        store
    }

    #[test]
    fn sell_decrements_stock_and_logs_sale() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();

        let cost = ledger.sell(&mut store, "P1", 3, test_time()).unwrap();

        assert_eq!(cost, price("30"));
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 2);
        assert_eq!(ledger.sales_log().len(), 1);

        let sale = &ledger.sales_log()[0];
        assert_eq!(sale.product_id.as_str(), "P1");
        assert_eq!(sale.product_name, "Widget");
        assert_eq!(sale.quantity_sold, 3);
        assert_eq!(sale.total_cost, price("30"));
        assert_eq!(sale.formatted_timestamp(), "2024-03-09 14:05:07");
    }

    #[test]
    fn selling_entire_stock_is_allowed() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();

        assert_eq!(ledger.sell(&mut store, "P1", 5, test_time()), Ok(price("50")));
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 0);
    }

    #[test]
    fn insufficient_stock_is_rejected_without_mutation() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();

        let err = ledger.sell(&mut store, "P1", 6, test_time()).unwrap_err();
        assert_eq!(
            err,
            SaleError::InsufficientStock {
                product_id: ProductId::from("P1"),
                requested: 6,
                available: 5,
            }
        );
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 5);
        assert!(ledger.sales_log().is_empty());
    }

    #[test]
    fn unknown_product_is_rejected() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();

        let err = ledger.sell(&mut store, "P9", 1, test_time()).unwrap_err();
        assert_eq!(err, SaleError::UnknownProduct(ProductId::from("P9")));
        assert!(ledger.sales_log().is_empty());
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();

        for qty in [0, -4] {
            let err = ledger.sell(&mut store, "P1", qty, test_time()).unwrap_err();
            assert_eq!(err, SaleError::NonPositiveQuantity(qty));
        }
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 5);
        assert!(ledger.sales_log().is_empty());
    }

    #[test]
    fn free_product_sale_succeeds_with_zero_cost() {
        let mut store = InventoryStore::new();
        store.add_or_merge(CatalogEntry::new("FREE", "Sticker", Money::ZERO, 10));
        let mut ledger = TransactionLedger::new();

        assert_eq!(ledger.sell(&mut store, "FREE", 2, test_time()), Ok(Money::ZERO));
        assert_eq!(ledger.sales_log().len(), 1);
    }

    #[test]
    fn sale_uses_price_at_time_of_sale() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();
        ledger.sell(&mut store, "P1", 1, test_time()).unwrap();

        // Replace the product with a new price; history keeps the old cost and name.
        store.remove("P1");
        store.add_or_merge(CatalogEntry::new("P1", "Widget v2", price("12.5"), 4));
        let cost = ledger.sell(&mut store, "P1", 2, test_time()).unwrap();

        assert_eq!(cost, price("25"));
        let log = ledger.sales_log();
        assert_eq!(log[0].product_name, "Widget");
        assert_eq!(log[0].total_cost, price("10"));
        assert_eq!(log[1].product_name, "Widget v2");
        assert_eq!(ledger.total_revenue(), price("35"));
    }

    #[test]
    fn restock_increases_stock_without_logging() {
        let mut store = widget_store();
        let ledger = TransactionLedger::new();

        assert!(ledger.restock(&mut store, "P1", 10));
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 15);
        assert!(ledger.sales_log().is_empty());
    }

    #[test]
    fn restock_unknown_product_is_a_no_op() {
        let mut store = widget_store();
        let ledger = TransactionLedger::new();

        assert!(!ledger.restock(&mut store, "P2", 10));
        assert!(!store.contains("P2"));
    }

    #[test]
    fn widget_walkthrough() {
        let mut store = widget_store();
        let mut ledger = TransactionLedger::new();
        assert_eq!(store.total_value(), price("50"));

        assert_eq!(ledger.sell(&mut store, "P1", 3, test_time()), Ok(price("30")));
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 2);
        assert_eq!(ledger.sales_log().len(), 1);

        assert!(ledger.sell(&mut store, "P1", 5, test_time()).is_err());
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 2);
        assert_eq!(ledger.sales_log().len(), 1);

        ledger.restock(&mut store, "P1", 10);
        assert_eq!(store.get("P1").unwrap().quantity_on_hand(), 12);
        assert_eq!(ledger.sales_log().len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a sale either applies fully (stock -q, one record costing
        /// price * q) or leaves store and log untouched.
        #[test]
        fn sale_is_all_or_nothing(
            stock in 0i64..100,
            cents in 0i64..10_000,
            quantity in -10i64..150
        ) {
            let mut store = InventoryStore::new();
            store.add_or_merge(CatalogEntry::new("P1", "Widget", Money::from_minor(cents), stock));
            let mut ledger = TransactionLedger::new();

            match ledger.sell(&mut store, "P1", quantity, test_time()) {
                Ok(cost) => {
                    prop_assert!(quantity > 0 && quantity <= stock);
                    prop_assert_eq!(cost, Money::from_minor(cents * quantity));
                    prop_assert_eq!(store.get("P1").unwrap().quantity_on_hand(), stock - quantity);
                    prop_assert_eq!(ledger.sales_log().len(), 1);
                    prop_assert_eq!(ledger.sales_log()[0].total_cost, cost);
                }
                Err(_) => {
                    prop_assert!(quantity <= 0 || quantity > stock);
                    prop_assert_eq!(store.get("P1").unwrap().quantity_on_hand(), stock);
                    prop_assert!(ledger.sales_log().is_empty());
                }
            }
        }

        /// Property: restocking never produces a sale record.
        #[test]
        fn restock_never_logs(stock in -50i64..50, quantity in -50i64..50) {
            let mut store = InventoryStore::new();
            store.add_or_merge(CatalogEntry::new("P1", "Widget", Money::from_minor(100), stock));
            let ledger = TransactionLedger::new();

            ledger.restock(&mut store, "P1", quantity);
            prop_assert_eq!(store.get("P1").unwrap().quantity_on_hand(), stock + quantity);
            prop_assert!(ledger.sales_log().is_empty());
        }
    }
}
