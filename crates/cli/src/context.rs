use stockroom_inventory::InventoryStore;
use stockroom_sales::TransactionLedger;

/// State of one console run: the catalog and the sales ledger bound to it.
///
/// Created once in `main` and lent to the dispatcher; nothing is global.
/// Fields are public so a command can borrow the store and the ledger
/// mutably at the same time.
#[derive(Debug, Default)]
pub struct AppContext {
    pub store: InventoryStore,
    pub ledger: TransactionLedger,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }
}
