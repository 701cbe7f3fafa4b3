//! Interactive console for the stockroom inventory tracker.
//!
//! Reads a role at login, shows the role's menu and routes each choice to the
//! inventory store or the transaction ledger. Everything here is glue; the
//! bookkeeping lives in `stockroom-inventory` and `stockroom-sales`.

pub mod console;
pub mod context;
pub mod dispatcher;
pub mod menu;

pub use console::Console;
pub use context::AppContext;
pub use dispatcher::{login, Dispatcher};
pub use menu::{Command, MenuItem};
