use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Permission identifier.
///
/// Permissions are modeled as opaque strings (e.g. "inventory.read"); the
/// well-known ones used by the console are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Cow<'static, str>);

impl Permission {
    /// View the catalog.
    pub const INVENTORY_READ: Permission = Permission(Cow::Borrowed("inventory.read"));
    /// Add, remove and adjust catalog entries.
    pub const INVENTORY_WRITE: Permission = Permission(Cow::Borrowed("inventory.write"));
    /// View the sales log and inventory valuation.
    pub const SALES_READ: Permission = Permission(Cow::Borrowed("sales.read"));
    /// Buy products.
    pub const SALES_CREATE: Permission = Permission(Cow::Borrowed("sales.create"));

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
