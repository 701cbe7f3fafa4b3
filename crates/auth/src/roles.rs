use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Permission;

static ADMIN_PERMISSIONS: [Permission; 3] = [
    Permission::INVENTORY_READ,
    Permission::INVENTORY_WRITE,
    Permission::SALES_READ,
];

static CUSTOMER_PERMISSIONS: [Permission; 2] = [Permission::INVENTORY_READ, Permission::SALES_CREATE];

/// Role a session declares at login.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Capability set granted to this role.
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => &ADMIN_PERMISSIONS,
            Role::Customer => &CUSTOMER_PERMISSIONS,
        }
    }

    pub fn grants(&self, permission: &Permission) -> bool {
        self.permissions().contains(permission)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}' (expected 'admin' or 'customer')")]
pub struct UnknownRole(pub String);

/// Case-insensitive; surrounding whitespace is ignored.
impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            _ => Err(UnknownRole(s.trim().to_string())),
        }
    }
}
