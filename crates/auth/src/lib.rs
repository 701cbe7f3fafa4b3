//! `stockroom-auth` — role-based capability checks for console sessions.
//!
//! Roles are self-declared at login; there are no credentials. This crate
//! decides which commands a role may run. It is not a security boundary.

pub mod authorize;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{authorize, AuthzError};
pub use permissions::Permission;
pub use roles::{Role, UnknownRole};
pub use session::Session;
