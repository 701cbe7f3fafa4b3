use thiserror::Error;

use crate::{Permission, Role, Session};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: Role, permission: String },
}

/// Check that the session's role grants `required`.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(session: &Session, required: &Permission) -> Result<(), AuthzError> {
    if session.role().grants(required) {
        Ok(())
    } else {
        tracing::warn!(
            username = session.username(),
            role = %session.role(),
            permission = %required,
            "command denied"
        );
        Err(AuthzError::Forbidden {
            role: session.role(),
            permission: required.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grants_permission_held_by_role() {
        let session = Session::new("alice", Role::Admin);
        assert_eq!(authorize(&session, &Permission::INVENTORY_WRITE), Ok(()));
    }

    #[test]
    fn denies_permission_missing_from_role() {
        let session = Session::new("bob", Role::Customer);
        let err = authorize(&session, &Permission::INVENTORY_WRITE).unwrap_err();
        assert_eq!(
            err,
            AuthzError::Forbidden {
                role: Role::Customer,
                permission: "inventory.write".to_string(),
            }
        );
    }
}
