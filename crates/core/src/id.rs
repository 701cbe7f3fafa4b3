//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry.
///
/// Product ids are opaque, caller-chosen strings (e.g. `"P1"`, `"SKU-0042"`).
/// No format is imposed beyond what the operator types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// Lets maps keyed by `ProductId` be queried with a plain `&str`.
impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_identifier() {
        assert_eq!(ProductId::new("SKU-001").to_string(), "SKU-001");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::from("P1")).unwrap();
        assert_eq!(json, "\"P1\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "P1");
    }
}
