use std::collections::HashMap;

use stockroom_core::{Entity, Money, ProductId};

use crate::entry::CatalogEntry;

/// What `add_or_merge` did with the offered entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The id was new; the entry was stored as-is.
    Inserted,
    /// The id already existed; only the quantity was added to the stored entry.
    Merged,
}

/// In-memory product catalog keyed by product id.
///
/// The store is the sole owner of its entries. Callers get transient
/// references for the duration of a call, never long-lived handles.
/// Listing follows insertion order.
#[derive(Debug, Default)]
pub struct InventoryStore {
    entries: HashMap<ProductId, CatalogEntry>,
    order: Vec<ProductId>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry, or merge its quantity into an existing one.
    ///
    /// On merge the stored name and unit price are kept; the offered entry's
    /// other fields are discarded.
    pub fn add_or_merge(&mut self, entry: CatalogEntry) -> AddOutcome {
        if let Some(existing) = self.entries.get_mut(entry.id()) {
            existing.update_quantity(entry.quantity_on_hand());
            tracing::debug!(
                product_id = %entry.id(),
                added = entry.quantity_on_hand(),
                quantity_on_hand = existing.quantity_on_hand(),
                "merged quantity into existing product"
            );
            return AddOutcome::Merged;
        }

        tracing::debug!(
            product_id = %entry.id(),
            name = entry.name(),
            unit_price = %entry.unit_price(),
            quantity_on_hand = entry.quantity_on_hand(),
            "added product"
        );
        self.order.push(entry.id().clone());
        self.entries.insert(entry.id().clone(), entry);
        AddOutcome::Inserted
    }

    /// Remove an entry. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<CatalogEntry> {
        let removed = self.entries.remove(id)?;
        self.order.retain(|known| known.as_str() != id);
        tracing::debug!(product_id = %id, "removed product");
        Some(removed)
    }

    /// Add a signed delta to an entry's quantity. Unknown ids are a no-op.
    ///
    /// No bound checking: the quantity may become negative.
    /// Returns whether the id was found.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.update_quantity(delta);
                tracing::debug!(
                    product_id = %id,
                    delta,
                    quantity_on_hand = entry.quantity_on_hand(),
                    "adjusted stock"
                );
                true
            }
            None => {
                tracing::debug!(product_id = %id, delta, "stock adjustment for unknown product ignored");
                false
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Sum of `unit_price * quantity_on_hand` over every entry (zero when empty).
    pub fn total_value(&self) -> Money {
        self.entries.values().map(CatalogEntry::total_value).sum()
    }

    /// Entries in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        self.order.iter().filter_map(|id| self.entries.get(id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
