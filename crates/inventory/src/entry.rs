use stockroom_core::{Entity, Money, ProductId};

/// One product record: identity, price and quantity on hand.
///
/// Neither field is bound-checked: the quantity is signed (adjustments and
/// restocks can take it below zero) and any numeric unit price is kept as
/// entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    id: ProductId,
    name: String,
    unit_price: Money,
    quantity_on_hand: i64,
}

impl CatalogEntry {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity_on_hand: i64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity_on_hand,
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity_on_hand(&self) -> i64 {
        self.quantity_on_hand
    }

    /// Value of the stock held for this entry (`unit_price * quantity_on_hand`).
    pub fn total_value(&self) -> Money {
        self.unit_price * self.quantity_on_hand
    }

    pub(crate) fn update_quantity(&mut self, delta: i64) {
        self.quantity_on_hand = self.quantity_on_hand.saturating_add(delta);
    }
}

impl Entity for CatalogEntry {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
