//! Leaf catalog items.

use crate::money::Money;
use crate::priceable::Priceable;
use serde::{Deserialize, Serialize};

/// An indivisible catalog item with a fixed name and price.
///
/// Immutable once created. Family factories produce these, but ad-hoc items
/// (a charger thrown into a bundle, say) can be constructed directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    name: String,
    price: Money,
}

impl CatalogItem {
    /// Create a catalog item.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Priceable for CatalogItem {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> Money {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_item() {
        let item = CatalogItem::new("Fast Charger", Money::from_cents(5_000));
        assert_eq!(item.name(), "Fast Charger");
        assert_eq!(item.price(), Money::from_cents(5_000));
    }
}
