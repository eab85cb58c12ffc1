//! Composite product bundles.

use crate::money::Money;
use crate::priceable::Priceable;

/// Flat discount applied to a bundle's child subtotal.
pub const BUNDLE_DISCOUNT: f64 = 0.10;

/// A composite of owned sellable children, sold at a discount.
///
/// Children are owned exclusively, so a bundle can never end up inside its
/// own subtree. Each bundle discounts its own subtotal, which means nested
/// bundles compound the discount through the recursion.
pub struct Bundle {
    label: String,
    children: Vec<Box<dyn Priceable>>,
}

impl Bundle {
    /// Create an empty bundle with a display label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Append an owned child.
    pub fn push(&mut self, child: impl Priceable + 'static) {
        self.children.push(Box::new(child));
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the bundle has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Priceable for Bundle {
    /// Label plus child count; children are not listed by name.
    fn name(&self) -> String {
        format!("{} [Contains: {} items]", self.label, self.children.len())
    }

    /// Child subtotal with the bundle discount applied.
    fn price(&self) -> Money {
        let subtotal: Money = self.children.iter().map(|c| c.price()).sum();
        subtotal.discounted(BUNDLE_DISCOUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    fn item(name: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(name, Money::from_cents(cents))
    }

    #[test]
    fn test_price_is_discounted_subtotal() {
        let mut bundle = Bundle::new("Student Starter Pack");
        bundle.push(item("Laptop", 200_000));
        bundle.push(item("Phone", 100_000));
        bundle.push(item("Fast Charger", 5_000));

        // 10% off the 305_000 subtotal
        assert_eq!(bundle.price(), Money::from_cents(274_500));
    }

    #[test]
    fn test_nested_bundles_compound() {
        let mut inner = Bundle::new("Phone Pack");
        inner.push(item("Phone", 100_000));

        let mut outer = Bundle::new("Mega Pack");
        outer.push(inner);
        outer.push(item("Fast Charger", 5_000));

        // inner: 90_000; outer: 0.9 * (90_000 + 5_000)
        assert_eq!(outer.price(), Money::from_cents(85_500));
    }

    #[test]
    fn test_name_shows_child_count() {
        let mut bundle = Bundle::new("Student Starter Pack");
        bundle.push(item("Laptop", 200_000));
        bundle.push(item("Phone", 100_000));

        assert_eq!(bundle.name(), "Student Starter Pack [Contains: 2 items]");
    }

    #[test]
    fn test_empty_bundle_prices_at_zero() {
        let bundle = Bundle::new("Empty");
        assert!(bundle.is_empty());
        assert_eq!(bundle.price(), Money::ZERO);
    }
}
