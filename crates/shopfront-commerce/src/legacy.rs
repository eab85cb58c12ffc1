//! Adapter for stock records from the old inventory system.

use crate::money::Money;
use crate::priceable::Priceable;
use serde::{Deserialize, Serialize};

/// A stock record from the old inventory system.
///
/// Prices are integer cents and the record knows nothing of the selling
/// capability; it has to be adapted before the cart will take it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LegacyStockRecord {
    sku: String,
    cost_cents: i64,
}

impl LegacyStockRecord {
    /// Create a legacy record.
    pub fn new(sku: impl Into<String>, cost_cents: i64) -> Self {
        Self {
            sku: sku.into(),
            cost_cents,
        }
    }

    /// The record's SKU.
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// The cost in cents.
    pub fn cost_in_cents(&self) -> i64 {
        self.cost_cents
    }
}

/// Exposes a [`LegacyStockRecord`] as a regular sellable item.
///
/// The minor-unit cost maps exactly onto [`Money`], so no precision is lost
/// in translation; the SKU gets a clearance suffix for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClearanceAdapter {
    record: LegacyStockRecord,
}

impl ClearanceAdapter {
    /// Wrap a legacy record.
    pub fn new(record: LegacyStockRecord) -> Self {
        Self { record }
    }
}

impl Priceable for ClearanceAdapter {
    fn name(&self) -> String {
        format!("{} (Clearance)", self.record.sku())
    }

    fn price(&self) -> Money {
        Money::from_cents(self.record.cost_in_cents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_translate_exactly() {
        let adapted = ClearanceAdapter::new(LegacyStockRecord::new("Floppy Disk 3.5", 500));
        assert_eq!(adapted.price(), Money::from_cents(500));
        assert_eq!(adapted.price().to_string(), "$5.00");
    }

    #[test]
    fn test_name_carries_clearance_suffix() {
        let adapted = ClearanceAdapter::new(LegacyStockRecord::new("Floppy Disk 3.5", 500));
        assert_eq!(adapted.name(), "Floppy Disk 3.5 (Clearance)");
    }
}
