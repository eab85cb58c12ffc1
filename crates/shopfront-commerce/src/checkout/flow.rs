//! Order placement.

use crate::cart::Cart;
use crate::checkout::payment::processor_for;
use crate::checkout::shipping::{Carrier, Delivery, DeliverySpeed};
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Everything the caller needs to confirm a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderConfirmation {
    /// Carrier manifest line.
    pub manifest: String,
    /// Estimated-arrival description.
    pub eta: String,
    /// Name of the payment method that captured the charge.
    pub payment_method: String,
    /// Amount charged.
    pub total: Money,
}

/// Run checkout against the cart.
///
/// Resolves the carrier, delivery-speed, and payment tags, dispatches the
/// shipment, captures the charge for the cart total, and clears the cart.
///
/// Every fallible step precedes every side effect: an empty cart or an
/// unknown tag aborts with the cart untouched.
pub fn place_order(
    cart: &mut Cart,
    carrier_tag: &str,
    speed_tag: &str,
    payment_tag: &str,
) -> Result<OrderConfirmation, StoreError> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }

    let carrier = Carrier::from_tag(carrier_tag)?;
    let speed = DeliverySpeed::from_tag(speed_tag)?;
    let processor = processor_for(payment_tag)?;

    let shipment = Delivery::new(speed, carrier).dispatch(&cart.item_names());
    let total = cart.total();
    processor.pay(total);
    cart.clear();

    Ok(OrderConfirmation {
        manifest: shipment.manifest,
        eta: shipment.eta,
        payment_method: processor.label().to_string(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    fn cart_with_item(cents: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CatalogItem::new("Thing", Money::from_cents(cents)));
        cart
    }

    #[test]
    fn test_empty_cart_rejected_before_anything_else() {
        let mut cart = Cart::new();
        let result = place_order(&mut cart, "fedex", "standard", "credit");
        assert_eq!(result, Err(StoreError::EmptyCart));
    }

    #[test]
    fn test_order_charges_total_and_clears_cart() {
        let mut cart = cart_with_item(300_000);
        let confirmation = place_order(&mut cart, "fedex", "express", "credit").unwrap();

        assert_eq!(confirmation.total, Money::from_cents(300_000));
        assert_eq!(confirmation.eta, "Arrives tomorrow");
        assert_eq!(confirmation.payment_method, "Visa/Mastercard");
        assert!(confirmation.manifest.contains("Thing"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_tag_leaves_cart_intact() {
        let mut cart = cart_with_item(1_000);

        let result = place_order(&mut cart, "pigeon", "standard", "credit");
        assert_eq!(
            result,
            Err(StoreError::UnknownCarrier("pigeon".to_string()))
        );
        assert_eq!(cart.len(), 1);

        let result = place_order(&mut cart, "fedex", "standard", "cash");
        assert_eq!(
            result,
            Err(StoreError::UnknownPaymentMethod("cash".to_string()))
        );
        assert_eq!(cart.len(), 1);
    }
}
