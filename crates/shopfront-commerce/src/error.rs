//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Brand tag matched no known product family.
    #[error("unknown product family: {0}")]
    UnknownFamily(String),

    /// Carrier tag matched no known carrier.
    #[error("unknown carrier: {0}")]
    UnknownCarrier(String),

    /// Delivery-speed tag matched no known speed profile.
    #[error("unknown delivery speed: {0}")]
    UnknownDeliverySpeed(String),

    /// Payment tag matched no known payment method.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// A rig build finished without any parts selected.
    #[error("no parts selected for the build")]
    EmptyBuild,
}
