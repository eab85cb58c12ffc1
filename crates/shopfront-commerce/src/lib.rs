//! Storefront domain types and checkout logic for Shopfront.
//!
//! This crate provides the domain model behind the Shopfront demo store:
//!
//! - **Catalog**: leaf items and brand product families
//! - **Rig**: built-to-order machines assembled through a fluent builder
//! - **Bundle**: discounted composites of other sellable items
//! - **Legacy**: adapter for cents-priced records from the old inventory
//! - **Cart**: the session cart, shared process-wide
//! - **Checkout**: carrier/speed shipping selection, payment selection,
//!   and order placement
//!
//! Everything sellable implements the one [`Priceable`] capability, so the
//! cart and checkout never care which kind of item they are holding.
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! // A matched product family
//! let line = Brand::Fruit.product_line();
//!
//! // Fill a cart
//! let mut cart = Cart::new();
//! cart.add_item(line.laptop);
//! cart.add_item(line.phone);
//! assert_eq!(cart.total(), Money::from_cents(300_000));
//!
//! // Check out
//! let confirmation = place_order(&mut cart, "fedex", "express", "credit").unwrap();
//! assert_eq!(confirmation.total, Money::from_cents(300_000));
//! assert!(cart.is_empty());
//! ```

pub mod bundle;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod legacy;
pub mod money;
pub mod priceable;
pub mod rig;

pub use cart::Cart;
pub use error::StoreError;
pub use money::Money;
pub use priceable::Priceable;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::money::Money;
    pub use crate::priceable::Priceable;

    // Catalog
    pub use crate::catalog::{Brand, CatalogItem, ProductLine};

    // Rig
    pub use crate::rig::{CustomRig, RigBuilder};

    // Bundle
    pub use crate::bundle::{Bundle, BUNDLE_DISCOUNT};

    // Legacy
    pub use crate::legacy::{ClearanceAdapter, LegacyStockRecord};

    // Cart
    pub use crate::cart::Cart;

    // Checkout
    pub use crate::checkout::{
        place_order, processor_for, Carrier, Delivery, DeliverySpeed, OrderConfirmation,
        PaymentProcessor, Shipment,
    };
}
