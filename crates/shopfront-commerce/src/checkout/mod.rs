//! Checkout module.
//!
//! Contains shipping behavior selection, payment behavior selection, and
//! the order placement flow.

mod flow;
mod payment;
mod shipping;

pub use flow::{place_order, OrderConfirmation};
pub use payment::{processor_for, CreditCardProcessor, PayPalProcessor, PaymentProcessor};
pub use shipping::{Carrier, Delivery, DeliverySpeed, Shipment};
