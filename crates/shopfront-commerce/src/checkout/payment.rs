//! Payment behavior selection.

use crate::error::StoreError;
use crate::money::Money;

/// A payment behavior, selected per checkout by tag.
///
/// Implementations are stateless; the charge itself is a log-level side
/// effect at this scale of the system.
pub trait PaymentProcessor: Send + std::fmt::Debug {
    /// Human-readable method name for confirmations.
    fn label(&self) -> &'static str;

    /// Capture the charge.
    fn pay(&self, amount: Money);
}

/// Charges cards directly.
#[derive(Debug)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn label(&self) -> &'static str {
        "Visa/Mastercard"
    }

    fn pay(&self, amount: Money) {
        tracing::info!(%amount, "charged to Visa/Mastercard");
    }
}

/// Hands the charge off to PayPal.
#[derive(Debug)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn label(&self) -> &'static str {
        "PayPal"
    }

    fn pay(&self, amount: Money) {
        tracing::info!(%amount, "redirected to PayPal");
    }
}

/// Resolve a payment-method tag to its processor.
pub fn processor_for(tag: &str) -> Result<Box<dyn PaymentProcessor>, StoreError> {
    match tag.to_ascii_lowercase().as_str() {
        "credit" => Ok(Box::new(CreditCardProcessor)),
        "paypal" => Ok(Box::new(PayPalProcessor)),
        _ => Err(StoreError::UnknownPaymentMethod(tag.to_string())),
    }
}
