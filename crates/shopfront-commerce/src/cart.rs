//! The session shopping cart.

use crate::money::Money;
use crate::priceable::Priceable;
use std::sync::{Mutex, OnceLock};

/// An ordered collection of sellable items.
///
/// The process-wide instance lives behind [`Cart::shared`]; callers that can
/// thread a cart explicitly (tests, one-shot commands) construct their own
/// with [`Cart::new`].
pub struct Cart {
    items: Vec<Box<dyn Priceable>>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The process-wide shared cart, created on first access.
    ///
    /// `clear` empties the contents but the instance itself lives for the
    /// rest of the process. The mutex serializes access when callers run
    /// concurrently.
    pub fn shared() -> &'static Mutex<Cart> {
        static SHARED: OnceLock<Mutex<Cart>> = OnceLock::new();
        SHARED.get_or_init(|| Mutex::new(Cart::new()))
    }

    /// Append an item.
    pub fn add_item(&mut self, item: impl Priceable + 'static) {
        tracing::info!(item = %item.name(), "added to cart");
        self.items.push(Box::new(item));
    }

    /// The items, in insertion order.
    pub fn items(&self) -> &[Box<dyn Priceable>] {
        &self.items
    }

    /// The item names, in insertion order.
    pub fn item_names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name()).collect()
    }

    /// Sum of item prices, recomputed on every call.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.price()).sum()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all items. The cart itself stays usable.
    pub fn clear(&mut self) {
        self.items.clear();
        tracing::info!("cart cleared");
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
