//! The selling capability.

use crate::money::Money;

/// Anything the storefront can sell: it has a display name and a price.
///
/// Catalog items, built-to-order rigs, bundles, and adapted legacy stock all
/// implement this. The cart and checkout operate on the capability alone, so
/// every item kind is substitutable for every other.
pub trait Priceable: Send {
    /// Display name, used in cart listings and shipping manifests.
    fn name(&self) -> String;

    /// Current price.
    fn price(&self) -> Money;
}

impl<T: Priceable + ?Sized> Priceable for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn price(&self) -> Money {
        (**self).price()
    }
}
