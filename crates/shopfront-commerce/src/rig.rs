//! Built-to-order rigs.
//!
//! A rig accumulates named, priced parts through a fluent builder; its
//! price is always the sum of the parts added so far.

use crate::error::StoreError;
use crate::money::Money;
use crate::priceable::Priceable;

/// Fixed price of the GPU option.
pub const GPU_PRICE: Money = Money::from_cents(50_000);
/// Fixed price of the RAM option.
pub const RAM_PRICE: Money = Money::from_cents(10_000);
/// Fixed price of the RGB lighting option.
pub const RGB_PRICE: Money = Money::from_cents(5_000);

/// A machine assembled from named parts.
///
/// Part order is preserved for display. Once placed in the cart the rig is
/// never mutated again.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomRig {
    parts: Vec<String>,
    cost: Money,
}

impl CustomRig {
    fn empty() -> Self {
        Self {
            parts: Vec::new(),
            cost: Money::ZERO,
        }
    }

    fn add_part(&mut self, name: impl Into<String>, price: Money) {
        self.parts.push(name.into());
        self.cost = self.cost + price;
    }

    /// The part names, in the order they were added.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl Priceable for CustomRig {
    fn name(&self) -> String {
        format!("Custom PC ({})", self.parts.join(", "))
    }

    fn price(&self) -> Money {
        self.cost
    }
}

/// Step-by-step builder for a [`CustomRig`].
///
/// Each step appends one part and returns the builder, so steps chain:
///
/// ```
/// use shopfront_commerce::money::Money;
/// use shopfront_commerce::rig::RigBuilder;
///
/// let rig = RigBuilder::new()
///     .cpu("High-End CPU", Money::from_cents(30_000))
///     .gpu()
///     .ram()
///     .build()
///     .unwrap();
/// assert_eq!(rig.parts().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct RigBuilder {
    rig: CustomRig,
}

impl RigBuilder {
    /// Start an empty build.
    pub fn new() -> Self {
        Self {
            rig: CustomRig::empty(),
        }
    }

    /// Add a CPU of the given kind at the given price.
    pub fn cpu(mut self, kind: impl Into<String>, price: Money) -> Self {
        self.rig.add_part(kind, price);
        self
    }

    /// Add the GPU option.
    pub fn gpu(mut self) -> Self {
        self.rig.add_part("RTX 4090 GPU", GPU_PRICE);
        self
    }

    /// Add the RAM option.
    pub fn ram(mut self) -> Self {
        self.rig.add_part("32GB RAM", RAM_PRICE);
        self
    }

    /// Add the RGB lighting option.
    pub fn rgb_lighting(mut self) -> Self {
        self.rig.add_part("RGB Lights", RGB_PRICE);
        self
    }

    /// Finalize the build.
    ///
    /// Fails if no parts were added.
    pub fn build(self) -> Result<CustomRig, StoreError> {
        if self.rig.parts.is_empty() {
            return Err(StoreError::EmptyBuild);
        }
        Ok(self.rig)
    }
}

impl Default for CustomRig {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chained_build() {
        let rig = RigBuilder::new()
            .cpu("CPU-X", Money::from_cents(15_000))
            .gpu()
            .ram()
            .build()
            .unwrap();

        assert_eq!(rig.parts().len(), 3);
        assert_eq!(rig.price(), Money::from_cents(75_000));
    }

    #[test]
    fn test_part_order_preserved_in_name() {
        let rig = RigBuilder::new()
            .cpu("Base CPU", Money::from_cents(15_000))
            .rgb_lighting()
            .build()
            .unwrap();

        assert_eq!(rig.name(), "Custom PC (Base CPU, RGB Lights)");
    }

    #[test]
    fn test_cost_tracks_parts() {
        let rig = RigBuilder::new()
            .cpu("Base CPU", Money::from_cents(15_000))
            .gpu()
            .ram()
            .rgb_lighting()
            .build()
            .unwrap();

        assert_eq!(rig.price(), Money::from_cents(15_000 + 50_000 + 10_000 + 5_000));
    }

    #[test]
    fn test_empty_build_fails() {
        assert_eq!(RigBuilder::new().build(), Err(StoreError::EmptyBuild));
    }
}
