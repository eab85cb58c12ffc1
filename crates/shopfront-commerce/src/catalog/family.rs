//! Brand families and their matched product lines.

use crate::catalog::CatalogItem;
use crate::error::StoreError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product brand family.
///
/// Each family produces devices with family-consistent naming and pricing;
/// a product line never mixes devices from different families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Fruit,
    Robo,
}

impl Brand {
    /// Parse a brand tag.
    ///
    /// Unrecognized tags are an error; there is no fallback family.
    pub fn from_tag(tag: &str) -> Result<Self, StoreError> {
        match tag.to_ascii_lowercase().as_str() {
            "fruit" => Ok(Brand::Fruit),
            "robo" => Ok(Brand::Robo),
            _ => Err(StoreError::UnknownFamily(tag.to_string())),
        }
    }

    /// Get the brand tag (e.g. "fruit").
    pub fn tag(&self) -> &'static str {
        match self {
            Brand::Fruit => "fruit",
            Brand::Robo => "robo",
        }
    }

    /// The family's laptop model.
    pub fn laptop(&self) -> CatalogItem {
        match self {
            Brand::Fruit => CatalogItem::new("Fruit MacBook Pro", Money::from_cents(200_000)),
            Brand::Robo => CatalogItem::new("Robo ThinkPad", Money::from_cents(150_000)),
        }
    }

    /// The family's phone model.
    pub fn phone(&self) -> CatalogItem {
        match self {
            Brand::Fruit => CatalogItem::new("Fruit iPhone 15", Money::from_cents(100_000)),
            Brand::Robo => CatalogItem::new("Robo Galaxy S24", Money::from_cents(90_000)),
        }
    }

    /// A matched laptop + phone pair from this family.
    pub fn product_line(&self) -> ProductLine {
        tracing::debug!(brand = self.tag(), "assembling product line");
        ProductLine {
            laptop: self.laptop(),
            phone: self.phone(),
        }
    }
}

/// A matched set of devices sharing one brand identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLine {
    /// The family's laptop.
    pub laptop: CatalogItem,
    /// The family's phone.
    pub phone: CatalogItem,
}
