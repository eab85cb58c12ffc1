//! Shipping behavior, split across two independent axes.
//!
//! The carrier knows how to describe a load; the delivery speed knows when
//! it lands. Any carrier combines with any speed, which is why the axes are
//! not enumerated as a full product.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// A shipping carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    FedEx,
    Ups,
    Dhl,
}

impl Carrier {
    /// Parse a carrier tag.
    pub fn from_tag(tag: &str) -> Result<Self, StoreError> {
        match tag.to_ascii_lowercase().as_str() {
            "fedex" => Ok(Carrier::FedEx),
            "ups" => Ok(Carrier::Ups),
            "dhl" => Ok(Carrier::Dhl),
            _ => Err(StoreError::UnknownCarrier(tag.to_string())),
        }
    }

    /// Get the carrier tag (e.g. "fedex").
    pub fn tag(&self) -> &'static str {
        match self {
            Carrier::FedEx => "fedex",
            Carrier::Ups => "ups",
            Carrier::Dhl => "dhl",
        }
    }

    /// Manifest line for a load of items.
    pub fn ship(&self, item_names: &[String]) -> String {
        let load = item_names.join(", ");
        match self {
            Carrier::FedEx => format!("FedEx plane carrying: {load}"),
            Carrier::Ups => format!("UPS brown truck carrying: {load}"),
            Carrier::Dhl => format!("DHL cargo ship carrying: {load}"),
        }
    }

    /// All carriers, for selection menus.
    pub fn all() -> [Carrier; 3] {
        [Carrier::FedEx, Carrier::Ups, Carrier::Dhl]
    }
}

/// A delivery-speed profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliverySpeed {
    Standard,
    Express,
}

impl DeliverySpeed {
    /// Parse a speed tag.
    pub fn from_tag(tag: &str) -> Result<Self, StoreError> {
        match tag.to_ascii_lowercase().as_str() {
            "standard" => Ok(DeliverySpeed::Standard),
            "express" => Ok(DeliverySpeed::Express),
            _ => Err(StoreError::UnknownDeliverySpeed(tag.to_string())),
        }
    }

    /// Get the speed tag (e.g. "standard").
    pub fn tag(&self) -> &'static str {
        match self {
            DeliverySpeed::Standard => "standard",
            DeliverySpeed::Express => "express",
        }
    }

    /// Estimated-arrival description. Depends on the speed alone.
    pub fn eta(&self) -> &'static str {
        match self {
            DeliverySpeed::Standard => "Arrives in 5-7 days",
            DeliverySpeed::Express => "Arrives tomorrow",
        }
    }

    /// All speed profiles, for selection menus.
    pub fn all() -> [DeliverySpeed; 2] {
        [DeliverySpeed::Standard, DeliverySpeed::Express]
    }
}

/// A delivery: an independently chosen speed riding on a carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    speed: DeliverySpeed,
    carrier: Carrier,
}

impl Delivery {
    /// Combine a speed profile with a carrier.
    pub fn new(speed: DeliverySpeed, carrier: Carrier) -> Self {
        Self { speed, carrier }
    }

    /// Dispatch a load: the carrier produces the manifest, the speed the ETA.
    pub fn dispatch(&self, item_names: &[String]) -> Shipment {
        let manifest = self.carrier.ship(item_names);
        tracing::info!(speed = self.speed.tag(), %manifest, "dispatching shipment");
        Shipment {
            manifest,
            eta: self.speed.eta().to_string(),
        }
    }
}

/// The outcome of dispatching a delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shipment {
    /// Carrier manifest line naming the items on board.
    pub manifest: String,
    /// Estimated-arrival description.
    pub eta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_from_tag() {
        assert_eq!(Carrier::from_tag("FedEx"), Ok(Carrier::FedEx));
        assert_eq!(
            Carrier::from_tag("pigeon"),
            Err(StoreError::UnknownCarrier("pigeon".to_string()))
        );
    }

    #[test]
    fn test_speed_from_tag() {
        assert_eq!(DeliverySpeed::from_tag("express"), Ok(DeliverySpeed::Express));
        assert_eq!(
            DeliverySpeed::from_tag("teleport"),
            Err(StoreError::UnknownDeliverySpeed("teleport".to_string()))
        );
    }

    #[test]
    fn test_manifest_names_the_load() {
        let names = vec!["Fruit iPhone 15".to_string(), "32GB RAM".to_string()];
        let manifest = Carrier::Ups.ship(&names);
        assert_eq!(manifest, "UPS brown truck carrying: Fruit iPhone 15, 32GB RAM");
    }

    #[test]
    fn test_every_axis_combination_dispatches() {
        let names = vec!["Thing".to_string()];
        for carrier in Carrier::all() {
            for speed in DeliverySpeed::all() {
                let shipment = Delivery::new(speed, carrier).dispatch(&names);
                assert!(!shipment.manifest.is_empty());
                assert!(!shipment.eta.is_empty());
            }
        }
    }

    #[test]
    fn test_eta_depends_on_speed_alone() {
        let names = vec!["Thing".to_string()];
        for carrier in Carrier::all() {
            let shipment = Delivery::new(DeliverySpeed::Express, carrier).dispatch(&names);
            assert_eq!(shipment.eta, "Arrives tomorrow");
        }
    }
}
