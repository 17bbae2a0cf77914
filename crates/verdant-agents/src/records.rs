// ABOUTME: Record types produced by the data generator: suppliers, routes, and products.
// ABOUTME: Field names serialize in camelCase to match the wire format clients expect.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A candidate supplier with sustainability attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Ulid,
    pub name: String,
    pub location: String,
    pub sustainability_score: u32,
    pub cost: u32,
    pub certifications: Vec<String>,
    /// kg CO2
    pub carbon_footprint: u32,
}

/// How goods move along a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Truck,
    Rail,
    Ship,
    Air,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Truck,
        TransportMode::Rail,
        TransportMode::Ship,
        TransportMode::Air,
    ];

    /// kg CO2 emitted per mile.
    pub fn emissions_per_mile(self) -> f64 {
        match self {
            TransportMode::Truck => 0.4,
            TransportMode::Rail => 0.1,
            TransportMode::Ship => 0.05,
            TransportMode::Air => 1.2,
        }
    }
}

/// A logistics lane between two cities.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: Ulid,
    pub origin: String,
    pub destination: String,
    pub mode: TransportMode,
    /// miles
    pub distance: u32,
    pub emissions_per_mile: f64,
    pub cost: u32,
}

/// An inventory line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Ulid,
    pub name: String,
    pub category: String,
    pub current_stock: u32,
    pub reorder_point: u32,
    /// Fraction in [0, 0.1).
    pub waste_rate: f64,
    /// Per unit.
    pub holding_cost: u32,
}

/// Full output of one generator invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyChainData {
    pub suppliers: Vec<Supplier>,
    pub routes: Vec<Route>,
    pub products: Vec<Product>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn transport_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_value(TransportMode::Ship).unwrap(), json!("ship"));
        let mode: TransportMode = serde_json::from_value(json!("air")).unwrap();
        assert_eq!(mode, TransportMode::Air);
    }

    #[test]
    fn emission_table() {
        assert_eq!(TransportMode::Truck.emissions_per_mile(), 0.4);
        assert_eq!(TransportMode::Rail.emissions_per_mile(), 0.1);
        assert_eq!(TransportMode::Ship.emissions_per_mile(), 0.05);
        assert_eq!(TransportMode::Air.emissions_per_mile(), 1.2);
    }

    #[test]
    fn supplier_uses_camel_case_fields() {
        let supplier = Supplier {
            id: Ulid::new(),
            name: "GreenTech 1".into(),
            location: "USA".into(),
            sustainability_score: 80,
            cost: 40,
            certifications: vec!["LEED".into()],
            carbon_footprint: 250,
        };
        let value = serde_json::to_value(&supplier).unwrap();
        assert_eq!(value["sustainabilityScore"], 80);
        assert_eq!(value["carbonFootprint"], 250);
        assert!(value.get("sustainability_score").is_none());
    }
}
