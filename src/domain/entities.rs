use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Position of a star system in galactic space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Opaque star system identifier. Stored documents call this `_id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(pub String);

impl SystemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SystemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A tradable good offered at a star system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    /// Percentage in `0..=100`.
    pub availability: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Resource {
    pub fn new(name: impl Into<String>, availability: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            availability,
            price,
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight used for scoring. Missing or non-positive weights count as 1.
    pub fn effective_weight(&self) -> f64 {
        match self.weight {
            Some(w) if w > 0.0 => w,
            _ => 1.0,
        }
    }

    /// Integer weight occupied in the cargo hold.
    pub fn slot_weight(&self) -> usize {
        self.effective_weight().ceil() as usize
    }

    /// Raw value of the full available stock, before any fuel adjustment.
    pub fn stock_value(&self) -> f64 {
        self.availability * self.price
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionEntry {
    pub resource_name: String,
    pub amount: f64,
}

/// Refuelling facilities of a system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuelStation {
    pub available: bool,
    pub price: f64,
    pub fuel_types: Vec<FuelProfile>,
}

impl Default for FuelStation {
    fn default() -> Self {
        Self {
            available: true,
            price: 1.0,
            fuel_types: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    /// Documents without an id get a fresh one.
    #[serde(alias = "_id", default = "SystemId::generate")]
    pub id: SystemId,
    pub name: String,
    #[serde(alias = "coordinates")]
    pub coordinate: Coordinate,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub consumption: Vec<ConsumptionEntry>,
    #[serde(default)]
    pub is_trade_hub: bool,
    /// Signed percentage in `-100..=100`.
    #[serde(default)]
    pub economic_growth: f64,
    #[serde(default)]
    pub fuel_station: FuelStation,
}

impl StarSystem {
    pub fn new(id: impl Into<SystemId>, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
            population: 0,
            resources: Vec::new(),
            consumption: Vec::new(),
            is_trade_hub: false,
            economic_growth: 0.0,
            fuel_station: FuelStation::default(),
        }
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.push(resource);
        self
    }

    pub fn as_trade_hub(mut self) -> Self {
        self.is_trade_hub = true;
        self
    }

    pub fn with_economic_growth(mut self, growth: f64) -> Self {
        self.economic_growth = growth;
        self
    }

    /// Market size estimate: resource stock value scaled by population in millions.
    pub fn trade_value(&self) -> f64 {
        let resource_value: f64 = self.resources.iter().map(Resource::stock_value).sum();
        resource_value * (self.population as f64 / 1_000_000.0)
    }

    pub fn find_resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }
}

impl From<String> for SystemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Fuel used for a trip. Higher efficiency burns less per distance unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    pub name: String,
    /// Cost per unit of fuel consumed.
    pub cost: f64,
    /// Percentage in `0..=100`.
    pub efficiency: f64,
}

impl FuelProfile {
    pub fn new(name: impl Into<String>, cost: f64, efficiency: f64) -> Self {
        Self {
            name: name.into(),
            cost,
            efficiency,
        }
    }

    /// Fraction in `0.0..=1.0`.
    pub fn efficiency_factor(&self) -> f64 {
        self.efficiency / 100.0
    }
}

/// Fuel presets offered before the user defines their own.
pub fn default_fuel_profiles() -> Vec<FuelProfile> {
    vec![
        FuelProfile::new("Fuel A", 120.0, 70.0),
        FuelProfile::new("Fuel B", 150.0, 85.0),
        FuelProfile::new("Fuel C", 200.0, 95.0),
        FuelProfile::new("Fuel D", 80.0, 50.0),
        FuelProfile::new("Fuel E", 300.0, 98.0),
    ]
}
