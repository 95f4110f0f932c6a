//! Stored shape of a trade route.
//!
//! Storage uses `distance` / `fuelCost` / `tradeValue`; the in-process
//! [`PricedRoute`] uses `totalDistance` / `totalFuelCost` / `totalTradeValue`.
//! Records accept either spelling when read back.

use serde::{Deserialize, Serialize};

use crate::domain::{CargoLine, PricedRoute, RouteFigures, RouteType, SystemId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRouteRecord {
    pub name: String,
    pub source_system: SystemId,
    pub destination_system: SystemId,
    #[serde(default)]
    pub waypoints: Vec<SystemId>,
    #[serde(alias = "totalDistance")]
    pub distance: f64,
    #[serde(alias = "totalFuelCost")]
    pub fuel_cost: f64,
    #[serde(alias = "totalTradeValue")]
    pub trade_value: f64,
    pub profit: f64,
    #[serde(default)]
    pub is_optimal: bool,
    #[serde(alias = "type")]
    pub route_type: RouteType,
    #[serde(default)]
    pub cargo: Vec<CargoLine>,
    #[serde(default)]
    pub status: RouteStatus,
}

impl TradeRouteRecord {
    /// Value of the listed cargo at its recorded prices.
    pub fn calculate_total_value(&self) -> f64 {
        self.cargo.iter().map(|c| c.amount * c.price).sum()
    }

    /// Trade value per unit of fuel cost, 0 for free trips.
    pub fn calculate_efficiency(&self) -> f64 {
        if self.fuel_cost == 0.0 {
            return 0.0;
        }
        self.trade_value / self.fuel_cost
    }
}

impl From<&PricedRoute> for TradeRouteRecord {
    fn from(route: &PricedRoute) -> Self {
        Self {
            name: route.name.clone(),
            source_system: route.source_system.clone(),
            destination_system: route.destination_system.clone(),
            waypoints: route.waypoints.clone(),
            distance: route.total_distance,
            fuel_cost: route.total_fuel_cost,
            trade_value: route.total_trade_value,
            profit: route.profit,
            is_optimal: route.is_optimal,
            route_type: route.route_type,
            cargo: route.cargo.clone(),
            status: RouteStatus::Active,
        }
    }
}

impl RouteFigures for TradeRouteRecord {
    fn trade_value(&self) -> f64 {
        self.trade_value
    }

    fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }

    fn is_active(&self) -> bool {
        self.status == RouteStatus::Active
    }
}

pub fn to_records(routes: &[PricedRoute]) -> Vec<TradeRouteRecord> {
    routes.iter().map(TradeRouteRecord::from).collect()
}
