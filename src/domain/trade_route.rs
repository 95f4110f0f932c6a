//! Trade route enumeration, pricing and ranking.

use std::{cmp::Ordering, collections::HashSet, fmt, iter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::cargo::allocate;
use super::entities::{FuelProfile, StarSystem, SystemId};
use super::geometry::distance;

/// Shape of a route, derived from its waypoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteType {
    Direct,
    Hub,
    MultiHop,
}

impl RouteType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Hub => "hub",
            Self::MultiHop => "multi-hop",
        }
    }
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Fuel burned per distance unit, by route shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuelRates {
    pub direct: f64,
    /// Hubs sell cheaper fuel.
    pub hub: f64,
    pub multi_hop: f64,
}

impl Default for FuelRates {
    fn default() -> Self {
        Self {
            direct: 0.1,
            hub: 0.08,
            multi_hop: 0.12,
        }
    }
}

impl FuelRates {
    pub fn rate(&self, route_type: RouteType) -> f64 {
        match route_type {
            RouteType::Direct => self.direct,
            RouteType::Hub => self.hub,
            RouteType::MultiHop => self.multi_hop,
        }
    }
}

/// Ordered stops of a route: source, waypoints in visiting order, destination.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateRoute<'a> {
    stops: Vec<&'a StarSystem>,
}

impl<'a> CandidateRoute<'a> {
    pub fn direct(source: &'a StarSystem, destination: &'a StarSystem) -> Self {
        Self {
            stops: vec![source, destination],
        }
    }

    pub fn via(
        source: &'a StarSystem,
        waypoints: Vec<&'a StarSystem>,
        destination: &'a StarSystem,
    ) -> Self {
        let mut stops = Vec::with_capacity(waypoints.len() + 2);
        stops.push(source);
        stops.extend(waypoints);
        stops.push(destination);
        Self { stops }
    }

    pub fn source(&self) -> &'a StarSystem {
        self.stops[0]
    }

    pub fn destination(&self) -> &'a StarSystem {
        self.stops[self.stops.len() - 1]
    }

    pub fn waypoints(&self) -> &[&'a StarSystem] {
        &self.stops[1..self.stops.len() - 1]
    }

    pub fn stops(&self) -> &[&'a StarSystem] {
        &self.stops
    }

    pub fn route_type(&self) -> RouteType {
        match self.waypoints() {
            [] => RouteType::Direct,
            [only] if only.is_trade_hub => RouteType::Hub,
            _ => RouteType::MultiHop,
        }
    }

    /// Distance of every consecutive leg, in travel order.
    pub fn leg_distances(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops
            .iter()
            .tuple_windows()
            .map(|(from, to)| distance(from.coordinate, to.coordinate))
    }

    /// Display name, e.g. `Sol → Vega → Altair`.
    pub fn name(&self) -> String {
        self.stops.iter().map(|s| s.name.as_str()).join(" → ")
    }
}

/// Every candidate between `source` and `destination`: the direct route first, then
/// each combination of 1..=`max_waypoints` other systems, kept in universe order.
///
/// The stream is lazy; callers bound the work with `max_waypoints` or `take`.
pub fn enumerate_routes<'a>(
    source: &'a StarSystem,
    destination: &'a StarSystem,
    universe: &'a [StarSystem],
    max_waypoints: usize,
) -> impl Iterator<Item = CandidateRoute<'a>> + 'a {
    let pool = waypoint_pool(source, destination, universe);
    let max_k = max_waypoints.min(pool.len());

    iter::once(CandidateRoute::direct(source, destination)).chain((1..=max_k).flat_map(
        move |k| {
            pool.clone()
                .into_iter()
                .combinations(k)
                .map(move |waypoints| CandidateRoute::via(source, waypoints, destination))
        },
    ))
}

/// Systems eligible as waypoints, without duplicate identifiers.
pub fn waypoint_pool<'a>(
    source: &StarSystem,
    destination: &StarSystem,
    universe: &'a [StarSystem],
) -> Vec<&'a StarSystem> {
    let mut seen = HashSet::new();
    universe
        .iter()
        .filter(|s| s.id != source.id && s.id != destination.id)
        .filter(|s| seen.insert(s.id.clone()))
        .collect()
}

/// `1 + Σ C(pool_size, k)` for `k` in `1..=max_waypoints`, saturating.
pub fn candidate_count(pool_size: usize, max_waypoints: usize) -> u128 {
    let n = pool_size as u128;
    let mut total: u128 = 1;
    let mut binomial: u128 = 1;
    for k in 1..=max_waypoints.min(pool_size) as u128 {
        // C(n, k) = C(n, k - 1) * (n - k + 1) / k divides exactly.
        let Some(product) = binomial.checked_mul(n - k + 1) else {
            return u128::MAX;
        };
        binomial = product / k;
        total = total.saturating_add(binomial);
    }
    total
}

/// Cargo carried on a route, as stored with the route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CargoLine {
    pub resource_name: String,
    pub amount: f64,
    pub price: f64,
}

/// A candidate route with its costs and trade value worked out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedRoute {
    pub name: String,
    pub source_system: SystemId,
    pub destination_system: SystemId,
    pub waypoints: Vec<SystemId>,
    pub route_type: RouteType,
    pub total_distance: f64,
    pub total_fuel_consumption: f64,
    pub total_fuel_cost: f64,
    pub total_trade_value: f64,
    pub profit: f64,
    /// Profit per unit of fuel cost; 0 when the trip costs nothing.
    pub efficiency: f64,
    pub fuel_type: String,
    pub fuel_efficiency: f64,
    pub cargo: Vec<CargoLine>,
    pub is_optimal: bool,
}

/// Prices `route` for `fuel`. Cargo comes from the source system only.
pub fn price_route(
    route: &CandidateRoute<'_>,
    fuel: &FuelProfile,
    rates: &FuelRates,
    capacity: u32,
) -> PricedRoute {
    let rate = rates.rate(route.route_type());
    let efficiency_factor = fuel.efficiency_factor();

    let mut total_distance = 0.0;
    let mut total_fuel_consumption = 0.0;
    for leg in route.leg_distances() {
        total_distance += leg;
        total_fuel_consumption += (leg * rate) / efficiency_factor;
    }
    let total_fuel_cost = total_fuel_consumption * fuel.cost;

    let allocation = allocate(&route.source().resources, fuel.efficiency, capacity);
    let total_trade_value = allocation.total_value;
    let profit = total_trade_value - total_fuel_cost;
    let efficiency = if total_fuel_cost > 0.0 {
        profit / total_fuel_cost
    } else {
        0.0
    };

    PricedRoute {
        name: route.name(),
        source_system: route.source().id.clone(),
        destination_system: route.destination().id.clone(),
        waypoints: route.waypoints().iter().map(|s| s.id.clone()).collect(),
        route_type: route.route_type(),
        total_distance,
        total_fuel_consumption,
        total_fuel_cost,
        total_trade_value,
        profit,
        efficiency,
        fuel_type: fuel.name.clone(),
        fuel_efficiency: fuel.efficiency,
        cargo: allocation
            .selected
            .into_iter()
            .map(|s| CargoLine {
                resource_name: s.name,
                amount: s.selected_amount,
                price: s.price,
            })
            .collect(),
        is_optimal: false,
    }
}

/// Orders routes by descending profit and flags the first one as optimal.
/// Equal profits keep their generation order.
pub fn rank_routes(mut routes: Vec<PricedRoute>) -> Vec<PricedRoute> {
    routes.sort_by(|a, b| b.profit.partial_cmp(&a.profit).unwrap_or(Ordering::Equal));
    for (i, route) in routes.iter_mut().enumerate() {
        route.is_optimal = i == 0;
    }
    routes
}
