//! Entry point for route optimization: validates a request, then enumerates,
//! prices and ranks every candidate between two systems.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, event, Level};

use super::cargo::DEFAULT_CAPACITY;
use super::entities::{FuelProfile, StarSystem, SystemId};
use super::trade_route::{
    candidate_count, enumerate_routes, price_route, rank_routes, waypoint_pool, FuelRates,
    PricedRoute, RouteType,
};

/// Tunables shared by every optimization call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizerConfig {
    /// Cargo hold size in weight units.
    pub capacity: u32,
    pub fuel_rates: FuelRates,
    /// Used when the caller does not ask for a specific waypoint count.
    pub max_waypoints: usize,
    /// Stop pricing after this many candidates.
    pub candidate_limit: Option<usize>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            fuel_rates: FuelRates::default(),
            max_waypoints: 2,
            candidate_limit: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct OptimizationRequest<'a> {
    pub source: &'a SystemId,
    pub destination: &'a SystemId,
    pub universe: &'a [StarSystem],
    pub fuel: &'a FuelProfile,
    pub max_waypoints: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("source and destination are the same system ({0})")]
    SameEndpoints(SystemId),
    #[error("system {0} is not part of the universe")]
    UnknownSystem(SystemId),
    #[error("fuel cost must be finite and non-negative, got {0}")]
    FuelCost(f64),
    #[error("fuel efficiency must be within (0, 100], got {0}")]
    FuelEfficiency(f64),
    #[error("fuel rate for {route_type} routes must be finite and non-negative, got {value}")]
    FuelRate { route_type: RouteType, value: f64 },
    #[error("system {0} has non-finite coordinates")]
    Coordinate(SystemId),
    #[error("resource {resource} of system {system} has invalid {field}: {value}")]
    Resource {
        system: SystemId,
        resource: String,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

#[derive(Clone, Debug, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Ranked routes for the request; the first one is flagged optimal.
    pub fn optimize(
        &self,
        request: &OptimizationRequest<'_>,
    ) -> Result<Vec<PricedRoute>, OptimizeError> {
        let (source, destination) = self.validate(request)?;

        let pool_size = waypoint_pool(source, destination, request.universe).len();
        debug!(
            "Enumerating routes {} -> {}: {} waypoint candidates, up to {} waypoints ({} routes)",
            source.name,
            destination.name,
            pool_size,
            request.max_waypoints,
            candidate_count(pool_size, request.max_waypoints)
        );

        let limit = self.config.candidate_limit.unwrap_or(usize::MAX);
        let priced: Vec<PricedRoute> =
            enumerate_routes(source, destination, request.universe, request.max_waypoints)
                .take(limit)
                .map(|route| {
                    price_route(&route, request.fuel, &self.config.fuel_rates, self.config.capacity)
                })
                .collect();

        let ranked = rank_routes(priced);
        if let Some(best) = ranked.first() {
            event!(
                Level::INFO,
                "Ranked {} routes, optimal: {} (profit {:.2})",
                ranked.len(),
                best.name,
                best.profit
            );
        }
        Ok(ranked)
    }

    fn validate<'a>(
        &self,
        request: &OptimizationRequest<'a>,
    ) -> Result<(&'a StarSystem, &'a StarSystem), InvalidInput> {
        if request.source == request.destination {
            return Err(InvalidInput::SameEndpoints(request.source.clone()));
        }

        let fuel = request.fuel;
        if !fuel.cost.is_finite() || fuel.cost < 0.0 {
            return Err(InvalidInput::FuelCost(fuel.cost));
        }
        if !fuel.efficiency.is_finite() || fuel.efficiency <= 0.0 || fuel.efficiency > 100.0 {
            return Err(InvalidInput::FuelEfficiency(fuel.efficiency));
        }

        let rates = &self.config.fuel_rates;
        for route_type in [RouteType::Direct, RouteType::Hub, RouteType::MultiHop] {
            let value = rates.rate(route_type);
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidInput::FuelRate { route_type, value });
            }
        }

        let source = find_system(request.universe, request.source)?;
        let destination = find_system(request.universe, request.destination)?;

        if let Some(system) = request.universe.iter().find(|s| !s.coordinate.is_finite()) {
            return Err(InvalidInput::Coordinate(system.id.clone()));
        }

        for resource in &source.resources {
            let invalid = |field: &'static str, value: f64| InvalidInput::Resource {
                system: source.id.clone(),
                resource: resource.name.clone(),
                field,
                value,
            };
            if !resource.availability.is_finite()
                || !(0.0..=100.0).contains(&resource.availability)
            {
                return Err(invalid("availability", resource.availability));
            }
            if !resource.price.is_finite() || resource.price < 0.0 {
                return Err(invalid("price", resource.price));
            }
            if let Some(weight) = resource.weight.filter(|w| !w.is_finite()) {
                return Err(invalid("weight", weight));
            }
        }

        Ok((source, destination))
    }
}

fn find_system<'a>(
    universe: &'a [StarSystem],
    id: &SystemId,
) -> Result<&'a StarSystem, InvalidInput> {
    universe
        .iter()
        .find(|s| &s.id == id)
        .ok_or_else(|| InvalidInput::UnknownSystem(id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Coordinate, Resource};
    use tracing_test::traced_test;

    fn universe() -> Vec<StarSystem> {
        vec![
            StarSystem::new("s", "S", Coordinate::new(0.0, 0.0, 0.0))
                .with_resource(Resource::new("Ore", 80.0, 10.0).with_weight(1.0)),
            StarSystem::new("d", "D", Coordinate::new(50.0, 0.0, 0.0)),
            StarSystem::new("a", "A", Coordinate::new(10.0, 5.0, 0.0)).as_trade_hub(),
            StarSystem::new("b", "B", Coordinate::new(20.0, -5.0, 0.0)),
            StarSystem::new("c", "C", Coordinate::new(30.0, 5.0, 0.0)),
        ]
    }

    fn request<'a>(
        universe: &'a [StarSystem],
        source: &'a SystemId,
        destination: &'a SystemId,
        fuel: &'a FuelProfile,
        max_waypoints: usize,
    ) -> OptimizationRequest<'a> {
        OptimizationRequest {
            source,
            destination,
            universe,
            fuel,
            max_waypoints,
        }
    }

    #[test]
    fn rejects_same_endpoints() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let s = SystemId::new("s");
        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &s, &fuel, 2))
            .unwrap_err();
        assert_eq!(err, OptimizeError::InvalidInput(InvalidInput::SameEndpoints(s)));
    }

    #[test]
    fn rejects_unknown_systems() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let s = SystemId::new("s");
        let ghost = SystemId::new("ghost");
        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &ghost, &fuel, 2))
            .unwrap_err();
        assert_eq!(err, OptimizeError::from(InvalidInput::UnknownSystem(ghost)));
    }

    #[test]
    fn rejects_out_of_range_fuel() {
        let universe = universe();
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));
        let optimizer = RouteOptimizer::default();

        for fuel in [
            FuelProfile::new("Neg", -1.0, 70.0),
            FuelProfile::new("Inf", f64::INFINITY, 70.0),
            FuelProfile::new("Zero", 10.0, 0.0),
            FuelProfile::new("Over", 10.0, 100.5),
            FuelProfile::new("NaN", 10.0, f64::NAN),
        ] {
            let result = optimizer.optimize(&request(&universe, &s, &d, &fuel, 1));
            assert!(matches!(result, Err(OptimizeError::InvalidInput(_))), "{}", fuel.name);
        }
    }

    #[test]
    fn rejects_bad_source_resources() {
        let mut universe = universe();
        universe[0].resources.push(Resource::new("Void", 120.0, 1.0));
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 0))
            .unwrap_err();
        assert!(err.to_string().contains("availability"));
    }

    #[test]
    fn rejects_negative_resource_price() {
        let mut universe = universe();
        universe[0].resources.push(Resource::new("Debt", 50.0, -3.0));
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 0))
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::InvalidInput(InvalidInput::Resource { field: "price", value, .. })
                if value == -3.0
        ));
    }

    #[test]
    fn rejects_non_finite_resource_weight() {
        let mut universe = universe();
        universe[0]
            .resources
            .push(Resource::new("Fog", 10.0, 2.0).with_weight(f64::NAN));
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 0))
            .unwrap_err();
        match err {
            OptimizeError::InvalidInput(InvalidInput::Resource {
                field,
                resource,
                value,
                ..
            }) => {
                assert_eq!((field, resource.as_str()), ("weight", "Fog"));
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let mut universe = universe();
        universe[3].coordinate.y = f64::NAN;
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        let err = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 1))
            .unwrap_err();
        assert_eq!(err, OptimizeError::from(InvalidInput::Coordinate(SystemId::new("b"))));
    }

    #[test]
    fn rejects_negative_fuel_rates() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));
        let config = OptimizerConfig {
            fuel_rates: FuelRates {
                hub: -0.5,
                ..FuelRates::default()
            },
            ..OptimizerConfig::default()
        };
        let err = RouteOptimizer::new(config)
            .optimize(&request(&universe, &s, &d, &fuel, 1))
            .unwrap_err();
        assert!(matches!(
            err,
            OptimizeError::InvalidInput(InvalidInput::FuelRate { route_type: RouteType::Hub, .. })
        ));
    }

    #[test]
    fn ranks_every_candidate_and_flags_one() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel B", 150.0, 85.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        let routes = RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 2))
            .unwrap();

        assert_eq!(routes.len(), 7);
        assert_eq!(routes.iter().filter(|r| r.is_optimal).count(), 1);
        assert!(routes[0].is_optimal);
        assert!(routes.windows(2).all(|w| w[0].profit >= w[1].profit));
        // Cargo is the same on every route; cheap hub fuel beats the straight line.
        assert_eq!(routes[0].route_type, RouteType::Hub);
        assert_eq!(routes[0].name, "S → A → D");
        assert!(routes.iter().any(|r| r.route_type == RouteType::Direct));
    }

    #[test]
    fn candidate_limit_truncates_in_generation_order() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel B", 150.0, 85.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));
        let optimizer = RouteOptimizer::new(OptimizerConfig {
            candidate_limit: Some(2),
            ..OptimizerConfig::default()
        });

        let routes = optimizer.optimize(&request(&universe, &s, &d, &fuel, 3)).unwrap();
        assert_eq!(routes.len(), 2);
        let mut names: Vec<&str> = routes.iter().map(|r| r.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["S → A → D", "S → D"]);
    }

    #[traced_test]
    #[test]
    fn logs_the_optimal_route() {
        let universe = universe();
        let fuel = FuelProfile::new("Fuel A", 100.0, 70.0);
        let (s, d) = (SystemId::new("s"), SystemId::new("d"));

        RouteOptimizer::default()
            .optimize(&request(&universe, &s, &d, &fuel, 0))
            .unwrap();
        assert!(logs_contain("optimal: S → D"));
    }
}
