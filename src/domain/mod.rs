//! Route search, cargo allocation and pricing live here.

pub mod cargo;
pub mod entities;
pub mod evaluation;
pub mod fuel_catalog;
pub mod geometry;
pub mod optimizer;
pub mod trade_route;

pub use cargo::{allocate, AllocationResult, SelectedResource, DEFAULT_CAPACITY};
pub use entities::{
    default_fuel_profiles, ConsumptionEntry, Coordinate, FuelProfile, FuelStation, Resource,
    StarSystem, SystemId,
};
pub use evaluation::{
    profitability_indicator, summarize_routes, ProfitIndicator, ProfitIndicatorStatus,
    RouteFigures, RouteStatistics,
};
pub use fuel_catalog::{FuelCatalog, FuelCatalogError};
pub use geometry::distance;
pub use optimizer::{
    InvalidInput, OptimizationRequest, OptimizeError, OptimizerConfig, RouteOptimizer,
};
pub use trade_route::{
    candidate_count, enumerate_routes, price_route, rank_routes, waypoint_pool, CandidateRoute,
    CargoLine, FuelRates, PricedRoute, RouteType,
};
