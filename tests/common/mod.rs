#![allow(dead_code)]

use std::path::PathBuf;

use star_trade_router::domain::{Coordinate, FuelProfile, Resource, StarSystem, SystemId};

/// Source `S` with one ore resource, destination `D` exactly 50 units away,
/// and `extra` waypoint systems spread between them.
pub fn build_test_universe(extra: usize) -> Vec<StarSystem> {
    let mut systems = vec![
        StarSystem::new("s", "S", Coordinate::new(0.0, 0.0, 0.0))
            .with_population(1_000_000)
            .with_resource(Resource::new("Ore", 80.0, 10.0).with_weight(1.0)),
        StarSystem::new("d", "D", Coordinate::new(30.0, 40.0, 0.0)),
    ];
    for i in 0..extra {
        let t = (i + 1) as f64 / (extra + 1) as f64;
        let mut system = StarSystem::new(
            format!("w{i}"),
            format!("W{i}"),
            Coordinate::new(30.0 * t, 40.0 * t, 5.0),
        );
        system.is_trade_hub = i % 2 == 0;
        systems.push(system);
    }
    systems
}

pub fn fuel_a() -> FuelProfile {
    FuelProfile::new("Fuel A", 100.0, 70.0)
}

pub fn id(value: &str) -> SystemId {
    SystemId::new(value)
}

pub fn demo_scenario_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join("galaxy.json")
}
