//! File-backed boundaries: scenario snapshots, stored route records and the result archive.

pub mod cache;
pub mod records;
pub mod scenario;

pub use cache::{load_archive, save_archive, RouteArchive, ARCHIVE_TTL};
pub use records::{to_records, RouteStatus, TradeRouteRecord};
pub use scenario::{load_scenario, parse_scenario, Scenario, ScenarioError};
