//! Universe snapshots read from JSON files.

use std::{fs, io, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, event, Level};

use crate::domain::{FuelCatalog, FuelProfile, StarSystem, SystemId};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse scenario: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no system matches {0}")]
    UnknownSystem(String),
}

/// Star systems plus the fuel types offered to the user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(alias = "starSystems")]
    pub systems: Vec<StarSystem>,
    #[serde(default)]
    pub fuel_types: Vec<FuelProfile>,
}

impl Scenario {
    /// Looks a system up by id first, then by case-insensitive name.
    pub fn resolve(&self, key: &str) -> Result<&StarSystem, ScenarioError> {
        self.systems
            .iter()
            .find(|s| s.id.as_str() == key)
            .or_else(|| self.systems.iter().find(|s| s.name.eq_ignore_ascii_case(key)))
            .ok_or_else(|| ScenarioError::UnknownSystem(key.to_string()))
    }

    pub fn resolve_id(&self, key: &str) -> Result<SystemId, ScenarioError> {
        self.resolve(key).map(|s| s.id.clone())
    }

    pub fn fuel_catalog(&self) -> FuelCatalog {
        FuelCatalog::from_profiles(self.fuel_types.clone())
    }
}

/// Accepts either a scenario object or a bare array of systems.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScenarioFile {
    Full(Scenario),
    Systems(Vec<StarSystem>),
}

pub fn parse_scenario(content: &str) -> Result<Scenario, ScenarioError> {
    let scenario = match serde_json::from_str::<ScenarioFile>(content) {
        Ok(ScenarioFile::Full(scenario)) => scenario,
        Ok(ScenarioFile::Systems(systems)) => Scenario {
            systems,
            fuel_types: Vec::new(),
        },
        // Re-parse strictly for a useful error message.
        Err(_) => serde_json::from_str::<Scenario>(content)?,
    };
    Ok(scenario)
}

pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    debug!("Reading scenario from {}", path.display());
    let content = fs::read_to_string(path)?;
    let scenario = parse_scenario(&content)?;
    event!(
        Level::INFO,
        "Loaded {} systems and {} fuel types from {}",
        scenario.systems.len(),
        scenario.fuel_types.len(),
        path.display()
    );
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> Result<(), ScenarioError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(scenario)?;
    fs::write(path, json)?;
    Ok(())
}
