use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::debug;

use crate::domain::OptimizerConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "StarTradeRouter";
const APP_NAME: &str = "StarTradeRouter";
const CONFIG_FILENAME: &str = "config.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Reads the optimizer configuration.
///
/// An explicit path must exist. The default location may be missing, in which
/// case the built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<OptimizerConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match config_file() {
            Some(path) if path.exists() => path,
            _ => {
                debug!("No configuration file, using defaults");
                return Ok(OptimizerConfig::default());
            }
        },
    };

    let data = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

pub fn save_config(path: Option<&Path>, config: &OptimizerConfig) -> Result<PathBuf, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => config_file().ok_or(ConfigError::StorageUnavailable)?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("invalid configuration in {}: {source}", .path.display())]
    Parse { path: PathBuf, source: SerdeError },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FuelRates;

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "capacity": 40, "fuelRates": { "hub": 0.05 } }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.capacity, 40);
        assert_eq!(config.max_waypoints, 2);
        assert_eq!(
            config.fuel_rates,
            FuelRates {
                hub: 0.05,
                ..FuelRates::default()
            }
        );
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "capacity": -1 }"#).unwrap();

        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(load_config(Some(&path)), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = OptimizerConfig {
            capacity: 250,
            candidate_limit: Some(1000),
            ..OptimizerConfig::default()
        };

        save_config(Some(&path), &config).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
    }
}
