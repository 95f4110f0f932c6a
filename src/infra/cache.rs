//! On-disk archive of the most recent optimization result.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, event, warn, Level};

use crate::domain::FuelProfile;
use crate::infra::records::TradeRouteRecord;
use crate::util::persistence::data_dir;

const ARCHIVE_FILENAME: &str = "last_routes.json";

/// Archived results older than this are reported as stale.
pub const ARCHIVE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("data directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteArchive {
    /// Unix timestamp (seconds) when the routes were ranked.
    pub cached_at: u64,
    pub source_name: String,
    pub destination_name: String,
    pub fuel: FuelProfile,
    pub routes: Vec<TradeRouteRecord>,
}

impl RouteArchive {
    pub fn new(
        source_name: String,
        destination_name: String,
        fuel: FuelProfile,
        routes: Vec<TradeRouteRecord>,
    ) -> Self {
        Self {
            cached_at: unix_now(),
            source_name,
            destination_name,
            fuel,
            routes,
        }
    }

    pub fn optimal(&self) -> Option<&TradeRouteRecord> {
        self.routes.iter().find(|r| r.is_optimal)
    }

    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    pub fn age(&self) -> Duration {
        Duration::from_secs(unix_now().saturating_sub(self.cached_at))
    }

    /// Human-readable age string.
    pub fn age_string(&self) -> String {
        format_age(self.age())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

pub fn default_archive_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(ARCHIVE_FILENAME))
}

pub fn load_archive(path: &Path) -> Option<RouteArchive> {
    if !path.exists() {
        debug!("No route archive at {}", path.display());
        return None;
    }

    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<RouteArchive>(&content) {
            Ok(archive) => {
                event!(
                    Level::INFO,
                    "Loaded {} archived routes (age: {})",
                    archive.routes.len(),
                    archive.age_string()
                );
                Some(archive)
            }
            Err(e) => {
                warn!("Failed to parse route archive {}: {e}", path.display());
                None
            }
        },
        Err(e) => {
            warn!("Failed to read route archive {}: {e}", path.display());
            None
        }
    }
}

pub fn save_archive(path: &Path, archive: &RouteArchive) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(archive)?;
    fs::write(path, content)?;
    event!(
        Level::INFO,
        "Saved {} routes to {}",
        archive.routes.len(),
        path.display()
    );
    Ok(())
}

pub fn save_default_archive(archive: &RouteArchive) -> Result<PathBuf, CacheError> {
    let path = default_archive_path().ok_or(CacheError::StorageUnavailable)?;
    save_archive(&path, archive)?;
    Ok(path)
}
