use thiserror::Error;

use super::entities::{default_fuel_profiles, FuelProfile};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelCatalogError {
    #[error("fuel name must not be empty")]
    EmptyName,
    #[error("fuel {0} already exists")]
    Duplicate(String),
    #[error("unknown fuel {0}")]
    Unknown(String),
    #[error("fuel cost must be greater than zero, got {0}")]
    Cost(f64),
    #[error("fuel efficiency must be within (0, 100], got {0}")]
    Efficiency(f64),
    #[error("cannot remove the last fuel type")]
    LastFuel,
}

/// The fuel types a user can pick from, plus the current pick.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelCatalog {
    fuels: Vec<FuelProfile>,
    selected: usize,
}

impl Default for FuelCatalog {
    fn default() -> Self {
        Self {
            fuels: default_fuel_profiles(),
            selected: 0,
        }
    }
}

impl FuelCatalog {
    /// Catalog of the given profiles, or the presets if none are given.
    pub fn from_profiles(fuels: Vec<FuelProfile>) -> Self {
        if fuels.is_empty() {
            return Self::default();
        }
        Self { fuels, selected: 0 }
    }

    pub fn fuels(&self) -> &[FuelProfile] {
        &self.fuels
    }

    pub fn selected(&self) -> &FuelProfile {
        &self.fuels[self.selected]
    }

    pub fn get(&self, name: &str) -> Option<&FuelProfile> {
        self.fuels.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn select(&mut self, name: &str) -> Result<&FuelProfile, FuelCatalogError> {
        self.selected = self.position(name)?;
        Ok(self.selected())
    }

    pub fn add(&mut self, fuel: FuelProfile) -> Result<(), FuelCatalogError> {
        validate(&fuel)?;
        if self.get(&fuel.name).is_some() {
            return Err(FuelCatalogError::Duplicate(fuel.name));
        }
        self.fuels.push(fuel);
        Ok(())
    }

    /// Replaces the profile called `name`. Renaming onto another existing name is refused.
    pub fn update(&mut self, name: &str, fuel: FuelProfile) -> Result<(), FuelCatalogError> {
        validate(&fuel)?;
        let index = self.position(name)?;
        if let Some(other) = self.position(&fuel.name).ok().filter(|i| *i != index) {
            return Err(FuelCatalogError::Duplicate(self.fuels[other].name.clone()));
        }
        self.fuels[index] = fuel;
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<FuelProfile, FuelCatalogError> {
        let index = self.position(name)?;
        if self.fuels.len() == 1 {
            return Err(FuelCatalogError::LastFuel);
        }
        let removed = self.fuels.remove(index);
        if self.selected == index {
            self.selected = 0;
        } else if self.selected > index {
            self.selected -= 1;
        }
        Ok(removed)
    }

    fn position(&self, name: &str) -> Result<usize, FuelCatalogError> {
        self.fuels
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| FuelCatalogError::Unknown(name.to_string()))
    }
}

fn validate(fuel: &FuelProfile) -> Result<(), FuelCatalogError> {
    if fuel.name.trim().is_empty() {
        return Err(FuelCatalogError::EmptyName);
    }
    if !fuel.cost.is_finite() || fuel.cost <= 0.0 {
        return Err(FuelCatalogError::Cost(fuel.cost));
    }
    if !fuel.efficiency.is_finite() || fuel.efficiency <= 0.0 || fuel.efficiency > 100.0 {
        return Err(FuelCatalogError::Efficiency(fuel.efficiency));
    }
    Ok(())
}
