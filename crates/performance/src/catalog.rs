//! Name-keyed engine and aircraft lookup built from configuration records.

use std::collections::BTreeMap;

use aero_airframe::{AircraftParams, AircraftSpec, AirframeError};
use aero_config::{AircraftConfig, ConfigError, EngineConfig};
use aero_propulsion::{EngineSpec, PropulsionError};
use thiserror::Error;

/// Errors surfaced when building or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("engine '{0}' not found in catalog")]
    EngineNotFound(String),
    #[error("aircraft '{0}' not found in catalog")]
    AircraftNotFound(String),
    #[error("{0} catalog is empty")]
    EmptyCatalog(&'static str),
    #[error("invalid engine record: {0}")]
    Engine(#[from] PropulsionError),
    #[error("invalid aircraft record: {0}")]
    Aircraft(#[from] AirframeError),
    #[error("failed to load catalog: {0}")]
    Config(#[from] ConfigError),
}

/// Convert an `EngineConfig` into a validated `EngineSpec`.
pub fn engine_from_config(config: &EngineConfig) -> Result<EngineSpec, PropulsionError> {
    EngineSpec::from_kilonewtons(config.name.clone(), config.thrust_kn, config.tsfc)
}

/// Convert an `AircraftConfig` into a validated `AircraftSpec`.
pub fn aircraft_from_config(config: &AircraftConfig) -> Result<AircraftSpec, AirframeError> {
    AircraftSpec::new(
        config.name.clone(),
        AircraftParams {
            wingspan_m: config.wingspan_m,
            aspect_ratio: config.aspect_ratio,
            cl_max_clean: config.cl_max_clean,
            stall_aoa_clean_deg: config.stall_aoa_clean_deg,
            shape_factor: config.shape_factor,
        },
    )
}

/// Read-only engine and aircraft reference data.
///
/// Keys are upper-cased names so lookups are case-insensitive; iteration follows key order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    engines: BTreeMap<String, EngineSpec>,
    aircraft: BTreeMap<String, AircraftSpec>,
}

impl Catalog {
    /// Validate and index the given records. Later duplicates replace earlier ones.
    pub fn from_configs(
        engines: &[EngineConfig],
        aircraft: &[AircraftConfig],
    ) -> Result<Self, CatalogError> {
        if engines.is_empty() {
            return Err(CatalogError::EmptyCatalog("engine"));
        }
        if aircraft.is_empty() {
            return Err(CatalogError::EmptyCatalog("aircraft"));
        }

        let mut catalog = Self::default();
        for cfg in engines {
            catalog
                .engines
                .insert(cfg.name.to_uppercase(), engine_from_config(cfg)?);
        }
        for cfg in aircraft {
            catalog
                .aircraft
                .insert(cfg.name.to_uppercase(), aircraft_from_config(cfg)?);
        }
        Ok(catalog)
    }

    /// Catalog shipped with the tool.
    pub fn builtin() -> Result<Self, CatalogError> {
        let engines = aero_config::builtin_engine_configs()?;
        let aircraft = aero_config::builtin_aircraft_configs()?;
        Self::from_configs(&engines, &aircraft)
    }

    /// Add records on top of the current entries, replacing same-named ones.
    pub fn extend_from_configs(
        &mut self,
        engines: &[EngineConfig],
        aircraft: &[AircraftConfig],
    ) -> Result<(), CatalogError> {
        for cfg in engines {
            self.engines
                .insert(cfg.name.to_uppercase(), engine_from_config(cfg)?);
        }
        for cfg in aircraft {
            self.aircraft
                .insert(cfg.name.to_uppercase(), aircraft_from_config(cfg)?);
        }
        Ok(())
    }

    pub fn engine(&self, name: &str) -> Result<&EngineSpec, CatalogError> {
        self.engines
            .get(&name.to_uppercase())
            .ok_or_else(|| CatalogError::EngineNotFound(name.to_string()))
    }

    pub fn aircraft(&self, name: &str) -> Result<&AircraftSpec, CatalogError> {
        self.aircraft
            .get(&name.to_uppercase())
            .ok_or_else(|| CatalogError::AircraftNotFound(name.to_string()))
    }

    pub fn engines(&self) -> impl Iterator<Item = &EngineSpec> {
        self.engines.values()
    }

    pub fn aircraft_specs(&self) -> impl Iterator<Item = &AircraftSpec> {
        self.aircraft.values()
    }

    pub fn engine_names(&self) -> Vec<&str> {
        self.engines.values().map(EngineSpec::name).collect()
    }

    pub fn aircraft_names(&self) -> Vec<&str> {
        self.aircraft.values().map(AircraftSpec::name).collect()
    }
}
