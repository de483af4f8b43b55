//! Engine descriptors and installed-thrust helpers.

use aero_core::{is_positive_finite, time, units};
use thiserror::Error;

/// Errors surfaced when building engine descriptors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PropulsionError {
    #[error("engine '{name}': {field} must be positive and finite (got {value})")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("engine count must be at least one")]
    NoEngines,
}

/// Immutable engine record.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSpec {
    name: String,
    thrust_n: f64,
    tsfc_kg_per_n_s: f64,
}

impl EngineSpec {
    /// Build an engine from its per-unit thrust (N) and TSFC (kg / (N·s)).
    pub fn new(
        name: impl Into<String>,
        thrust_n: f64,
        tsfc_kg_per_n_s: f64,
    ) -> Result<Self, PropulsionError> {
        let name = name.into();
        for (field, value) in [("thrust", thrust_n), ("tsfc", tsfc_kg_per_n_s)] {
            if !is_positive_finite(value) {
                return Err(PropulsionError::NonPositive { name, field, value });
            }
        }
        Ok(Self {
            name,
            thrust_n,
            tsfc_kg_per_n_s,
        })
    }

    /// Convenience constructor for catalog data quoted in kilonewtons.
    pub fn from_kilonewtons(
        name: impl Into<String>,
        thrust_kn: f64,
        tsfc_kg_per_n_s: f64,
    ) -> Result<Self, PropulsionError> {
        Self::new(name, units::kn_to_n(thrust_kn), tsfc_kg_per_n_s)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Static thrust of a single unit (N).
    pub fn thrust_n(&self) -> f64 {
        self.thrust_n
    }

    /// Thrust-specific fuel consumption (kg / (N·s)).
    pub fn tsfc(&self) -> f64 {
        self.tsfc_kg_per_n_s
    }
}

/// A number of identical engines installed on one airframe.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineInstallation {
    engine: EngineSpec,
    count: u32,
}

impl EngineInstallation {
    pub fn new(engine: EngineSpec, count: u32) -> Result<Self, PropulsionError> {
        if count == 0 {
            return Err(PropulsionError::NoEngines);
        }
        Ok(Self { engine, count })
    }

    pub fn engine(&self) -> &EngineSpec {
        &self.engine
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Combined static thrust of all installed engines (N).
    pub fn total_thrust_n(&self) -> f64 {
        self.engine.thrust_n * f64::from(self.count)
    }

    /// Fuel flow (kg/h) needed to produce `thrust_n` of total thrust.
    ///
    /// TSFC is a per-newton figure, so the result does not depend on how the
    /// thrust is shared between engines.
    pub fn fuel_flow_kg_per_hour(&self, thrust_n: f64) -> f64 {
        time::per_second_to_per_hour(self.engine.tsfc_kg_per_n_s * thrust_n)
    }
}
