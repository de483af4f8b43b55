//! Aircraft geometry and clean-wing lift descriptors.

use aero_core::is_positive_finite;
use aero_liftcurve::LiftShape;
use thiserror::Error;

/// Errors surfaced when building aircraft descriptors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AirframeError {
    #[error("aircraft '{name}': {field} must be positive and finite (got {value})")]
    NonPositive {
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// Raw inputs for [`AircraftSpec::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftParams {
    pub wingspan_m: f64,
    pub aspect_ratio: f64,
    pub cl_max_clean: f64,
    pub stall_aoa_clean_deg: f64,
    pub shape_factor: f64,
}

/// Immutable aircraft record.
///
/// `cl_max_clean` and `stall_aoa_clean_deg` describe the clean airfoil and only shape the
/// lift curve; envelope sizing uses the generic performance ceiling instead.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftSpec {
    name: String,
    params: AircraftParams,
}

impl AircraftSpec {
    pub fn new(name: impl Into<String>, params: AircraftParams) -> Result<Self, AirframeError> {
        let name = name.into();
        let checks = [
            ("wingspan", params.wingspan_m),
            ("aspect ratio", params.aspect_ratio),
            ("clean CLmax", params.cl_max_clean),
            ("clean stall angle", params.stall_aoa_clean_deg),
            ("shape factor", params.shape_factor),
        ];
        for (field, value) in checks {
            if !is_positive_finite(value) {
                return Err(AirframeError::NonPositive { name, field, value });
            }
        }
        Ok(Self { name, params })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wingspan_m(&self) -> f64 {
        self.params.wingspan_m
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.params.aspect_ratio
    }

    pub fn cl_max_clean(&self) -> f64 {
        self.params.cl_max_clean
    }

    pub fn stall_aoa_clean_deg(&self) -> f64 {
        self.params.stall_aoa_clean_deg
    }

    pub fn shape_factor(&self) -> f64 {
        self.params.shape_factor
    }

    /// Reference wing area from span and aspect ratio: `S = b² / AR` (m²).
    pub fn wing_area_m2(&self) -> f64 {
        self.params.wingspan_m.powi(2) / self.params.aspect_ratio
    }
}

impl LiftShape for AircraftSpec {
    fn cl_max(&self) -> f64 {
        self.params.cl_max_clean
    }

    fn stall_angle_deg(&self) -> f64 {
        self.params.stall_aoa_clean_deg
    }

    fn shape_factor(&self) -> f64 {
        self.params.shape_factor
    }
}
