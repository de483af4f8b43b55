//! Tunable constants of the drag-polar and lift-curve approximations.

use aero_config::ModelConfig;
use aero_core::{constants, defaults, is_positive_finite};
use aero_liftcurve::LiftCurveParams;

use crate::model::PerformanceError;

/// Parameters shared by every configuration analysed in one run.
///
/// `performance_cl_max` is the generic envelope-sizing ceiling. It is independent of each
/// aircraft's clean `CLmax`, which only feeds the lift curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    pub air_density_kg_m3: f64,
    pub gravity_m_s2: f64,
    pub zero_lift_drag_coefficient: f64,
    pub oswald_efficiency: f64,
    pub performance_cl_max: f64,
    pub speed_search_ceiling_m_s: u32,
    pub cruise_speed_fraction: f64,
    pub lift_curve: LiftCurveParams,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            air_density_kg_m3: constants::RHO_SEA_LEVEL,
            gravity_m_s2: constants::G0,
            zero_lift_drag_coefficient: defaults::C_D0,
            oswald_efficiency: defaults::OSWALD_EFFICIENCY,
            performance_cl_max: defaults::PERFORMANCE_CL_MAX,
            speed_search_ceiling_m_s: defaults::SPEED_SEARCH_CEILING_M_S,
            cruise_speed_fraction: defaults::CRUISE_SPEED_FRACTION,
            lift_curve: LiftCurveParams::default(),
        }
    }
}

impl ModelParameters {
    /// Defaults with every field set in `config` replaced, then validated.
    pub fn from_config(config: &ModelConfig) -> Result<Self, PerformanceError> {
        let mut params = Self::default();
        let perf = &config.performance;
        if let Some(v) = perf.air_density_kg_m3 {
            params.air_density_kg_m3 = v;
        }
        if let Some(v) = perf.gravity_m_s2 {
            params.gravity_m_s2 = v;
        }
        if let Some(v) = perf.zero_lift_drag_coefficient {
            params.zero_lift_drag_coefficient = v;
        }
        if let Some(v) = perf.oswald_efficiency {
            params.oswald_efficiency = v;
        }
        if let Some(v) = perf.performance_cl_max {
            params.performance_cl_max = v;
        }
        if let Some(v) = perf.speed_search_ceiling_m_s {
            params.speed_search_ceiling_m_s = v;
        }
        if let Some(v) = perf.cruise_speed_fraction {
            params.cruise_speed_fraction = v;
        }

        let lift = &config.lift_curve;
        if let Some(v) = lift.post_stall_drop_factor {
            params.lift_curve.post_stall_drop_factor = v;
        }
        if let Some(v) = lift.transition_band_deg {
            params.lift_curve.transition_band_deg = v;
        }
        if let Some(v) = lift.plot_max_aoa_deg {
            params.lift_curve.plot_max_aoa_deg = v;
        }
        if let Some(v) = lift.samples {
            params.lift_curve.samples = v;
        }

        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), PerformanceError> {
        let positive = [
            ("air density", self.air_density_kg_m3),
            ("gravity", self.gravity_m_s2),
            ("zero-lift drag coefficient", self.zero_lift_drag_coefficient),
            ("Oswald efficiency", self.oswald_efficiency),
            ("performance CLmax", self.performance_cl_max),
            ("cruise speed fraction", self.cruise_speed_fraction),
        ];
        for (name, value) in positive {
            if !is_positive_finite(value) {
                return Err(PerformanceError::InvalidParameter {
                    name,
                    reason: format!("must be positive and finite (got {value})"),
                });
            }
        }
        if self.speed_search_ceiling_m_s < 2 {
            return Err(PerformanceError::InvalidParameter {
                name: "speed search ceiling",
                reason: format!("must be at least 2 m/s (got {})", self.speed_search_ceiling_m_s),
            });
        }
        self.lift_curve.validate()?;
        Ok(())
    }
}
