//! Parabolic drag-polar performance model for steady, level flight at sea level.

use std::f64::consts::PI;

use aero_airframe::AircraftSpec;
use aero_core::is_positive_finite;
use aero_liftcurve::{LiftCurve, LiftCurveError, generate_lift_curve};
use aero_propulsion::{EngineInstallation, EngineSpec, PropulsionError};
use log::{debug, info, warn};

use crate::analysis::{AnalysisResult, CruiseAnalysis, Infeasibility, PerformanceReport};
use crate::params::ModelParameters;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum PerformanceError {
    #[error("invalid engine installation: {0}")]
    Propulsion(#[from] PropulsionError),
    #[error("takeoff mass must be positive and finite (got {0} kg)")]
    InvalidMass(f64),
    #[error("model parameter '{name}' {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("invalid lift curve parameters: {0}")]
    LiftCurve(#[from] LiftCurveError),
}

/// Aerodynamic state at one airspeed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSnapshot {
    pub lift_coefficient: f64,
    pub drag_coefficient: f64,
    pub drag_n: f64,
    pub aoa_deg: f64,
}

impl PerformanceSnapshot {
    /// Result reported for non-positive airspeeds: no lift, unbounded drag.
    pub const STANDSTILL: Self = Self {
        lift_coefficient: 0.0,
        drag_coefficient: 0.0,
        drag_n: f64::INFINITY,
        aoa_deg: 0.0,
    };
}

/// One aircraft/engine/weight configuration.
#[derive(Debug, Clone)]
pub struct PerformanceModel {
    aircraft: AircraftSpec,
    installation: EngineInstallation,
    takeoff_mass_kg: f64,
    params: ModelParameters,
    wing_area_m2: f64,
    total_thrust_n: f64,
    weight_n: f64,
}

impl PerformanceModel {
    /// Build a model with the default sea-level parameters.
    pub fn new(
        aircraft: AircraftSpec,
        engine: EngineSpec,
        engine_count: u32,
        takeoff_mass_kg: f64,
    ) -> Result<Self, PerformanceError> {
        Self::with_parameters(
            aircraft,
            engine,
            engine_count,
            takeoff_mass_kg,
            ModelParameters::default(),
        )
    }

    pub fn with_parameters(
        aircraft: AircraftSpec,
        engine: EngineSpec,
        engine_count: u32,
        takeoff_mass_kg: f64,
        params: ModelParameters,
    ) -> Result<Self, PerformanceError> {
        if !is_positive_finite(takeoff_mass_kg) {
            return Err(PerformanceError::InvalidMass(takeoff_mass_kg));
        }
        params.validate()?;
        let installation = EngineInstallation::new(engine, engine_count)?;

        let wing_area_m2 = aircraft.wing_area_m2();
        let total_thrust_n = installation.total_thrust_n();
        let weight_n = takeoff_mass_kg * params.gravity_m_s2;
        debug!(
            "configured {} with {} x {}: S = {:.2} m², T = {:.1} N, W = {:.1} N",
            aircraft.name(),
            engine_count,
            installation.engine().name(),
            wing_area_m2,
            total_thrust_n,
            weight_n
        );

        Ok(Self {
            aircraft,
            installation,
            takeoff_mass_kg,
            params,
            wing_area_m2,
            total_thrust_n,
            weight_n,
        })
    }

    pub fn aircraft(&self) -> &AircraftSpec {
        &self.aircraft
    }

    pub fn engine(&self) -> &EngineSpec {
        self.installation.engine()
    }

    pub fn engine_count(&self) -> u32 {
        self.installation.count()
    }

    pub fn takeoff_mass_kg(&self) -> f64 {
        self.takeoff_mass_kg
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.params
    }

    pub fn wing_area_m2(&self) -> f64 {
        self.wing_area_m2
    }

    pub fn total_thrust_n(&self) -> f64 {
        self.total_thrust_n
    }

    pub fn weight_n(&self) -> f64 {
        self.weight_n
    }

    /// `π · AR · e`, the denominator of the induced-drag term.
    fn induced_drag_factor(&self) -> f64 {
        PI * self.aircraft.aspect_ratio() * self.params.oswald_efficiency
    }

    /// Stall speed from the generic performance `CLmax` (m/s).
    pub fn stall_speed(&self) -> f64 {
        let p = &self.params;
        (2.0 * self.weight_n / (p.air_density_kg_m3 * self.wing_area_m2 * p.performance_cl_max))
            .sqrt()
    }

    /// Lift, drag, and angle of attack required to hold level flight at `velocity_m_s`.
    ///
    /// The angle of attack assumes a thin-airfoil lift slope of 2π per radian, which is
    /// independent of the shape-factor lift curve.
    pub fn performance_at(&self, velocity_m_s: f64) -> PerformanceSnapshot {
        if velocity_m_s <= 0.0 {
            return PerformanceSnapshot::STANDSTILL;
        }
        let rho = self.params.air_density_kg_m3;
        let v2 = velocity_m_s * velocity_m_s;

        let lift_coefficient = 2.0 * self.weight_n / (rho * self.wing_area_m2 * v2);
        let induced = lift_coefficient.powi(2) / self.induced_drag_factor();
        let drag_coefficient = self.params.zero_lift_drag_coefficient + induced;
        let drag_n = 0.5 * rho * v2 * self.wing_area_m2 * drag_coefficient;
        let aoa_rad = lift_coefficient / (2.0 * PI);

        PerformanceSnapshot {
            lift_coefficient,
            drag_coefficient,
            drag_n,
            aoa_deg: aoa_rad.to_degrees(),
        }
    }

    /// Airspeed of minimum drag for a parabolic polar (m/s).
    pub fn minimum_drag_speed(&self) -> f64 {
        let rho = self.params.air_density_kg_m3;
        let cd0 = self.params.zero_lift_drag_coefficient;
        (2.0 * self.weight_n / (rho * self.wing_area_m2)).sqrt()
            * (1.0 / (self.induced_drag_factor() * cd0)).powf(0.25)
    }

    /// Highest whole-metre-per-second speed at which drag does not exceed total thrust.
    ///
    /// Steps up from `floor(v_stall)`; the first speed whose drag exceeds thrust yields the
    /// speed one step below it. Reaching the search ceiling yields `ceiling - 1`. Drag is
    /// assumed monotone over the searched range.
    pub fn max_level_speed(&self, v_stall: f64) -> f64 {
        let ceiling = self.params.speed_search_ceiling_m_s;
        let start = v_stall.max(0.0).floor() as u32;
        for v in start..ceiling {
            let speed = f64::from(v);
            if self.performance_at(speed).drag_n > self.total_thrust_n {
                return speed - 1.0;
            }
        }
        f64::from(ceiling) - 1.0
    }

    /// Feasibility check followed by envelope and cruise analysis.
    pub fn run_analysis(&self) -> AnalysisResult {
        let min_drag_speed = self.minimum_drag_speed();
        let min_drag_n = self.performance_at(min_drag_speed).drag_n;

        if min_drag_n > self.total_thrust_n {
            let infeasible = Infeasibility {
                min_drag_n,
                available_thrust_n: self.total_thrust_n,
            };
            warn!("{}: {}", self.aircraft.name(), infeasible.reason());
            return AnalysisResult::Infeasible(infeasible);
        }

        let stall_speed = self.stall_speed();
        let max_speed = self.max_level_speed(stall_speed);
        let cruise_speed = max_speed * self.params.cruise_speed_fraction;
        let cruise_state = self.performance_at(cruise_speed);
        // Steady level flight: thrust balances drag.
        let thrust_required_n = cruise_state.drag_n;
        let fuel_flow = self.installation.fuel_flow_kg_per_hour(thrust_required_n);

        info!(
            "{}: stall {:.1} m/s, max {:.0} m/s, cruise {:.1} m/s burning {:.1} kg/h",
            self.aircraft.name(),
            stall_speed,
            max_speed,
            cruise_speed,
            fuel_flow
        );

        AnalysisResult::Feasible(PerformanceReport {
            stall_speed_m_s: stall_speed,
            max_speed_m_s: max_speed,
            min_drag_speed_m_s: min_drag_speed,
            min_drag_n,
            cruise: CruiseAnalysis {
                speed_m_s: cruise_speed,
                thrust_required_n,
                aoa_deg: cruise_state.aoa_deg,
                lift_coefficient: cruise_state.lift_coefficient,
                fuel_flow_kg_per_hour: fuel_flow,
            },
        })
    }

    /// Clean-wing lift curve of this model's aircraft.
    pub fn generate_lift_curve_data(&self) -> LiftCurve {
        generate_lift_curve(&self.aircraft, &self.params.lift_curve)
    }
}
