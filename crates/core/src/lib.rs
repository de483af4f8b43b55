//! Core units, constants, and shared primitives for the aircraft performance workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// ISA sea-level air density (kg/m³). Altitude variation is not modelled.
    pub const RHO_SEA_LEVEL: f64 = 1.225;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
}

/// Default values for the drag-polar and lift-curve approximations.
///
/// The two lift-coefficient ceilings are intentionally separate: [`PERFORMANCE_CL_MAX`]
/// sizes the flight envelope, while each aircraft's clean `CLmax` shapes its plotted curve.
pub mod defaults {
    /// Zero-lift (parasite) drag coefficient.
    pub const C_D0: f64 = 0.020;
    /// Oswald span efficiency factor.
    pub const OSWALD_EFFICIENCY: f64 = 0.80;
    /// Generic maximum usable lift coefficient for stall/envelope sizing.
    pub const PERFORMANCE_CL_MAX: f64 = 1.8;
    /// Fraction of `CLmax` lost once the post-stall transition has completed.
    pub const POST_STALL_DROP_FACTOR: f64 = 0.45;
    /// Width of the raised-cosine post-stall transition (degrees).
    pub const POST_STALL_TRANSITION_DEG: f64 = 7.0;
    /// Upper bound of the sampled lift curve (degrees).
    pub const PLOT_MAX_AOA_DEG: f64 = 25.0;
    /// Number of samples on the generated lift curve, both ends included.
    pub const LIFT_CURVE_SAMPLES: usize = 101;
    /// Exclusive upper bound of the max-speed search (m/s).
    pub const SPEED_SEARCH_CEILING_M_S: u32 = 500;
    /// Cruise speed as a fraction of maximum level speed.
    pub const CRUISE_SPEED_FRACTION: f64 = 0.85;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * 3.6
    }

    /// Convert kilonewtons to newtons.
    #[inline]
    pub fn kn_to_n(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert newtons to kilonewtons.
    #[inline]
    pub fn n_to_kn(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Fuel-flow helpers shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert a per-second rate into a per-hour rate.
    #[inline]
    pub fn per_second_to_per_hour(rate: f64) -> f64 {
        rate * SECONDS_PER_HOUR
    }
}

/// Returns `true` when `value` is a finite number strictly greater than zero.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
