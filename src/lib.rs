//! Aircraft performance estimation: drag-polar envelope analysis and lift-curve synthesis.
//!
//! The library crates carry all of the modelling; this façade re-exports them so the
//! binaries (analysis CLI, lift-curve plotter) share one entry point.

pub use aero_config as config;
pub use aero_core::{constants, defaults, units};
pub use aero_export as export;
pub use aero_liftcurve as liftcurve;
pub use aero_performance as performance;

pub use aero_performance::{
    AircraftSpec, AnalysisResult, Catalog, EngineSpec, LiftCurve, ModelParameters,
    PerformanceModel,
};

/// Default PNG file name for an aircraft's lift-curve plot.
pub fn lift_curve_file_name(aircraft_name: &str) -> String {
    format!("lift_curve_{}.png", aircraft_name.replace(' ', "_"))
}
