//! Performance façade crate: drag-polar model, envelope analysis, and catalog selection.

pub mod analysis;
pub mod catalog;
pub mod model;
pub mod params;

pub use aero_airframe as airframe;
pub use aero_liftcurve as liftcurve;
pub use aero_propulsion as propulsion;

pub use aero_airframe::{AircraftParams, AircraftSpec};
pub use aero_liftcurve::{LiftCurve, LiftCurveParams, LiftSample};
pub use aero_propulsion::{EngineInstallation, EngineSpec};
pub use analysis::{AnalysisResult, CruiseAnalysis, Infeasibility, PerformanceReport};
pub use catalog::{Catalog, CatalogError};
pub use model::{PerformanceError, PerformanceModel, PerformanceSnapshot};
pub use params::ModelParameters;
