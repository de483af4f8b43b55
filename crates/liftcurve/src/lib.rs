//! Lift-coefficient versus angle-of-attack curve synthesis.
//!
//! The curve has three regions:
//!
//! 1. pre-stall, `CL = CLmax · sin(π/2 · (α/α_stall)^k)` where `k` is the shape factor;
//! 2. a raised-cosine decay from `CLmax` to `CLmax · (1 - drop)` over a fixed band past stall;
//! 3. a plateau at `CLmax · (1 - drop)`.
//!
//! The cosine blend has zero slope at both ends of the band, so the curve is continuous
//! and smooth at the stall angle and at the start of the plateau.

use std::f64::consts::{FRAC_PI_2, PI};

use aero_core::{defaults, is_positive_finite};
use thiserror::Error;

/// Clean-wing inputs to the curve.
pub trait LiftShape {
    /// Peak (clean) lift coefficient.
    fn cl_max(&self) -> f64;
    /// Angle of attack at which `cl_max` is reached (degrees).
    fn stall_angle_deg(&self) -> f64;
    /// Exponent applied to the normalised pre-stall angle.
    fn shape_factor(&self) -> f64;
}

/// Curve resolution and post-stall behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftCurveParams {
    /// Fraction of `CLmax` lost after the transition band.
    pub post_stall_drop_factor: f64,
    /// Width of the post-stall transition (degrees).
    pub transition_band_deg: f64,
    /// Highest sampled angle of attack (degrees).
    pub plot_max_aoa_deg: f64,
    /// Number of samples, both ends included.
    pub samples: usize,
}

impl Default for LiftCurveParams {
    fn default() -> Self {
        Self {
            post_stall_drop_factor: defaults::POST_STALL_DROP_FACTOR,
            transition_band_deg: defaults::POST_STALL_TRANSITION_DEG,
            plot_max_aoa_deg: defaults::PLOT_MAX_AOA_DEG,
            samples: defaults::LIFT_CURVE_SAMPLES,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LiftCurveError {
    #[error("post-stall drop factor must lie in [0, 1) (got {0})")]
    DropFactor(f64),
    #[error("transition band must be positive (got {0} deg)")]
    TransitionBand(f64),
    #[error("plot ceiling must be positive (got {0} deg)")]
    PlotCeiling(f64),
    #[error("a lift curve needs at least two samples (got {0})")]
    Samples(usize),
}

impl LiftCurveParams {
    pub fn validate(&self) -> Result<(), LiftCurveError> {
        let drop = self.post_stall_drop_factor;
        if !(drop.is_finite() && (0.0..1.0).contains(&drop)) {
            return Err(LiftCurveError::DropFactor(drop));
        }
        if !is_positive_finite(self.transition_band_deg) {
            return Err(LiftCurveError::TransitionBand(self.transition_band_deg));
        }
        if !is_positive_finite(self.plot_max_aoa_deg) {
            return Err(LiftCurveError::PlotCeiling(self.plot_max_aoa_deg));
        }
        if self.samples < 2 {
            return Err(LiftCurveError::Samples(self.samples));
        }
        Ok(())
    }
}

/// One point on the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftSample {
    pub aoa_deg: f64,
    pub lift_coefficient: f64,
}

/// Ordered angle-of-attack samples with their lift coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LiftCurve {
    samples: Vec<LiftSample>,
}

impl LiftCurve {
    pub fn samples(&self) -> &[LiftSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LiftSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn angles(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.aoa_deg).collect()
    }

    pub fn coefficients(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.lift_coefficient).collect()
    }

    /// First sample holding the highest lift coefficient.
    pub fn peak(&self) -> Option<LiftSample> {
        self.samples.iter().copied().fold(None, |best, s| match best {
            Some(b) if b.lift_coefficient >= s.lift_coefficient => Some(b),
            _ => Some(s),
        })
    }
}

impl From<Vec<LiftSample>> for LiftCurve {
    fn from(samples: Vec<LiftSample>) -> Self {
        Self { samples }
    }
}

impl<'a> IntoIterator for &'a LiftCurve {
    type Item = &'a LiftSample;
    type IntoIter = std::slice::Iter<'a, LiftSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Piecewise lift model for one clean wing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiftCurveModel {
    cl_max: f64,
    stall_deg: f64,
    shape_factor: f64,
    cl_post_stall: f64,
    band_deg: f64,
}

impl LiftCurveModel {
    pub fn new<S: LiftShape + ?Sized>(shape: &S, params: &LiftCurveParams) -> Self {
        let cl_max = shape.cl_max();
        Self {
            cl_max,
            stall_deg: shape.stall_angle_deg(),
            shape_factor: shape.shape_factor(),
            cl_post_stall: cl_max * (1.0 - params.post_stall_drop_factor),
            band_deg: params.transition_band_deg,
        }
    }

    pub fn cl_max(&self) -> f64 {
        self.cl_max
    }

    /// Lift coefficient held once the post-stall transition is complete.
    pub fn cl_post_stall(&self) -> f64 {
        self.cl_post_stall
    }

    /// Angle at which the plateau begins (degrees).
    pub fn post_stall_end_deg(&self) -> f64 {
        self.stall_deg + self.band_deg
    }

    /// Lift coefficient at `aoa_deg` (non-negative angles).
    pub fn lift_coefficient_at(&self, aoa_deg: f64) -> f64 {
        if aoa_deg <= self.stall_deg {
            let normalized = aoa_deg / self.stall_deg;
            self.cl_max * (FRAC_PI_2 * normalized.powf(self.shape_factor)).sin()
        } else if aoa_deg <= self.post_stall_end_deg() {
            let progress = (aoa_deg - self.stall_deg) / self.band_deg;
            let blend = ((PI * progress).cos() + 1.0) / 2.0;
            self.cl_post_stall + (self.cl_max - self.cl_post_stall) * blend
        } else {
            self.cl_post_stall
        }
    }
}

/// Sample the lift curve of `shape` from 0° up to the plot ceiling.
pub fn generate_lift_curve<S: LiftShape + ?Sized>(shape: &S, params: &LiftCurveParams) -> LiftCurve {
    let model = LiftCurveModel::new(shape, params);
    let steps = params.samples.max(2) - 1;
    let samples = (0..=steps)
        .map(|i| {
            // i · ceiling / steps keeps integer-degree sample angles exact.
            let aoa_deg = i as f64 * params.plot_max_aoa_deg / steps as f64;
            LiftSample {
                aoa_deg,
                lift_coefficient: model.lift_coefficient_at(aoa_deg),
            }
        })
        .collect();
    LiftCurve { samples }
}
