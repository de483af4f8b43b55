use aircraft_performance::liftcurve::{
    LiftCurveModel, LiftCurveParams, LiftShape, generate_lift_curve,
};
use aircraft_performance::performance::{
    AircraftParams, AircraftSpec, EngineSpec, PerformanceModel,
};

struct Wing {
    cl_max: f64,
    stall_deg: f64,
    shape: f64,
}

impl LiftShape for Wing {
    fn cl_max(&self) -> f64 {
        self.cl_max
    }

    fn stall_angle_deg(&self) -> f64 {
        self.stall_deg
    }

    fn shape_factor(&self) -> f64 {
        self.shape
    }
}

fn cessna_like() -> Wing {
    Wing {
        cl_max: 1.6,
        stall_deg: 17.0,
        shape: 0.8,
    }
}

fn cl_at(curve: &aircraft_performance::LiftCurve, aoa: f64) -> f64 {
    curve
        .iter()
        .find(|s| (s.aoa_deg - aoa).abs() < 1e-9)
        .unwrap_or_else(|| panic!("no sample at {aoa} deg"))
        .lift_coefficient
}

#[test]
fn default_curve_spans_zero_to_ceiling_in_101_samples() {
    let curve = generate_lift_curve(&cessna_like(), &LiftCurveParams::default());
    assert_eq!(curve.len(), 101);
    let angles = curve.angles();
    assert_eq!(angles[0], 0.0);
    assert_eq!(angles[100], 25.0);
    assert!(angles.windows(2).all(|w| w[1] > w[0]));
    assert_eq!(curve.coefficients()[0], 0.0);
}

#[test]
fn curve_hits_breakpoints_and_holds_plateau() {
    let wing = cessna_like();
    let curve = generate_lift_curve(&wing, &LiftCurveParams::default());
    let post = 1.6 * (1.0 - 0.45);

    assert!((cl_at(&curve, 17.0) - 1.6).abs() < 1e-12);
    assert!((cl_at(&curve, 24.0) - post).abs() < 1e-12);
    for sample in curve.iter().filter(|s| s.aoa_deg > 24.0) {
        assert!((sample.lift_coefficient - post).abs() < 1e-12);
    }
}

#[test]
fn transition_band_decays_monotonically() {
    let curve = generate_lift_curve(&cessna_like(), &LiftCurveParams::default());
    let band: Vec<f64> = curve
        .iter()
        .filter(|s| s.aoa_deg >= 17.0 && s.aoa_deg <= 24.0)
        .map(|s| s.lift_coefficient)
        .collect();
    assert!(band.len() > 2);
    assert!(band.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn curve_is_continuous_with_flat_slope_at_breakpoints() {
    let model = LiftCurveModel::new(&cessna_like(), &LiftCurveParams::default());
    let h = 1e-4;
    for angle in [17.0, model.post_stall_end_deg()] {
        let left = model.lift_coefficient_at(angle - h);
        let mid = model.lift_coefficient_at(angle);
        let right = model.lift_coefficient_at(angle + h);
        assert!((left - mid).abs() < 1e-6, "jump below {angle}");
        assert!((right - mid).abs() < 1e-6, "jump above {angle}");
        assert!(((mid - left) / h).abs() < 1e-3, "left slope at {angle}");
        assert!(((right - mid) / h).abs() < 1e-3, "right slope at {angle}");
    }
    assert!((model.cl_post_stall() - 0.88).abs() < 1e-12);
}

#[test]
fn unit_shape_factor_rises_monotonically_to_stall() {
    let wing = Wing {
        cl_max: 1.5,
        stall_deg: 15.0,
        shape: 1.0,
    };
    let curve = generate_lift_curve(&wing, &LiftCurveParams::default());
    let pre: Vec<f64> = curve
        .iter()
        .filter(|s| s.aoa_deg <= 15.0)
        .map(|s| s.lift_coefficient)
        .collect();
    assert!(pre.windows(2).all(|w| w[1] >= w[0]));
}

#[test]
fn shape_factor_controls_pre_stall_fullness() {
    let cl_half = |shape: f64| {
        let wing = Wing {
            cl_max: 1.5,
            stall_deg: 16.0,
            shape,
        };
        LiftCurveModel::new(&wing, &LiftCurveParams::default()).lift_coefficient_at(8.0)
    };
    assert!(cl_half(0.8) > cl_half(1.0));
    assert!(cl_half(1.0) > cl_half(1.2));
}

#[test]
fn peak_sits_at_the_stall_angle() {
    let curve = generate_lift_curve(&cessna_like(), &LiftCurveParams::default());
    let peak = curve.peak().expect("non-empty curve");
    assert_eq!(peak.aoa_deg, 17.0);
    assert!((peak.lift_coefficient - 1.6).abs() < 1e-12);
}

#[test]
fn params_change_resolution_and_drop() {
    let params = LiftCurveParams {
        post_stall_drop_factor: 0.0,
        samples: 11,
        ..LiftCurveParams::default()
    };
    let curve = generate_lift_curve(&cessna_like(), &params);
    assert_eq!(curve.len(), 11);
    assert!((curve.coefficients()[10] - 1.6).abs() < 1e-12);

    assert!(LiftCurveParams { samples: 1, ..params }.validate().is_err());
    assert!(
        LiftCurveParams {
            post_stall_drop_factor: 1.0,
            ..LiftCurveParams::default()
        }
        .validate()
        .is_err()
    );
    assert!(LiftCurveParams::default().validate().is_ok());
}

#[test]
fn model_lift_curve_is_deterministic_and_uses_clean_data() {
    let aircraft = AircraftSpec::new(
        "Cessna 172",
        AircraftParams {
            wingspan_m: 11.0,
            aspect_ratio: 7.32,
            cl_max_clean: 1.6,
            stall_aoa_clean_deg: 17.0,
            shape_factor: 0.8,
        },
    )
    .unwrap();
    let engine = EngineSpec::new("Lycoming IO-360", 800.0, 0.00007).unwrap();
    let model = PerformanceModel::new(aircraft, engine, 1, 1000.0).unwrap();

    let first = model.generate_lift_curve_data();
    let second = model.generate_lift_curve_data();
    assert_eq!(first, second);
    assert_eq!(first, generate_lift_curve(&cessna_like(), &LiftCurveParams::default()));
}
