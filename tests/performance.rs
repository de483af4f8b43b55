use std::f64::consts::PI;

use aircraft_performance::performance::{
    AircraftParams, AircraftSpec, AnalysisResult, EngineSpec, ModelParameters, PerformanceError,
    PerformanceModel,
};
use aircraft_performance::performance::propulsion::PropulsionError;

const G0: f64 = 9.80665;
const RHO: f64 = 1.225;

fn light_single(cl_max_clean: f64) -> AircraftSpec {
    AircraftSpec::new(
        "Light Single",
        AircraftParams {
            wingspan_m: 11.0,
            aspect_ratio: 7.32,
            cl_max_clean,
            stall_aoa_clean_deg: 17.0,
            shape_factor: 0.8,
        },
    )
    .expect("valid aircraft")
}

fn narrowbody() -> AircraftSpec {
    AircraftSpec::new(
        "Narrowbody",
        AircraftParams {
            wingspan_m: 35.8,
            aspect_ratio: 9.45,
            cl_max_clean: 1.4,
            stall_aoa_clean_deg: 15.0,
            shape_factor: 1.15,
        },
    )
    .expect("valid aircraft")
}

fn jumbo() -> AircraftSpec {
    AircraftSpec::new(
        "Jumbo",
        AircraftParams {
            wingspan_m: 68.5,
            aspect_ratio: 8.5,
            cl_max_clean: 1.45,
            stall_aoa_clean_deg: 16.0,
            shape_factor: 1.1,
        },
    )
    .expect("valid aircraft")
}

fn piston() -> EngineSpec {
    EngineSpec::new("Piston", 800.0, 0.000070).expect("valid engine")
}

fn turbofan(thrust_kn: f64) -> EngineSpec {
    EngineSpec::from_kilonewtons("Turbofan", thrust_kn, 0.000036).expect("valid engine")
}

fn light_model() -> PerformanceModel {
    PerformanceModel::new(light_single(1.6), piston(), 1, 1000.0).expect("model")
}

fn narrowbody_model() -> PerformanceModel {
    PerformanceModel::new(narrowbody(), turbofan(121.0), 2, 70_000.0).expect("model")
}

#[test]
fn derived_configuration_matches_inputs() {
    let model = narrowbody_model();
    assert!((model.wing_area_m2() - 35.8 * 35.8 / 9.45).abs() < 1e-9);
    assert!((model.total_thrust_n() - 242_000.0).abs() < 1e-6);
    assert!((model.weight_n() - 70_000.0 * G0).abs() < 1e-6);
    assert_eq!(model.engine_count(), 2);
}

#[test]
fn light_single_stall_speed_matches_closed_form() {
    let model = light_model();
    let expected = (2.0 * 1000.0 * G0 / (RHO * (11.0_f64.powi(2) / 7.32) * 1.8)).sqrt();
    let got = model.stall_speed();
    assert!((got - expected).abs() < 1e-9, "stall = {got}, expected {expected}");
}

#[test]
fn stall_speed_uses_performance_ceiling_not_clean_clmax() {
    let a = PerformanceModel::new(light_single(1.2), piston(), 1, 1000.0).unwrap();
    let b = PerformanceModel::new(light_single(2.0), piston(), 1, 1000.0).unwrap();
    assert_eq!(a.stall_speed(), b.stall_speed());

    let params = ModelParameters {
        performance_cl_max: 1.2,
        ..ModelParameters::default()
    };
    let c = PerformanceModel::with_parameters(light_single(1.6), piston(), 1, 1000.0, params)
        .unwrap();
    assert!(c.stall_speed() > a.stall_speed());
}

#[test]
fn non_positive_airspeed_yields_degenerate_snapshot() {
    let model = light_model();
    for v in [0.0, -10.0] {
        let snap = model.performance_at(v);
        assert_eq!(snap.lift_coefficient, 0.0);
        assert_eq!(snap.drag_coefficient, 0.0);
        assert!(snap.drag_n.is_infinite() && snap.drag_n > 0.0);
        assert_eq!(snap.aoa_deg, 0.0);
    }
}

#[test]
fn lift_coefficient_strictly_decreases_with_airspeed() {
    let model = narrowbody_model();
    let mut previous = f64::INFINITY;
    for v in 1..=400 {
        let cl = model.performance_at(f64::from(v)).lift_coefficient;
        assert!(cl < previous, "CL did not decrease at {v} m/s");
        previous = cl;
    }
}

#[test]
fn snapshot_follows_parabolic_polar() {
    let model = narrowbody_model();
    let v = 150.0;
    let snap = model.performance_at(v);
    let s = model.wing_area_m2();
    let cl = 2.0 * model.weight_n() / (RHO * s * v * v);
    let cd = 0.020 + cl * cl / (PI * 9.45 * 0.80);
    assert!((snap.lift_coefficient - cl).abs() < 1e-12);
    assert!((snap.drag_coefficient - cd).abs() < 1e-12);
    assert!((snap.drag_n - 0.5 * RHO * v * v * s * cd).abs() < 1e-6);
    assert!((snap.aoa_deg - (cl / (2.0 * PI)).to_degrees()).abs() < 1e-12);
}

#[test]
fn minimum_drag_speed_minimises_drag() {
    for model in [light_model(), narrowbody_model()] {
        let v_md = model.minimum_drag_speed();
        let d_min = model.performance_at(v_md).drag_n;
        for i in -50..=50 {
            if i == 0 {
                continue;
            }
            let v = v_md * (1.0 + f64::from(i) * 0.005);
            let d = model.performance_at(v).drag_n;
            assert!(
                d >= d_min * (1.0 - 1e-12),
                "drag {d} at {v} m/s below minimum {d_min} at {v_md} m/s"
            );
        }
    }
}

#[test]
fn max_level_speed_is_last_speed_within_thrust() {
    let model = narrowbody_model();
    let v_max = model.max_level_speed(model.stall_speed());
    assert!(v_max > model.stall_speed() && v_max < 499.0, "v_max = {v_max}");
    assert_eq!(v_max.fract(), 0.0);
    assert!(model.performance_at(v_max).drag_n <= model.total_thrust_n());
    assert!(model.performance_at(v_max + 1.0).drag_n > model.total_thrust_n());
}

#[test]
fn max_level_speed_saturates_at_search_ceiling() {
    let model = PerformanceModel::new(jumbo(), turbofan(514.0), 4, 200_000.0).unwrap();
    assert_eq!(model.max_level_speed(model.stall_speed()), 499.0);

    let params = ModelParameters {
        speed_search_ceiling_m_s: 200,
        ..ModelParameters::default()
    };
    let capped =
        PerformanceModel::with_parameters(jumbo(), turbofan(514.0), 4, 200_000.0, params).unwrap();
    assert_eq!(capped.max_level_speed(capped.stall_speed()), 199.0);
}

#[test]
fn feasible_analysis_reports_envelope_and_cruise() {
    let model = narrowbody_model();
    let result = model.run_analysis();
    assert!(result.is_feasible());
    assert!(result.reason().is_none());

    let report = result.report().expect("feasible report");
    assert!(report.stall_speed_m_s > 0.0);
    assert!(report.max_speed_m_s > 0.0);
    assert!((report.cruise.speed_m_s - 0.85 * report.max_speed_m_s).abs() < 1e-12);
    assert!(report.cruise.thrust_required_n > 0.0);
    assert!(report.cruise.lift_coefficient > 0.0);
    assert!(report.cruise.aoa_deg > 0.0);
    assert!(report.cruise.fuel_flow_kg_per_hour > 0.0);

    let cruise_state = model.performance_at(report.cruise.speed_m_s);
    assert!((report.cruise.thrust_required_n - cruise_state.drag_n).abs() < 1e-9);
    let fuel = 0.000036 * cruise_state.drag_n * 3600.0;
    assert!((report.cruise.fuel_flow_kg_per_hour - fuel).abs() < 1e-9);
    assert!((report.stall_speed_kmh() - report.stall_speed_m_s * 3.6).abs() < 1e-9);
    assert!((report.cruise.thrust_required_kn() * 1000.0 - cruise_state.drag_n).abs() < 1e-6);
}

#[test]
fn light_single_is_feasible_on_its_piston_engine() {
    let result = light_model().run_analysis();
    let report = result.report().expect("light single should be feasible");
    assert!(report.min_drag_n < 800.0);
    assert!((report.cruise.speed_m_s - 0.85 * report.max_speed_m_s).abs() < 1e-12);
}

#[test]
fn speed_search_from_back_of_drag_curve_stops_below_stall() {
    let model = light_model();
    let v_stall = model.stall_speed();
    assert!(v_stall < model.minimum_drag_speed());
    assert!(model.performance_at(23.0).drag_n > 800.0);
    assert_eq!(model.max_level_speed(v_stall), 22.0);
}

#[test]
fn underpowered_configuration_is_infeasible_with_both_thrust_figures() {
    let heavy = AircraftSpec::new(
        "Heavy",
        AircraftParams {
            wingspan_m: 79.75,
            aspect_ratio: 7.5,
            cl_max_clean: 1.5,
            stall_aoa_clean_deg: 16.5,
            shape_factor: 1.05,
        },
    )
    .unwrap();
    let model = PerformanceModel::new(heavy, piston(), 1, 500_000.0).unwrap();
    let result = model.run_analysis();
    assert!(!result.is_feasible());

    let min_drag = model.performance_at(model.minimum_drag_speed()).drag_n;
    let reason = result.reason().expect("reason");
    assert!(reason.contains(&format!("{:.2} kN", min_drag / 1000.0)), "{reason}");
    assert!(reason.contains("0.80 kN"), "{reason}");

    match result {
        AnalysisResult::Infeasible(infeasible) => {
            assert!((infeasible.min_drag_n - min_drag).abs() < 1e-9);
            assert_eq!(infeasible.available_thrust_n, 800.0);
        }
        AnalysisResult::Feasible(_) => panic!("expected infeasible result"),
    }
}

#[test]
fn constructor_rejects_invalid_inputs() {
    let err = PerformanceModel::new(light_single(1.6), piston(), 0, 1000.0).unwrap_err();
    assert_eq!(err, PerformanceError::Propulsion(PropulsionError::NoEngines));

    for mass in [0.0, -5.0, f64::NAN] {
        let err = PerformanceModel::new(light_single(1.6), piston(), 1, mass).unwrap_err();
        assert!(matches!(err, PerformanceError::InvalidMass(_)));
    }

    let params = ModelParameters {
        oswald_efficiency: 0.0,
        ..ModelParameters::default()
    };
    let err = PerformanceModel::with_parameters(light_single(1.6), piston(), 1, 1000.0, params)
        .unwrap_err();
    assert!(matches!(
        err,
        PerformanceError::InvalidParameter {
            name: "Oswald efficiency",
            ..
        }
    ));
}

#[test]
fn specs_reject_non_positive_fields() {
    let bad = AircraftSpec::new(
        "Bad",
        AircraftParams {
            wingspan_m: 0.0,
            aspect_ratio: 7.0,
            cl_max_clean: 1.5,
            stall_aoa_clean_deg: 15.0,
            shape_factor: 1.0,
        },
    );
    assert!(bad.unwrap_err().to_string().contains("wingspan"));

    let bad = AircraftSpec::new(
        "Bad",
        AircraftParams {
            wingspan_m: 10.0,
            aspect_ratio: 7.0,
            cl_max_clean: 1.5,
            stall_aoa_clean_deg: 15.0,
            shape_factor: -1.0,
        },
    );
    assert!(bad.unwrap_err().to_string().contains("shape factor"));

    assert!(EngineSpec::new("Bad", f64::NAN, 0.00003).is_err());
    assert!(EngineSpec::new("Bad", 1000.0, 0.0).is_err());
}

#[test]
fn models_are_independent_across_threads() {
    let handles: Vec<_> = [60_000.0, 70_000.0, 80_000.0]
        .into_iter()
        .map(|mass| {
            std::thread::spawn(move || {
                PerformanceModel::new(narrowbody(), turbofan(121.0), 2, mass)
                    .unwrap()
                    .run_analysis()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let stall: Vec<f64> = results
        .iter()
        .map(|r| r.report().unwrap().stall_speed_m_s)
        .collect();
    assert!(stall[0] < stall[1] && stall[1] < stall[2]);
}
