use std::path::PathBuf;

use aircraft_performance::config::{
    load_aircraft_configs, load_engine_configs, load_model_config,
};
use aircraft_performance::export::{self, analysis, lift_curve};
use aircraft_performance::units::n_to_kn;
use aircraft_performance::{AnalysisResult, Catalog, ModelParameters, PerformanceModel};
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sea-level flight envelope, cruise fuel burn, and lift curve estimates"
)]
struct Cli {
    /// Aircraft name from the catalog (case-insensitive)
    #[arg(long, required_unless_present = "list")]
    aircraft: Option<String>,

    /// Engine name from the catalog (case-insensitive)
    #[arg(long, required_unless_present = "list")]
    engine: Option<String>,

    /// Number of installed engines
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    engine_count: u32,

    /// Total takeoff mass in kg
    #[arg(long, required_unless_present = "list")]
    weight_kg: Option<f64>,

    /// Extra engine records (YAML list, TOML file, or directory of TOML files)
    #[arg(long)]
    engine_catalog: Option<PathBuf>,

    /// Extra aircraft records (YAML list, TOML file, or directory of TOML files)
    #[arg(long)]
    aircraft_catalog: Option<PathBuf>,

    /// TOML file overriding model constants
    #[arg(long)]
    model_config: Option<PathBuf>,

    /// Write the analysis as JSON (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the lift curve as CSV (`-` for stdout)
    #[arg(long)]
    lift_csv: Option<PathBuf>,

    /// List catalog entries and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let catalog = build_catalog(&cli)?;
    if cli.list {
        print_catalog(&catalog);
        return Ok(());
    }

    let aircraft_name = cli
        .aircraft
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--aircraft is required"))?;
    let engine_name = cli
        .engine
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("--engine is required"))?;
    let weight_kg = cli
        .weight_kg
        .ok_or_else(|| anyhow::anyhow!("--weight-kg is required"))?;

    let params = match &cli.model_config {
        Some(path) => ModelParameters::from_config(&load_model_config(path)?)?,
        None => ModelParameters::default(),
    };

    let model = PerformanceModel::with_parameters(
        catalog.aircraft(aircraft_name)?.clone(),
        catalog.engine(engine_name)?.clone(),
        cli.engine_count,
        weight_kg,
        params,
    )?;

    println!("=== Configuration ===");
    println!(
        "Aircraft       : {} (wing area {:.2} m², aspect ratio {})",
        model.aircraft().name(),
        model.wing_area_m2(),
        model.aircraft().aspect_ratio()
    );
    println!(
        "Engines        : {} x {} (total thrust {:.2} kN)",
        model.engine_count(),
        model.engine().name(),
        n_to_kn(model.total_thrust_n())
    );
    println!("Weight         : {} kg", weight_kg);

    let result = model.run_analysis();

    if let Some(path) = &cli.json {
        analysis::write_json(path, &analysis::Metadata::from_model(&model), &result)?;
        info!("analysis written to {}", path.display());
    }

    println!();
    println!("=== Performance Analysis ===");
    let report = match &result {
        AnalysisResult::Feasible(report) => report,
        AnalysisResult::Infeasible(infeasible) => {
            println!("Status         : NOT FEASIBLE");
            println!("Reason         : {}", infeasible.reason());
            return Ok(());
        }
    };

    println!("Status         : FEASIBLE");
    println!("Stall speed    : {:.2} km/h", report.stall_speed_kmh());
    println!("Max speed (SL) : {:.2} km/h", report.max_speed_kmh());
    let cruise = &report.cruise;
    println!(
        "Cruise         : {:.2} km/h at {:.0}% max speed",
        cruise.speed_kmh(),
        model.parameters().cruise_speed_fraction * 100.0
    );
    println!(
        "Cruise state   : thrust {:.2} kN, AoA {:.2} deg, CL {:.3}",
        cruise.thrust_required_kn(),
        cruise.aoa_deg,
        cruise.lift_coefficient
    );
    println!("Fuel flow      : {:.2} kg/hour", cruise.fuel_flow_kg_per_hour);

    if let Some(path) = &cli.lift_csv {
        let curve = model.generate_lift_curve_data();
        let mut writer = export::writer_for_path(path)?;
        lift_curve::write_csv(&mut writer, &curve)?;
        info!("lift curve ({} samples) written to {}", curve.len(), path.display());
    }

    Ok(())
}

fn build_catalog(cli: &Cli) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::builtin()?;
    let engines = match &cli.engine_catalog {
        Some(path) => load_engine_configs(path)?,
        None => Vec::new(),
    };
    let aircraft = match &cli.aircraft_catalog {
        Some(path) => load_aircraft_configs(path)?,
        None => Vec::new(),
    };
    catalog.extend_from_configs(&engines, &aircraft)?;
    Ok(catalog)
}

fn print_catalog(catalog: &Catalog) {
    println!("=== Aircraft ===");
    for aircraft in catalog.aircraft_specs() {
        println!(
            "{:<18} span {:>6.2} m, AR {:>5.2}, CLmax {:.2} at {:.1} deg",
            aircraft.name(),
            aircraft.wingspan_m(),
            aircraft.aspect_ratio(),
            aircraft.cl_max_clean(),
            aircraft.stall_aoa_clean_deg()
        );
    }
    println!("=== Engines ===");
    for engine in catalog.engines() {
        println!(
            "{:<18} thrust {:>7.1} kN, TSFC {:.6} kg/(N·s)",
            engine.name(),
            n_to_kn(engine.thrust_n()),
            engine.tsfc()
        );
    }
}
