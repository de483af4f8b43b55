use std::fs;
use std::path::{Path, PathBuf};

use aircraft_performance::config::{load_aircraft_configs, load_model_config};
use aircraft_performance::liftcurve::{LiftCurve, LiftSample, generate_lift_curve};
use aircraft_performance::{Catalog, ModelParameters, lift_curve_file_name};
use clap::Parser;
use csv::ReaderBuilder;
use log::info;
use plotters::prelude::*;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a lift coefficient vs angle of attack curve to PNG"
)]
struct Cli {
    /// Aircraft name from the catalog (case-insensitive)
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    aircraft: Option<String>,
    /// Plot a curve previously exported as CSV (aoa_deg,lift_coefficient)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Chart title when plotting from CSV
    #[arg(long, default_value = "Custom Wing")]
    title: String,
    /// Extra aircraft records (YAML list, TOML file, or directory of TOML files)
    #[arg(long)]
    aircraft_catalog: Option<PathBuf>,
    /// TOML file overriding model constants
    #[arg(long)]
    model_config: Option<PathBuf>,
    /// Output PNG (defaults to lift_curve_<Aircraft_Name>.png)
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 700)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (name, curve) = match (&cli.input, &cli.aircraft) {
        (Some(path), _) => (cli.title.clone(), read_curve(path)?),
        (None, Some(aircraft_name)) => {
            let params = match &cli.model_config {
                Some(path) => ModelParameters::from_config(&load_model_config(path)?)?,
                None => ModelParameters::default(),
            };
            let mut catalog = Catalog::builtin()?;
            if let Some(path) = &cli.aircraft_catalog {
                catalog.extend_from_configs(&[], &load_aircraft_configs(path)?)?;
            }
            let aircraft = catalog.aircraft(aircraft_name)?;
            (
                aircraft.name().to_string(),
                generate_lift_curve(aircraft, &params.lift_curve),
            )
        }
        (None, None) => return Err(anyhow::anyhow!("either --aircraft or --input is required")),
    };

    let peak = curve
        .peak()
        .ok_or_else(|| anyhow::anyhow!("Lift curve has no samples"))?;

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(lift_curve_file_name(&name)));
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;

    render(&curve, peak, &name, output_str, (cli.width, cli.height))?;
    println!("Plot saved as '{}'", output.display());
    info!("rendered {} samples for {}", curve.len(), name);
    Ok(())
}

fn render(
    curve: &LiftCurve,
    peak: LiftSample,
    name: &str,
    output: &str,
    size: (u32, u32),
) -> anyhow::Result<()> {
    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE)?;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let x_max = curve.iter().map(|s| s.aoa_deg).fold(0.0_f64, f64::max);
    let y_max = peak.lift_coefficient.max(0.1) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("Lift Curve for {name}"), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max.max(1.0), 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Angle of Attack (Degrees)")
        .y_desc("Coefficient of Lift (CL)")
        .label_style(label_font.clone())
        .axis_desc_style(label_font.clone())
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|s| (s.aoa_deg, s.lift_coefficient)),
            ShapeStyle::from(&BLUE).stroke_width(2),
        ))?
        .label("Lift Curve")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));

    let guide = ShapeStyle::from(&RED.mix(0.7)).stroke_width(1);
    chart.draw_series(DashedLineSeries::new(
        [(peak.aoa_deg, 0.0), (peak.aoa_deg, y_max)],
        6,
        4,
        guide,
    ))?;
    chart.draw_series(DashedLineSeries::new(
        [(0.0, peak.lift_coefficient), (x_max, peak.lift_coefficient)],
        6,
        4,
        guide,
    ))?;
    chart
        .draw_series(std::iter::once(Circle::new(
            (peak.aoa_deg, peak.lift_coefficient),
            5,
            RED.filled(),
        )))?
        .label(format!(
            "Stall Point (CLmax={:.2} at {:.1}°)",
            peak.lift_coefficient, peak.aoa_deg
        ))
        .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(label_font)
        .draw()?;

    root.present()?;
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_curve(path: &Path) -> anyhow::Result<LiftCurve> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let aoa_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("aoa_deg"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'aoa_deg' column"))?;
    let cl_idx = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("lift_coefficient"))
        .ok_or_else(|| anyhow::anyhow!("CSV missing 'lift_coefficient' column"))?;

    let mut samples = Vec::new();
    for rec in rdr.records() {
        let r = rec?;
        let aoa_deg: f64 = r.get(aoa_idx).unwrap_or("").trim().parse().unwrap_or(f64::NAN);
        let lift_coefficient: f64 = r.get(cl_idx).unwrap_or("").trim().parse().unwrap_or(f64::NAN);
        if aoa_deg.is_finite() && lift_coefficient.is_finite() {
            samples.push(LiftSample {
                aoa_deg,
                lift_coefficient,
            });
        }
    }
    if samples.is_empty() {
        return Err(anyhow::anyhow!("No valid lift samples in the provided CSV"));
    }
    samples.sort_by(|a, b| a.aoa_deg.total_cmp(&b.aoa_deg));
    Ok(LiftCurve::from(samples))
}
