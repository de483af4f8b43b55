//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod lift_curve {
    use std::io::{self, Write};

    use aero_liftcurve::LiftCurve;

    pub const HEADER: &str = "aoa_deg,lift_coefficient";

    /// Write the curve as CSV, one sample per row after the header.
    pub fn write_csv(writer: &mut dyn Write, curve: &LiftCurve) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)?;
        for sample in curve {
            writeln!(
                writer,
                "{:.6},{:.6}",
                sample.aoa_deg, sample.lift_coefficient
            )?;
        }
        writer.flush()
    }
}

pub mod analysis {
    use std::io::{self, Write};
    use std::path::Path;

    use aero_performance::{AnalysisResult, PerformanceModel};
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    use super::writer_for_path;

    /// Configuration that produced an analysis.
    #[derive(Debug, Clone, Serialize)]
    pub struct Metadata<'a> {
        pub aircraft: &'a str,
        pub engine: &'a str,
        pub engine_count: u32,
        pub takeoff_mass_kg: f64,
        pub wing_area_m2: f64,
        pub total_thrust_n: f64,
    }

    impl<'a> Metadata<'a> {
        pub fn from_model(model: &'a PerformanceModel) -> Self {
            Self {
                aircraft: model.aircraft().name(),
                engine: model.engine().name(),
                engine_count: model.engine_count(),
                takeoff_mass_kg: model.takeoff_mass_kg(),
                wing_area_m2: model.wing_area_m2(),
                total_thrust_n: model.total_thrust_n(),
            }
        }
    }

    #[derive(Serialize)]
    struct Report<'a> {
        generated_utc: String,
        #[serde(flatten)]
        meta: &'a Metadata<'a>,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        result: &'a AnalysisResult,
    }

    /// Write a pretty-printed JSON report; `-` writes to stdout.
    pub fn write_json(path: &Path, meta: &Metadata<'_>, result: &AnalysisResult) -> io::Result<()> {
        let report = Report {
            generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            meta,
            reason: result.reason(),
            result,
        };
        let mut writer = writer_for_path(path)?;
        to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()
    }
}
