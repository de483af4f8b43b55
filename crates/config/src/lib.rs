//! Configuration models and loaders for the aircraft performance calculator.
//!
//! Catalogs are either a YAML list file or a directory of per-record TOML files.
//! The built-in catalog is embedded from `configs/engines.yaml` and `configs/aircraft.yaml`.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_ENGINES_YAML: &str = include_str!("../../../configs/engines.yaml");
const BUILTIN_AIRCRAFT_YAML: &str = include_str!("../../../configs/aircraft.yaml");

/// Engine record parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    pub name: String,
    /// Static thrust per engine (kN).
    pub thrust_kn: f64,
    /// Thrust-specific fuel consumption (kg / (N·s)).
    pub tsfc: f64,
}

/// Aircraft record parsed from catalog files.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AircraftConfig {
    pub name: String,
    pub wingspan_m: f64,
    pub aspect_ratio: f64,
    pub cl_max_clean: f64,
    pub stall_aoa_clean_deg: f64,
    pub shape_factor: f64,
}

/// Optional overrides for the model approximations. Missing tables and fields keep defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default)]
    pub performance: PerformanceOverrides,
    #[serde(default)]
    pub lift_curve: LiftCurveOverrides,
}

/// `[performance]` table of a model configuration file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PerformanceOverrides {
    pub air_density_kg_m3: Option<f64>,
    pub gravity_m_s2: Option<f64>,
    pub zero_lift_drag_coefficient: Option<f64>,
    pub oswald_efficiency: Option<f64>,
    pub performance_cl_max: Option<f64>,
    pub speed_search_ceiling_m_s: Option<u32>,
    pub cruise_speed_fraction: Option<f64>,
}

/// `[lift_curve]` table of a model configuration file.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LiftCurveOverrides {
    pub post_stall_drop_factor: Option<f64>,
    pub transition_band_deg: Option<f64>,
    pub plot_max_aoa_deg: Option<f64>,
    pub samples: Option<usize>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load engine records from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_engine_configs<P: AsRef<Path>>(path: P) -> Result<Vec<EngineConfig>, ConfigError> {
    load_records(path)
}

/// Load aircraft records from a YAML list, a single TOML record, or a directory of TOML records.
pub fn load_aircraft_configs<P: AsRef<Path>>(path: P) -> Result<Vec<AircraftConfig>, ConfigError> {
    load_records(path)
}

/// Load model overrides from a TOML file.
pub fn load_model_config<P: AsRef<Path>>(path: P) -> Result<ModelConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Engines shipped with the tool.
pub fn builtin_engine_configs() -> Result<Vec<EngineConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_ENGINES_YAML)?)
}

/// Aircraft shipped with the tool.
pub fn builtin_aircraft_configs() -> Result<Vec<AircraftConfig>, ConfigError> {
    Ok(serde_yaml::from_str(BUILTIN_AIRCRAFT_YAML)?)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
