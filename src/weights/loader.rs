//! CSV-based weights loader
//!
//! Loads the projection constants from CSV files in data/weights/:
//! - `weights.csv`: `name,value` rows, one per scalar constant
//! - `wind_schedule.csv`: `mph,factor` rows, ascending by mph

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Default path to weights directory
pub const DEFAULT_WEIGHTS_PATH: &str = "data/weights";

/// Every scalar constant `weights.csv` must define
pub const CONSTANT_NAMES: [&str; 16] = [
    "BASE_WEIGHT_SPORTSBOOK",
    "BASE_WEIGHT_SEASON_AVG",
    "W_SPREAD",
    "SPREAD_CAP",
    "W_DEF_WR",
    "LEAGUE_BASELINE_WR_YPG_ALLOWED",
    "DEF_DELTA_CAP",
    "W_TOTAL",
    "LEAGUE_BASELINE_TOTAL",
    "TOTAL_DELTA_CAP",
    "W_QB",
    "QB_DELTA_CAP_PCT",
    "PENALTY_RAIN",
    "PENALTY_SNOW",
    "MIN_MULTIPLIER",
    "MAX_MULTIPLIER",
];

#[derive(Debug, Deserialize)]
struct ConstantRow {
    name: String,
    value: f64,
}

/// Load named scalar constants from any reader
pub fn load_constants_from_reader<R: std::io::Read>(reader: R) -> Result<HashMap<String, f64>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut constants = HashMap::new();

    for result in csv_reader.deserialize() {
        let row: ConstantRow = result?;
        let name = row.name.trim().to_string();
        if !CONSTANT_NAMES.contains(&name.as_str()) {
            return Err(ConfigError::UnknownConstant(name));
        }
        if constants.contains_key(&name) {
            return Err(ConfigError::DuplicateConstant(name));
        }
        constants.insert(name, row.value);
    }

    Ok(constants)
}

/// Load named scalar constants from `weights.csv`
pub fn load_constants(path: &Path) -> Result<HashMap<String, f64>> {
    let file = File::open(path.join("weights.csv"))?;
    load_constants_from_reader(file)
}

#[derive(Debug, Deserialize)]
struct WindRow {
    mph: f64,
    factor: f64,
}

/// Load `(mph, factor)` pairs from any reader, in file order
pub fn load_wind_schedule_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<(f64, f64)>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut steps = Vec::new();

    for result in csv_reader.deserialize() {
        let row: WindRow = result?;
        steps.push((row.mph, row.factor));
    }

    Ok(steps)
}

/// Load the wind schedule from `wind_schedule.csv`
pub fn load_wind_schedule(path: &Path) -> Result<Vec<(f64, f64)>> {
    let file = File::open(path.join("wind_schedule.csv"))?;
    load_wind_schedule_from_reader(file)
}

/// Raw contents of a weights directory, before validation
#[derive(Debug, Clone)]
pub struct LoadedWeights {
    pub constants: HashMap<String, f64>,
    pub wind_schedule: Vec<(f64, f64)>,
}

impl LoadedWeights {
    /// Load all weights from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_WEIGHTS_PATH))
    }

    /// Load all weights from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let loaded = Self {
            constants: load_constants(path)?,
            wind_schedule: load_wind_schedule(path)?,
        };
        info!(
            "Loaded {} weight constants and {} wind steps from {}",
            loaded.constants.len(),
            loaded.wind_schedule.len(),
            path.display()
        );
        Ok(loaded)
    }

    /// Look up a required constant
    pub fn constant(&self, name: &str) -> Result<f64> {
        self.constants
            .get(name)
            .copied()
            .ok_or_else(|| ConfigError::MissingConstant(name.to_string()))
    }
}
