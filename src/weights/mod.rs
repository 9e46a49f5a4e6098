//! Projection weights: one group of weights and caps per adjustment category

mod adjustments;
mod weather;
pub mod loader;

pub use adjustments::{
    BaseBlend, BaselineWeights, MultiplierBounds, QbWeights, SpreadWeights, QB_AVG_EPSILON,
};
pub use weather::{WeatherPenalties, WindSchedule, WindStep};
pub use loader::{LoadedWeights, DEFAULT_WEIGHTS_PATH};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::inputs::ReceiverInputs;
use crate::projection::{ProjectionEngine, ProjectionResult};

/// Restrict `x` to `[lo, hi]`. A NaN `x` snaps to `hi`.
pub(crate) fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(x))
}

/// Container for every weight, cap and baseline the engine reads.
///
/// Built once at startup and shared read-only by any number of engines.
/// Deserializing runs the same validation as [`ProjectionWeights::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedWeights")]
pub struct ProjectionWeights {
    pub base: BaseBlend,
    pub spread: SpreadWeights,
    pub defense: BaselineWeights,
    pub total: BaselineWeights,
    pub qb: QbWeights,
    pub weather: WeatherPenalties,
    pub bounds: MultiplierBounds,
}

impl ProjectionWeights {
    /// Assemble weights from groups, rejecting inconsistent values
    pub fn new(
        base: BaseBlend,
        spread: SpreadWeights,
        defense: BaselineWeights,
        total: BaselineWeights,
        qb: QbWeights,
        weather: WeatherPenalties,
        bounds: MultiplierBounds,
    ) -> Result<Self> {
        let weights = Self {
            base,
            spread,
            defense,
            total,
            qb,
            weather,
            bounds,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Default receiver weights
    pub fn default_weights() -> Self {
        Self {
            base: BaseBlend::default(),
            spread: SpreadWeights::default(),
            defense: BaselineWeights::default_defense(),
            total: BaselineWeights::default_total(),
            qb: QbWeights::default(),
            weather: WeatherPenalties::default(),
            bounds: MultiplierBounds::default(),
        }
    }

    /// Load weights from CSV files in the default location (data/weights/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_WEIGHTS_PATH))
    }

    /// Load weights from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedWeights::load_from(path)?;
        Self::from_loaded(&loaded)
    }

    pub fn from_loaded(loaded: &LoadedWeights) -> Result<Self> {
        let get = |name: &str| loaded.constant(name);

        Self::new(
            BaseBlend {
                sportsbook: get("BASE_WEIGHT_SPORTSBOOK")?,
                season_avg: get("BASE_WEIGHT_SEASON_AVG")?,
            },
            SpreadWeights {
                weight: get("W_SPREAD")?,
                cap: get("SPREAD_CAP")?,
            },
            BaselineWeights {
                weight: get("W_DEF_WR")?,
                baseline: get("LEAGUE_BASELINE_WR_YPG_ALLOWED")?,
                cap: get("DEF_DELTA_CAP")?,
            },
            BaselineWeights {
                weight: get("W_TOTAL")?,
                baseline: get("LEAGUE_BASELINE_TOTAL")?,
                cap: get("TOTAL_DELTA_CAP")?,
            },
            QbWeights {
                weight: get("W_QB")?,
                cap_pct: get("QB_DELTA_CAP_PCT")?,
            },
            WeatherPenalties {
                rain: get("PENALTY_RAIN")?,
                snow: get("PENALTY_SNOW")?,
                wind: WindSchedule::new(loaded.wind_schedule.clone())?,
            },
            MultiplierBounds {
                floor: get("MIN_MULTIPLIER")?,
                ceiling: get("MAX_MULTIPLIER")?,
            },
        )
    }

    /// Flat `(name, value)` view of the scalar constants, in file order
    pub fn constants(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("BASE_WEIGHT_SPORTSBOOK", self.base.sportsbook),
            ("BASE_WEIGHT_SEASON_AVG", self.base.season_avg),
            ("W_SPREAD", self.spread.weight),
            ("SPREAD_CAP", self.spread.cap),
            ("W_DEF_WR", self.defense.weight),
            ("LEAGUE_BASELINE_WR_YPG_ALLOWED", self.defense.baseline),
            ("DEF_DELTA_CAP", self.defense.cap),
            ("W_TOTAL", self.total.weight),
            ("LEAGUE_BASELINE_TOTAL", self.total.baseline),
            ("TOTAL_DELTA_CAP", self.total.cap),
            ("W_QB", self.qb.weight),
            ("QB_DELTA_CAP_PCT", self.qb.cap_pct),
            ("PENALTY_RAIN", self.weather.rain),
            ("PENALTY_SNOW", self.weather.snow),
            ("MIN_MULTIPLIER", self.bounds.floor),
            ("MAX_MULTIPLIER", self.bounds.ceiling),
        ]
    }

    /// Check structural consistency. Run by every constructor except
    /// `default_weights`, whose values are known good.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.constants() {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }

        for (name, value) in [
            ("SPREAD_CAP", self.spread.cap),
            ("DEF_DELTA_CAP", self.defense.cap),
            ("TOTAL_DELTA_CAP", self.total.cap),
            ("QB_DELTA_CAP_PCT", self.qb.cap_pct),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveCap { name, value });
            }
        }

        self.bounds.validate()
    }

    /// Project a single receiver with these weights
    pub fn project(&self, inputs: ReceiverInputs) -> ProjectionResult {
        ProjectionEngine::new(self, inputs).project()
    }
}

/// Field-for-field mirror of [`ProjectionWeights`] as read from serde, before validation
#[derive(Deserialize)]
struct UncheckedWeights {
    base: BaseBlend,
    spread: SpreadWeights,
    defense: BaselineWeights,
    total: BaselineWeights,
    qb: QbWeights,
    weather: WeatherPenalties,
    bounds: MultiplierBounds,
}

impl TryFrom<UncheckedWeights> for ProjectionWeights {
    type Error = ConfigError;

    fn try_from(raw: UncheckedWeights) -> Result<Self> {
        Self::new(
            raw.base,
            raw.spread,
            raw.defense,
            raw.total,
            raw.qb,
            raw.weather,
            raw.bounds,
        )
    }
}

impl Default for ProjectionWeights {
    fn default() -> Self {
        Self::default_weights()
    }
}
