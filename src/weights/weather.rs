//! Weather penalties: rain, snow and a stepped wind schedule

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// One row of the wind schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindStep {
    pub threshold_mph: f64,
    pub factor: f64,
}

/// Piecewise-constant wind penalty.
///
/// Thresholds are strictly ascending. The factor for a wind speed is the one
/// paired with the last threshold not exceeding it; speeds below the first
/// threshold get 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(f64, f64)>", into = "Vec<(f64, f64)>")]
pub struct WindSchedule {
    steps: Vec<WindStep>,
}

impl WindSchedule {
    /// Build a schedule from `(threshold_mph, factor)` pairs
    pub fn new(pairs: Vec<(f64, f64)>) -> Result<Self> {
        let mut steps: Vec<WindStep> = Vec::with_capacity(pairs.len());

        for (index, (threshold_mph, factor)) in pairs.into_iter().enumerate() {
            if !threshold_mph.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: "wind threshold",
                    value: threshold_mph,
                });
            }
            if !factor.is_finite() {
                return Err(ConfigError::NonFinite {
                    name: "wind factor",
                    value: factor,
                });
            }
            if let Some(prev) = steps.last() {
                if threshold_mph <= prev.threshold_mph {
                    return Err(ConfigError::UnorderedWindSchedule {
                        index,
                        previous: prev.threshold_mph,
                        threshold: threshold_mph,
                    });
                }
            }
            steps.push(WindStep {
                threshold_mph,
                factor,
            });
        }

        Ok(Self { steps })
    }

    /// Default schedule (mph -> multiplier)
    pub fn default_schedule() -> Self {
        Self {
            steps: vec![
                WindStep {
                    threshold_mph: 0.0,
                    factor: 1.00,
                },
                WindStep {
                    threshold_mph: 10.0,
                    factor: 0.98,
                },
                WindStep {
                    threshold_mph: 15.0,
                    factor: 0.95,
                },
                WindStep {
                    threshold_mph: 20.0,
                    factor: 0.92,
                },
                WindStep {
                    threshold_mph: 25.0,
                    factor: 0.88,
                },
                WindStep {
                    threshold_mph: 30.0,
                    factor: 0.85,
                },
            ],
        }
    }

    pub fn steps(&self) -> &[WindStep] {
        &self.steps
    }

    /// Penalty factor for the given wind speed
    pub fn factor(&self, wind_mph: f64) -> f64 {
        self.steps
            .iter()
            .take_while(|step| wind_mph >= step.threshold_mph)
            .last()
            .map_or(1.0, |step| step.factor)
    }
}

impl Default for WindSchedule {
    fn default() -> Self {
        Self::default_schedule()
    }
}

impl TryFrom<Vec<(f64, f64)>> for WindSchedule {
    type Error = ConfigError;

    fn try_from(pairs: Vec<(f64, f64)>) -> Result<Self> {
        Self::new(pairs)
    }
}

impl From<WindSchedule> for Vec<(f64, f64)> {
    fn from(schedule: WindSchedule) -> Self {
        schedule
            .steps
            .into_iter()
            .map(|step| (step.threshold_mph, step.factor))
            .collect()
    }
}

/// Multiplicative weather penalties. Rain and snow compound when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPenalties {
    pub rain: f64,
    pub snow: f64,
    pub wind: WindSchedule,
}

impl Default for WeatherPenalties {
    fn default() -> Self {
        Self {
            rain: 0.92,
            snow: 0.90,
            wind: WindSchedule::default_schedule(),
        }
    }
}

impl WeatherPenalties {
    pub fn multiplier(&self, is_rain: bool, is_snow: bool, wind_mph: f64) -> f64 {
        let mut mult = 1.0;
        if is_rain {
            mult *= self.rain;
        }
        if is_snow {
            mult *= self.snow;
        }
        mult * self.wind.factor(wind_mph)
    }
}
