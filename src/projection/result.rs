//! Projection output structures

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inputs::ReceiverInputs;
use crate::weights::{ProjectionWeights, WindSchedule};

/// The five adjustment multipliers, in computation order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentMultipliers {
    pub spread_multiplier: f64,
    pub def_multiplier: f64,
    pub total_multiplier: f64,
    pub qb_multiplier: f64,
    pub weather_multiplier: f64,
}

impl ComponentMultipliers {
    /// Named components: spread, defense, total, QB, weather
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("spread_multiplier", self.spread_multiplier),
            ("def_multiplier", self.def_multiplier),
            ("total_multiplier", self.total_multiplier),
            ("qb_multiplier", self.qb_multiplier),
            ("weather_multiplier", self.weather_multiplier),
        ]
    }

    /// Combined multiplier before the safety bounds
    pub fn product(&self) -> f64 {
        self.spread_multiplier
            * self.def_multiplier
            * self.total_multiplier
            * self.qb_multiplier
            * self.weather_multiplier
    }

    fn rounded(&self) -> Self {
        Self {
            spread_multiplier: round4(self.spread_multiplier),
            def_multiplier: round4(self.def_multiplier),
            total_multiplier: round4(self.total_multiplier),
            qb_multiplier: round4(self.qb_multiplier),
            weather_multiplier: round4(self.weather_multiplier),
        }
    }
}

/// Result of projecting one receiver. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub receiver: String,
    pub base_yards: f64,
    /// `base_yards * final_multiplier`
    pub projection: f64,
    /// Combined multiplier after the floor/ceiling clamp
    pub final_multiplier: f64,
    pub uncapped_multiplier: f64,
    pub components: ComponentMultipliers,
    /// Copy of the inputs this result was computed from
    pub inputs: ReceiverInputs,
}

impl ProjectionResult {
    /// Rounded, serializable report with an echo of the weights used
    pub fn report(&self, weights: &ProjectionWeights) -> ProjectionReport {
        ProjectionReport {
            receiver: self.receiver.clone(),
            projection: round1(self.projection),
            base_yards: round1(self.base_yards),
            final_multiplier: round4(self.final_multiplier),
            uncapped_multiplier: round4(self.uncapped_multiplier),
            components: self.components.rounded(),
            inputs: self.inputs.clone(),
            weights: WeightsEcho::from(weights),
        }
    }
}

impl fmt::Display for ProjectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Receiver: {}", self.receiver)?;
        writeln!(f, "Base Yards: {}", round1(self.base_yards))?;
        writeln!(f, "Projection: {}", round1(self.projection))?;
        writeln!(
            f,
            "Final Multiplier: {} (uncapped {})",
            round4(self.final_multiplier),
            round4(self.uncapped_multiplier)
        )?;
        writeln!(f, "Components:")?;
        for (name, value) in self.components.entries() {
            writeln!(f, "  {}: {}", name, round4(value))?;
        }
        Ok(())
    }
}

/// Rounded projection plus the inputs and weights that produced it
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub receiver: String,
    pub projection: f64,
    pub base_yards: f64,
    pub final_multiplier: f64,
    pub uncapped_multiplier: f64,
    pub components: ComponentMultipliers,
    pub inputs: ReceiverInputs,
    pub weights: WeightsEcho,
}

/// Flat view of the weights, keyed by constant name
#[derive(Debug, Clone, Serialize)]
pub struct WeightsEcho {
    #[serde(flatten)]
    pub constants: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "WIND_THRESHOLDS")]
    pub wind_thresholds: WindSchedule,
}

impl From<&ProjectionWeights> for WeightsEcho {
    fn from(weights: &ProjectionWeights) -> Self {
        let constants = weights
            .constants()
            .into_iter()
            .map(|(name, value)| (name.to_string(), serde_json::Value::from(value)))
            .collect();

        Self {
            constants,
            wind_thresholds: weights.weather.wind.clone(),
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ProjectionResult {
        ProjectionResult {
            receiver: "Sample WR".to_string(),
            base_yards: 60.82,
            projection: 66.80734,
            final_multiplier: 1.0984436,
            uncapped_multiplier: 1.0984436,
            components: ComponentMultipliers {
                spread_multiplier: 1.03,
                def_multiplier: 1.036,
                total_multiplier: 1.01,
                qb_multiplier: 1.04,
                weather_multiplier: 0.98,
            },
            inputs: ReceiverInputs::sample(),
        }
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round1(66.80734), 66.8);
        assert_eq!(round1(60.82), 60.8);
        assert_eq!(round4(1.0984436), 1.0984);
    }

    #[test]
    fn test_entries_in_computation_order() {
        let names: Vec<_> = sample_result()
            .components
            .entries()
            .iter()
            .map(|(n, _)| *n)
            .collect();
        assert_eq!(
            names,
            [
                "spread_multiplier",
                "def_multiplier",
                "total_multiplier",
                "qb_multiplier",
                "weather_multiplier"
            ]
        );
    }

    #[test]
    fn test_display_format() {
        let text = sample_result().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Receiver: Sample WR");
        assert_eq!(lines[1], "Base Yards: 60.8");
        assert_eq!(lines[2], "Projection: 66.8");
        assert_eq!(lines[3], "Final Multiplier: 1.0984 (uncapped 1.0984)");
        assert_eq!(lines[4], "Components:");
        assert_eq!(lines[5], "  spread_multiplier: 1.03");
        assert_eq!(lines[9], "  weather_multiplier: 0.98");
    }

    #[test]
    fn test_report_echoes_weights() {
        let weights = ProjectionWeights::default_weights();
        let report = sample_result().report(&weights);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["projection"], 66.8);
        assert_eq!(json["components"]["def_multiplier"], 1.036);
        assert_eq!(json["inputs"]["receiver_name"], "Sample WR");
        assert_eq!(json["weights"]["SPREAD_CAP"], 10.0);
        assert_eq!(json["weights"]["WIND_THRESHOLDS"][1][1], 0.98);

        // Component order survives serialization
        let text = serde_json::to_string(&report.components).unwrap();
        let spread_at = text.find("spread_multiplier").unwrap();
        let weather_at = text.find("weather_multiplier").unwrap();
        assert!(spread_at < weather_at);
    }
}
