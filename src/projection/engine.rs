//! Core projection engine for receiving yards

use log::debug;

use crate::inputs::ReceiverInputs;
use crate::weights::ProjectionWeights;
use super::result::{ComponentMultipliers, ProjectionResult};

/// Projects one receiver against a borrowed set of weights.
///
/// Stateless apart from its inputs: calling [`project`](Self::project) any
/// number of times gives identical results.
#[derive(Debug, Clone)]
pub struct ProjectionEngine<'w> {
    weights: &'w ProjectionWeights,
    inputs: ReceiverInputs,
}

impl<'w> ProjectionEngine<'w> {
    /// Create a new engine for one player-game
    pub fn new(weights: &'w ProjectionWeights, inputs: ReceiverInputs) -> Self {
        Self { weights, inputs }
    }

    pub fn inputs(&self) -> &ReceiverInputs {
        &self.inputs
    }

    /// Run the full adjustment pipeline
    pub fn project(&self) -> ProjectionResult {
        let base_yards = self.base_yards();
        let components = ComponentMultipliers {
            spread_multiplier: self.spread_multiplier(),
            def_multiplier: self.defense_multiplier(),
            total_multiplier: self.total_multiplier(),
            qb_multiplier: self.qb_multiplier(),
            weather_multiplier: self.weather_multiplier(),
        };

        let uncapped_multiplier = components.product();
        let final_multiplier = self.weights.bounds.clamp(uncapped_multiplier);
        let projection = base_yards * final_multiplier;

        debug!(
            "{}: base {:.2} x {:.4} (uncapped {:.4}) = {:.2}",
            self.inputs.receiver_name, base_yards, final_multiplier, uncapped_multiplier, projection
        );

        ProjectionResult {
            receiver: self.inputs.receiver_name.clone(),
            base_yards,
            projection,
            final_multiplier,
            uncapped_multiplier,
            components,
            inputs: self.inputs.clone(),
        }
    }

    fn base_yards(&self) -> f64 {
        self.weights
            .base
            .base_yards(self.inputs.sportsbook_line, self.inputs.season_avg_rec_yards)
    }

    fn spread_multiplier(&self) -> f64 {
        self.weights.spread.multiplier(self.inputs.spread)
    }

    fn defense_multiplier(&self) -> f64 {
        self.weights
            .defense
            .multiplier(self.inputs.defense_avg_wr_yards_allowed)
    }

    fn total_multiplier(&self) -> f64 {
        self.weights.total.multiplier(self.inputs.game_total_ou)
    }

    fn qb_multiplier(&self) -> f64 {
        self.weights
            .qb
            .multiplier(self.inputs.qb_pass_yards_line, self.inputs.qb_season_avg_pass_yards)
    }

    fn weather_multiplier(&self) -> f64 {
        self.weights
            .weather
            .multiplier(self.inputs.is_rain, self.inputs.is_snow, self.inputs.wind_mph)
    }
}
