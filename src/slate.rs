//! Slate runner for projecting many receivers with one set of weights
//!
//! Loads and validates weights once, then projects any number of player-games
//! without re-reading CSV files.

use crate::error::Result;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::{ProjectionWeights, ReceiverInputs};

/// Pre-loaded slate runner
///
/// # Example
/// ```ignore
/// let runner = SlateRunner::from_csv()?;
/// for inputs in load_inputs("week_12.csv")? {
///     println!("{}", runner.run(inputs));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SlateRunner {
    weights: ProjectionWeights,
}

impl SlateRunner {
    /// Create runner with default in-memory weights
    pub fn new() -> Self {
        Self {
            weights: ProjectionWeights::default_weights(),
        }
    }

    /// Create runner by loading weights from CSV files
    pub fn from_csv() -> Result<Self> {
        Ok(Self {
            weights: ProjectionWeights::from_csv()?,
        })
    }

    /// Create runner from specific weights directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self {
            weights: ProjectionWeights::from_csv_path(path)?,
        })
    }

    /// Create runner with pre-built weights, validating them first
    pub fn with_weights(weights: ProjectionWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Project a single player-game
    pub fn run(&self, inputs: ReceiverInputs) -> ProjectionResult {
        ProjectionEngine::new(&self.weights, inputs).project()
    }

    /// Project every row of a slate, in order
    pub fn run_slate(&self, slate: &[ReceiverInputs]) -> Vec<ProjectionResult> {
        slate.iter().map(|inputs| self.run(inputs.clone())).collect()
    }

    /// Weights used by this runner
    pub fn weights(&self) -> &ProjectionWeights {
        &self.weights
    }
}

impl Default for SlateRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::load_inputs;
    use crate::weights::SpreadWeights;
    use crate::ConfigError;

    #[test]
    fn test_runner_slate_order() {
        let runner = SlateRunner::new();
        let slate = load_inputs("data/slates/sample_slate.csv").unwrap();

        let results = runner.run_slate(&slate);
        assert_eq!(results.len(), slate.len());
        for (result, inputs) in results.iter().zip(&slate) {
            assert_eq!(result.receiver, inputs.receiver_name);
            assert_eq!(&result.inputs, inputs);
        }

        // Snow plus 24 mph wind against a stingy defense projects under the base
        assert!(results[3].projection < results[3].base_yards);
    }

    #[test]
    fn test_runner_from_csv_matches_default() {
        let from_files = SlateRunner::from_csv().expect("Failed to load weights");
        let in_memory = SlateRunner::new();
        assert_eq!(
            from_files.run(ReceiverInputs::sample()),
            in_memory.run(ReceiverInputs::sample())
        );
    }

    #[test]
    fn test_with_weights_rejects_bad_cap() {
        let mut weights = ProjectionWeights::default_weights();
        weights.spread = SpreadWeights { weight: 0.12, cap: -10.0 };
        assert!(matches!(
            SlateRunner::with_weights(weights),
            Err(ConfigError::NonPositiveCap { .. })
        ));
    }
}
