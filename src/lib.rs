//! Receiver Projections - receiving yards projections from market lines and game context
//!
//! This library provides:
//! - A base projection blending the sportsbook line with the season average
//! - Independent spread, defense, game total, QB and weather multipliers
//! - Safety bounds on the combined multiplier
//! - CSV-loaded weights and slates, with a runner for whole slates

pub mod error;
pub mod inputs;
pub mod weights;
pub mod projection;
pub mod slate;

// Re-export commonly used types
pub use error::ConfigError;
pub use inputs::ReceiverInputs;
pub use weights::{ProjectionWeights, WindSchedule};
pub use projection::{ProjectionEngine, ProjectionResult, ComponentMultipliers};
pub use slate::SlateRunner;
