//! Projection engine and result structures

mod engine;
mod result;

pub use engine::ProjectionEngine;
pub use result::{ComponentMultipliers, ProjectionReport, ProjectionResult, WeightsEcho};
