//! Receiver inputs and slate loading

mod data;
pub mod loader;

pub use data::ReceiverInputs;
pub use loader::{load_inputs, load_inputs_from_reader};
