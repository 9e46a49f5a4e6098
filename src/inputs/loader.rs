//! Load a slate of receiver inputs from CSV
//!
//! Columns are the snake_case field names of [`ReceiverInputs`].

use anyhow::{Context, Result};
use csv::Reader;
use std::path::Path;

use super::ReceiverInputs;

/// Load every row of a slate file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<Vec<ReceiverInputs>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)
        .with_context(|| format!("failed to open slate {}", path.display()))?;
    collect_rows(reader)
}

/// Load inputs from any reader (e.g., string buffer, stdin)
pub fn load_inputs_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ReceiverInputs>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ReceiverInputs>> {
    let mut inputs = Vec::new();

    for (i, result) in reader.deserialize::<ReceiverInputs>().enumerate() {
        // Header is line 1
        let row: ReceiverInputs = result.with_context(|| format!("invalid slate row {}", i + 2))?;
        inputs.push(row);
    }

    Ok(inputs)
}
