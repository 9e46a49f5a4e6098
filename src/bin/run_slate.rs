//! Project every receiver in a slate CSV
//!
//! Usage: cargo run --bin run_slate -- data/slates/sample_slate.csv -o slate_projections.csv

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;

use receiver_projections::inputs::load_inputs;
use receiver_projections::{ProjectionResult, ProjectionWeights, SlateRunner};

#[derive(Debug, Parser)]
#[command(name = "run_slate", about = "Project receiving yards for a slate of player-games")]
struct Args {
    /// Slate CSV with one player-game per row
    slate: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "slate_projections.csv")]
    output: PathBuf,

    /// Directory containing weights.csv and wind_schedule.csv (defaults built in)
    #[arg(long)]
    weights_dir: Option<PathBuf>,
}

/// One output row per receiver
#[derive(Debug, Serialize)]
struct SlateRow<'a> {
    receiver: &'a str,
    base_yards: f64,
    projection: f64,
    final_multiplier: f64,
    uncapped_multiplier: f64,
    spread_multiplier: f64,
    def_multiplier: f64,
    total_multiplier: f64,
    qb_multiplier: f64,
    weather_multiplier: f64,
    capped: bool,
}

impl<'a> From<&'a ProjectionResult> for SlateRow<'a> {
    fn from(r: &'a ProjectionResult) -> Self {
        Self {
            receiver: &r.receiver,
            base_yards: r.base_yards,
            projection: r.projection,
            final_multiplier: r.final_multiplier,
            uncapped_multiplier: r.uncapped_multiplier,
            spread_multiplier: r.components.spread_multiplier,
            def_multiplier: r.components.def_multiplier,
            total_multiplier: r.components.total_multiplier,
            qb_multiplier: r.components.qb_multiplier,
            weather_multiplier: r.components.weather_multiplier,
            capped: r.final_multiplier != r.uncapped_multiplier,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();

    let runner = match &args.weights_dir {
        Some(dir) => SlateRunner::from_csv_path(dir)
            .with_context(|| format!("failed to load weights from {}", dir.display()))?,
        None => SlateRunner::with_weights(ProjectionWeights::default_weights())?,
    };

    let slate = load_inputs(&args.slate)?;
    info!("Loaded {} player-games from {}", slate.len(), args.slate.display());

    for inputs in &slate {
        for warning in inputs.warnings() {
            warn!("{}: {}", inputs.receiver_name, warning);
        }
    }

    // Project in parallel; collect keeps slate order
    let results: Vec<ProjectionResult> = slate
        .par_iter()
        .map(|inputs| runner.run(inputs.clone()))
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for result in &results {
        writer.serialize(SlateRow::from(result))?;
    }
    writer.flush()?;

    let capped = results
        .iter()
        .filter(|r| r.final_multiplier != r.uncapped_multiplier)
        .count();
    let total_yards: f64 = results.iter().map(|r| r.projection).sum();

    println!("Projected {} receivers in {:?}", results.len(), start.elapsed());
    println!("  Capped multipliers: {}", capped);
    println!("  Total projected yards: {:.1}", total_yards);
    if let Some(top) = results
        .iter()
        .max_by(|a, b| a.projection.total_cmp(&b.projection))
    {
        println!("  Top projection: {} ({:.1})", top.receiver, top.projection);
    }
    println!("Output written to {}", args.output.display());

    Ok(())
}
