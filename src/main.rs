//! Receiver Projections CLI
//!
//! Projects receiving yards for a single player-game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use receiver_projections::{ProjectionEngine, ProjectionWeights, ReceiverInputs};

#[derive(Debug, Parser)]
#[command(
    name = "receiver-projections",
    version,
    about = "Project receiving yards for one player-game"
)]
struct Cli {
    /// Receiver name
    #[arg(long, default_value = "Sample WR")]
    receiver: String,

    /// Sportsbook receiving yards line
    #[arg(long, default_value_t = 62.5)]
    line: f64,

    /// Player's season average receiving yards
    #[arg(long, default_value_t = 58.3)]
    season_avg: f64,

    /// QB passing yards line
    #[arg(long, default_value_t = 255.0)]
    qb_line: f64,

    /// QB season average passing yards
    #[arg(long, default_value_t = 240.0)]
    qb_avg: f64,

    /// Team point spread (negative = underdog)
    #[arg(long, default_value_t = -2.5, allow_negative_numbers = true)]
    spread: f64,

    /// Game total (over/under)
    #[arg(long, default_value_t = 46.5)]
    total: f64,

    /// Opponent's average yards allowed to WRs per game
    #[arg(long, default_value_t = 162.0)]
    def_allowed: f64,

    #[arg(long)]
    rain: bool,

    #[arg(long)]
    snow: bool,

    /// Wind speed in mph
    #[arg(long, default_value_t = 12.0, allow_negative_numbers = true)]
    wind: f64,

    /// Directory containing weights.csv and wind_schedule.csv (defaults built in)
    #[arg(long)]
    weights_dir: Option<PathBuf>,

    /// Print the rounded report with weights as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> ReceiverInputs {
        ReceiverInputs::new(
            self.receiver.clone(),
            self.line,
            self.season_avg,
            self.qb_line,
            self.qb_avg,
            self.spread,
            self.total,
            self.def_allowed,
            self.rain,
            self.snow,
            self.wind,
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let weights = match &cli.weights_dir {
        Some(dir) => ProjectionWeights::from_csv_path(dir)
            .with_context(|| format!("failed to load weights from {}", dir.display()))?,
        None => ProjectionWeights::default_weights(),
    };

    let inputs = cli.inputs();
    for warning in inputs.warnings() {
        warn!("{}: {}", inputs.receiver_name, warning);
    }

    let result = ProjectionEngine::new(&weights, inputs).project();

    if cli.json {
        let report = result.report(&weights);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", result);
    }

    Ok(())
}
