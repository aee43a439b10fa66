#![deny(
    // This is overly strict, of course. The intent is somewhat of a "quality seal," less to fix everything, and more to force us to add inline allows, which are even more needlessly verbose, but give us a mechanism to say "we think this is okay, but you might want to take a second look here."
    clippy::nursery,
    clippy::pedantic,
    // Every item is documented, private ones included.
    missing_docs,
    clippy::missing_docs_in_private_items,
)]
//! `ocg-gen` command line interface.
//!
//! Generates a synthetic OCEL flight log and writes it to `<output>.jsonocel`. Generator settings
//! come from an optional YAML config file; flags given on the command line take precedence.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ocg_gen::{
    EventIdScheme,
    GeneratorConfig,
};
use tracing::info;

/// Generate synthetic OCEL logs of simulated flights
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file name; `.jsonocel` is appended unless already present.
    #[arg(short, long)]
    output: PathBuf,

    /// Number of flights to simulate [default: 100]
    #[arg(short, long)]
    num_flights: Option<usize>,

    /// YAML file with generator settings (`plane_types`, `airports`, `delay_probability`, ...).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Probability (0.0–1.0) that a flight is delayed after boarding [default: 0.2]
    #[arg(long, value_parser = parse_probability)]
    delay_probability: Option<f64>,

    /// How event identifiers are assigned [default: unique]
    #[arg(long, value_enum)]
    event_ids: Option<EventIdScheme>,

    /// Seed for the random number generator, for reproducible flights.
    #[arg(long)]
    seed: Option<u64>,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

/// Parse a `--delay-probability` value, rejecting anything outside `[0, 1]`.
fn parse_probability(s: &str) -> Result<f64, String> {
    let val: f64 = s.parse().map_err(|_| format!("'{s}' isn't a valid float number"))?;
    if (0.0..=1.0).contains(&val) {
        Ok(val)
    } else {
        Err(format!("value must be between 0.0 and 1.0, got: {val}"))
    }
}

/// Settings from `--config` (or the defaults), overridden by any flags that were given.
fn load_config(args: &Cli) -> Result<GeneratorConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading generator config from {}", path.display());
            GeneratorConfig::from_yaml_file(path)?
        },
        None => GeneratorConfig::default(),
    };

    if let Some(num_flights) = args.num_flights {
        config = config.with_num_flights(num_flights);
    }
    if let Some(delay_probability) = args.delay_probability {
        config = config.with_delay_probability(delay_probability);
    }
    if let Some(event_ids) = args.event_ids {
        config = config.with_event_ids(event_ids);
    }
    Ok(config)
}

/// Set up logging, build the config and run the generator.
fn main() -> Result<()> {
    let args = Cli::parse();
    ocg_core::logging::setup(&args.verbosity);

    let config = load_config(&args)?;
    info!(num_flights = config.num_flights, "Generating flight log");
    ocg_gen::run(config, &args.output, args.seed)?;
    Ok(())
}
