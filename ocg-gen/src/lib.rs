#![deny(
    // This is overly strict, of course. The intent is somewhat of a "quality seal," less to fix everything, and more to force us to add inline allows, which are even more needlessly verbose, but give us a mechanism to say "we think this is okay, but you might want to take a second look here."
    clippy::nursery,
    clippy::pedantic,
    // Every item is documented, private ones included.
    missing_docs,
    clippy::missing_docs_in_private_items,
)]

//! # ocg-gen – synthetic OCEL flight logs
//!
//! Builds object-centric event logs describing simulated flights and writes them out as
//! `.jsonocel` files. Every flight contributes one plane object (`p{i}`), one airport object
//! (`a{i}`) and a 4 or 5 step event sequence, all referencing both objects and carrying the
//! passenger's name.
//!
//! The entry point [`run`] validates a [`GeneratorConfig`], generates a log with
//! [`FlightGenerator`] and saves it with [`save_ocel_log`]. Library users who need control over
//! randomness or time call [`FlightGenerator::generate`] directly.
use std::path::{
    Path,
    PathBuf,
};

use anyhow::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{
    info,
    instrument,
};

pub mod config;
pub mod generator;
pub mod names;
pub mod utils;

pub use config::{
    EventIdScheme,
    GeneratorConfig,
};
pub use generator::{
    Flight,
    FlightGenerator,
};
pub use names::{
    FakeNames,
    NameSource,
};
pub use utils::{
    load_ocel_log,
    save_ocel_log,
};

/// Generate a flight log from `config`, starting the clock now, and write it to `output`.
///
/// A `seed` makes the flights (though not the start time) reproducible.
///
/// # Errors
///
/// Fails if `config` does not validate or the log cannot be written.
#[instrument(skip(config))]
pub fn run(config: GeneratorConfig, output: &Path, seed: Option<u64>) -> Result<PathBuf> {
    let generator = FlightGenerator::new(config)?;
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut clock = Utc::now();

    let log = generator.generate(&mut rng, &mut FakeNames, &mut clock);
    let path = save_ocel_log(&log, output)?;
    info!("OCEL log with {} events written to: {}", log.events.len(), path.display());
    Ok(path)
}

/// Unit tests.
#[cfg(test)]
mod tests;
