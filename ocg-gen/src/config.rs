//! Generator configuration.
//!
//! Every field has a default, so a YAML config file only needs to name what it overrides; CLI
//! flags are applied on top of whatever the file provides.
use std::fs::File;
use std::path::Path;

use anyhow::{
    Context,
    Result,
};
use clap::ValueEnum;
use derive_setters::Setters;
use ocg_core::errors::ConfigError;
use serde::{
    Deserialize,
    Serialize,
};

/// Number of flights generated when nothing else is configured.
pub const DEFAULT_NUM_FLIGHTS: usize = 100;
/// Probability that a flight gets a `delayed` step after boarding.
pub const DEFAULT_DELAY_PROBABILITY: f64 = 0.2;

/// Plane models used when the config names none.
pub const DEFAULT_PLANE_TYPES: [&str; 4] = ["Boeing 737", "Airbus A320", "Boeing 747", "Airbus A380"];
/// Airport locations used when the config names none.
pub const DEFAULT_AIRPORTS: [&str; 5] = ["JFK", "LAX", "SFO", "ATL", "LHR"];

/// How event identifiers are assigned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EventIdScheme {
    /// One running counter across the whole log: `e1`, `e2`, ... for every event.
    #[default]
    Unique,
    /// Every event of flight `i` is keyed `e{i}`, so only the last step of each flight is kept.
    PerFlight,
}

/// Settings for [`FlightGenerator`](crate::FlightGenerator).
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Setters)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GeneratorConfig {
    /// Number of simulated flights.
    pub num_flights: usize,
    /// Plane models to draw from, uniformly.
    pub plane_types: Vec<String>,
    /// Airport locations to draw from, uniformly.
    pub airports: Vec<String>,
    /// Chance that a flight is delayed after boarding, in `[0, 1]`.
    pub delay_probability: f64,
    /// How event identifiers are assigned.
    pub event_ids: EventIdScheme,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_flights: DEFAULT_NUM_FLIGHTS,
            plane_types: DEFAULT_PLANE_TYPES.iter().map(|s| (*s).to_string()).collect(),
            airports: DEFAULT_AIRPORTS.iter().map(|s| (*s).to_string()).collect(),
            delay_probability: DEFAULT_DELAY_PROBABILITY,
            event_ids: EventIdScheme::default(),
        }
    }
}

impl GeneratorConfig {
    /// Read a config from a YAML file; fields it leaves out keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened, is not valid YAML, or names an unknown field.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("could not open config file {}", path.display()))?;
        serde_yaml::from_reader(file).with_context(|| format!("could not parse config file {}", path.display()))
    }

    /// Check that both catalogs are non-empty and the delay probability lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plane_types.is_empty() {
            return Err(ConfigError::EmptyCatalog { catalog: "plane type" });
        }
        if self.airports.is_empty() {
            return Err(ConfigError::EmptyCatalog { catalog: "airport" });
        }
        if !(0.0..=1.0).contains(&self.delay_probability) {
            return Err(ConfigError::InvalidProbability(self.delay_probability));
        }
        Ok(())
    }
}
