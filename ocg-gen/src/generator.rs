//! Synthetic flight event generation.
//!
//! Each flight is one plane, one airport and one passenger moving through a short lifecycle:
//!
//! ```text
//! boarding -> [delayed] -> departure -> in-flight -> arrival
//! ```
//!
//! All randomness comes from the caller's `Rng` and all timestamps from the caller's clock cursor,
//! so a seeded generator started at a fixed time always produces the same log.
use std::collections::BTreeMap;

use chrono::{
    DateTime,
    TimeDelta,
    Utc,
};
use ocg_core::errors::ConfigError;
use ocg_core::ocel::{
    Activity,
    OcelEvent,
    OcelLog,
    OcelObject,
    PASSENGER_KEY,
};
use rand::Rng;
use tracing::{
    debug,
    info,
    instrument,
};

use crate::config::{
    EventIdScheme,
    GeneratorConfig,
};
use crate::names::NameSource;

/// Smallest clock advance, in minutes, between two consecutive events.
pub const MIN_STEP_MINUTES: i64 = 1;
/// Largest clock advance, in minutes, between two consecutive events.
pub const MAX_STEP_MINUTES: i64 = 60;

/// The randomly drawn parts of one flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flight {
    /// Model of the plane flying this flight.
    pub plane_model: String,
    /// Location of the airport the flight operates from.
    pub airport: String,
    /// Passenger name attached to every event of the flight.
    pub passenger: String,
    /// Lifecycle steps, in emission order.
    pub activities: Vec<Activity>,
}

/// Activity sequence for one flight: `boarding`, an optional `delayed`, then `departure`,
/// `in-flight` and `arrival`.
pub fn flight_activities<R: Rng + ?Sized>(rng: &mut R, delay_probability: f64) -> Vec<Activity> {
    let mut activities = vec![Activity::Boarding];
    if rng.gen_bool(delay_probability) {
        activities.push(Activity::Delayed);
    }
    activities.extend([Activity::Departure, Activity::InFlight, Activity::Arrival]);
    activities
}

/// Generates OCEL flight logs from a validated [`GeneratorConfig`].
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug)]
pub struct FlightGenerator {
    /// Validated settings.
    config: GeneratorConfig,
}

impl FlightGenerator {
    /// Wrap `config` after checking it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a catalog is empty or the delay probability is outside `[0, 1]`.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Draw plane, airport, passenger and activity sequence for a single flight.
    pub fn sample_flight<R, N>(&self, rng: &mut R, names: &mut N) -> Flight
    where
        R: Rng + ?Sized,
        N: NameSource,
    {
        // catalogs are non-empty, checked in `new`
        let plane_model = self.config.plane_types[rng.gen_range(0..self.config.plane_types.len())].clone();
        let airport = self.config.airports[rng.gen_range(0..self.config.airports.len())].clone();
        let passenger = names.next_name(rng);
        let activities = flight_activities(rng, self.config.delay_probability);

        Flight { plane_model, airport, passenger, activities }
    }

    /// Build a complete log of `num_flights` flights.
    ///
    /// `clock` is advanced by a random whole number of minutes before every event, so on return it
    /// holds the timestamp of the last event emitted (or is untouched if no flights were
    /// generated).
    #[instrument(skip_all, fields(num_flights = self.config.num_flights, event_ids = ?self.config.event_ids))]
    pub fn generate<R, N>(&self, rng: &mut R, names: &mut N, clock: &mut DateTime<Utc>) -> OcelLog
    where
        R: Rng + ?Sized,
        N: NameSource,
    {
        let mut log = OcelLog::default();
        let mut emitted = 0usize;

        for i in 1..=self.config.num_flights {
            let flight = self.sample_flight(rng, names);
            let plane_id = format!("p{i}");
            let airport_id = format!("a{i}");
            debug!(flight = i, activities = ?flight.activities, "sampled flight");

            for &activity in &flight.activities {
                *clock += TimeDelta::minutes(rng.gen_range(MIN_STEP_MINUTES..=MAX_STEP_MINUTES));
                emitted += 1;

                let event_id = match self.config.event_ids {
                    EventIdScheme::Unique => format!("e{emitted}"),
                    EventIdScheme::PerFlight => format!("e{i}"),
                };
                log.events.insert(
                    event_id,
                    OcelEvent {
                        activity,
                        timestamp: *clock,
                        omap: vec![plane_id.clone(), airport_id.clone()],
                        vmap: BTreeMap::from([(PASSENGER_KEY.to_string(), flight.passenger.clone())]),
                    },
                );
            }

            log.objects.insert(plane_id, OcelObject::Plane { model: flight.plane_model });
            log.objects.insert(airport_id, OcelObject::Airport { location: flight.airport });
        }

        info!(emitted, events = log.events.len(), objects = log.objects.len(), "generated flight log");
        log
    }
}
