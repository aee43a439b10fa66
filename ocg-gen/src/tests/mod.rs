// Test helpers and cases are exempt from the crate's documentation lints.
#![allow(clippy::missing_docs_in_private_items, clippy::pedantic)]


use chrono::{
    DateTime,
    TimeZone,
    Utc,
};
use rand::rngs::StdRng;
use rand::{
    Rng,
    SeedableRng,
};
use rstest::*;

use crate::config::*;
use crate::generator::*;
use crate::names::NameSource;

/// Hands out `Passenger 1`, `Passenger 2`, ... without touching the random source.
#[derive(Default)]
pub(super) struct CountingNames(usize);

impl NameSource for CountingNames {
    fn next_name<R: Rng + ?Sized>(&mut self, _rng: &mut R) -> String {
        self.0 += 1;
        format!("Passenger {}", self.0)
    }
}

#[fixture]
pub(super) fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[fixture]
pub(super) fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap()
}
