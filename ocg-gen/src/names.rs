//! Passenger name providers.
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Anything that can hand out human-readable passenger names.
///
/// The random source is passed in so that seeded runs stay reproducible end to end.
pub trait NameSource {
    /// A fresh name, drawn with `rng`.
    fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String;
}

/// English first/last names from the `fake` crate.
#[derive(Clone, Copy, Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct FakeNames;

impl NameSource for FakeNames {
    fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> String {
        Name().fake_with_rng(rng)
    }
}
