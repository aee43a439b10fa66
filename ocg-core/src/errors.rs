//! Error types shared across the workspace.
use std::fmt;

use thiserror::Error;

/// Result of a fallible operation with nothing to return.
pub type EmptyResult = anyhow::Result<()>;

/// Invalid generator configuration, reported before any data is produced.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A catalog to draw from has no entries.
    #[error("the {catalog} catalog is empty")]
    EmptyCatalog {
        /// Which catalog, e.g. `airport`.
        catalog: &'static str,
    },

    /// The delay probability is NaN or outside `[0, 1]`.
    #[error("delay probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Where in an event log a required field was expected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldLocation {
    /// On the case itself.
    Case {
        /// Absolute index of the case.
        case_index: usize,
    },
    /// On one of a case's events.
    Event {
        /// Absolute index of the case.
        case_index: usize,
        /// Index of the event within its case.
        event_index: usize,
    },
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Case { case_index } => write!(f, "case {case_index}"),
            Self::Event { case_index, event_index } => write!(f, "event {event_index} of case {case_index}"),
        }
    }
}

/// Failure while printing an event log summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A case or event lacks `concept:name` or `time:timestamp`.
    #[error("missing field `{field}` on {location}")]
    MissingField {
        /// Attribute key that was looked up.
        field: &'static str,
        /// Case or event it was missing from.
        location: FieldLocation,
    },

    /// The output sink failed.
    #[error("could not write summary: {0}")]
    Io(#[from] std::io::Error),
}

/// An object type name other than `plane` or `airport`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown object type `{0}` (expected `plane` or `airport`)")]
pub struct ParseObjectTypeError(pub String);
