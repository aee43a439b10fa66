//! Flat case/event view of an event log, as consumed by the summarizer.
//!
//! Attributes are plain string maps keyed by the XES standard extension keys, so a log loaded
//! from any source can be summarized as long as it fills in [`NAME_KEY`] and [`TIMESTAMP_KEY`].
use std::collections::BTreeMap;

/// `concept:name` – case identifier on a case, activity label on an event.
pub const NAME_KEY: &str = "concept:name";
/// `time:timestamp` – event timestamp.
pub const TIMESTAMP_KEY: &str = "time:timestamp";

/// Attribute key to value.
pub type Attributes = BTreeMap<String, String>;

/// A single event of a case.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Event {
    /// Event attributes, including the activity and timestamp.
    pub attributes: Attributes,
}

impl Event {
    /// An event with just an activity label and a timestamp.
    #[must_use]
    pub fn new(activity: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let attributes =
            Attributes::from([(NAME_KEY.into(), activity.into()), (TIMESTAMP_KEY.into(), timestamp.into())]);
        Self { attributes }
    }

    /// The `concept:name` attribute.
    #[must_use]
    pub fn activity(&self) -> Option<&str> {
        self.attributes.get(NAME_KEY).map(String::as_str)
    }

    /// The `time:timestamp` attribute.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.attributes.get(TIMESTAMP_KEY).map(String::as_str)
    }
}

/// A single trace: identifying attributes plus its events in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Case {
    /// Case attributes; `concept:name` holds the case id.
    pub attributes: Attributes,
    /// Events, in the order they occurred.
    pub events: Vec<Event>,
}

impl Case {
    /// An empty case named `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            attributes: Attributes::from([(NAME_KEY.into(), id.into())]),
            events: vec![],
        }
    }

    /// Replace the case's events.
    #[must_use]
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }

    /// The case id, if the case has one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attributes.get(NAME_KEY).map(String::as_str)
    }
}

/// An ordered collection of cases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    /// Cases, in log order.
    pub cases: Vec<Case>,
}

impl EventLog {
    /// Number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether the log has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// All cases, in log order.
    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }
}

impl From<Vec<Case>> for EventLog {
    fn from(cases: Vec<Case>) -> Self {
        Self { cases }
    }
}
