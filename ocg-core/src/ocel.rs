//! Object-centric event log (OCEL 1.0, JSON flavour) data model.
//!
//! The serde attributes here define the on-disk `.jsonocel` shape; field names on the Rust side
//! drop the `ocel:` prefix. Events and objects are kept in `IndexMap`s, so the written file lists
//! them in the order they were generated (`e1, e2, ..., e10`) and that order survives a reload.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime,
    Utc,
};
use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::errors::ParseObjectTypeError;
use crate::eventlog::{
    Attributes,
    Case,
    Event,
    EventLog,
    NAME_KEY,
    TIMESTAMP_KEY,
};

/// Placeholder used for the global default activity and object type.
pub const INVALID_MARKER: &str = "__INVALID__";
/// Value of `ocel:version` in the global log section.
pub const OCEL_VERSION: &str = "1.0";
/// Value of `ocel:ordering` in the global log section.
pub const ORDERING_KEY: &str = "timestamp";
/// File extension of JSON OCEL logs, without the leading dot.
pub const JSONOCEL_EXTENSION: &str = "jsonocel";
/// Event attribute holding the passenger's name.
pub const PASSENGER_KEY: &str = "passenger";

/// Lifecycle steps of a simulated flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Activity {
    /// Passengers board; always the first step.
    Boarding,
    /// Optional hold between boarding and departure.
    Delayed,
    /// The plane leaves the gate.
    Departure,
    /// En route.
    InFlight,
    /// The plane lands; always the last step.
    Arrival,
}

impl Activity {
    /// Label used in the log, e.g. `in-flight`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boarding => "boarding",
            Self::Delayed => "delayed",
            Self::Departure => "departure",
            Self::InFlight => "in-flight",
            Self::Arrival => "arrival",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared object types of a flight log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// An aircraft, one per flight.
    Plane,
    /// The airport a flight operates from, one per flight.
    Airport,
}

impl ObjectType {
    /// Every object type, in declaration order.
    pub const ALL: [Self; 2] = [Self::Plane, Self::Airport];

    /// Label used in the log (`plane` or `airport`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plane => "plane",
            Self::Airport => "airport",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = ParseObjectTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseObjectTypeError(s.into()))
    }
}

/// An object instance together with its type-specific attributes.
///
/// Serialized with an adjacent tag, i.e. `{"ocel:type": "plane", "ocel:ovmap": {"model": ...}}`.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "ocel:type", content = "ocel:ovmap", rename_all = "lowercase")]
pub enum OcelObject {
    /// A plane and its model name.
    Plane {
        /// Aircraft model, e.g. `Airbus A320`.
        model: String,
    },
    /// An airport and its location code.
    Airport {
        /// Airport code, e.g. `JFK`.
        location: String,
    },
}

impl OcelObject {
    /// The tag this object is serialized with.
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Plane { .. } => ObjectType::Plane,
            Self::Airport { .. } => ObjectType::Airport,
        }
    }
}

/// A single event entry of `ocel:events`.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcelEvent {
    /// What happened.
    #[serde(rename = "ocel:activity")]
    pub activity: Activity,

    /// When it happened.
    #[serde(rename = "ocel:timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Identifiers of the objects this event refers to.
    #[serde(rename = "ocel:omap")]
    pub omap: Vec<String>,

    /// Free-form event attributes.
    #[serde(rename = "ocel:vmap")]
    pub vmap: BTreeMap<String, String>,
}

/// `ocel:global-event`: defaults applied to events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalEvent {
    /// Default activity, [`INVALID_MARKER`] unless set.
    #[serde(rename = "ocel:activity")]
    pub activity: String,
}

impl Default for GlobalEvent {
    fn default() -> Self {
        Self { activity: INVALID_MARKER.into() }
    }
}

/// `ocel:global-object`: defaults applied to objects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalObject {
    /// Default object type, [`INVALID_MARKER`] unless set.
    #[serde(rename = "ocel:type")]
    pub object_type: String,
}

impl Default for GlobalObject {
    fn default() -> Self {
        Self { object_type: INVALID_MARKER.into() }
    }
}

/// `ocel:global-log`: log-wide metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalLog {
    /// Declared attribute names; empty for flight logs.
    #[serde(rename = "ocel:attribute-names")]
    pub attribute_names: Vec<String>,

    /// Declared object types.
    #[serde(rename = "ocel:object-types")]
    pub object_types: Vec<ObjectType>,

    /// Format version, [`OCEL_VERSION`].
    #[serde(rename = "ocel:version")]
    pub version: String,

    /// Event ordering key, [`ORDERING_KEY`].
    #[serde(rename = "ocel:ordering")]
    pub ordering: String,
}

impl Default for GlobalLog {
    fn default() -> Self {
        Self {
            attribute_names: vec![],
            object_types: ObjectType::ALL.to_vec(),
            version: OCEL_VERSION.into(),
            ordering: ORDERING_KEY.into(),
        }
    }
}

/// A complete OCEL log, as written to a `.jsonocel` file.
#[allow(clippy::module_name_repetitions)]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcelLog {
    /// Event defaults.
    #[serde(rename = "ocel:global-event")]
    pub global_event: GlobalEvent,

    /// Object defaults.
    #[serde(rename = "ocel:global-object")]
    pub global_object: GlobalObject,

    /// Log-wide metadata.
    #[serde(rename = "ocel:global-log")]
    pub global_log: GlobalLog,

    /// Events by id, in insertion order.
    #[serde(rename = "ocel:events")]
    pub events: IndexMap<String, OcelEvent>,

    /// Objects by id, in insertion order.
    #[serde(rename = "ocel:objects")]
    pub objects: IndexMap<String, OcelObject>,
}

impl OcelLog {
    /// Objects of `object_type`, in insertion order.
    pub fn objects_of_type(&self, object_type: ObjectType) -> impl Iterator<Item = (&String, &OcelObject)> {
        self.objects.iter().filter(move |(_, obj)| obj.object_type() == object_type)
    }

    /// Returns the first `(event id, object id)` pair whose object is not in the object map.
    #[must_use]
    pub fn dangling_reference(&self) -> Option<(&str, &str)> {
        self.events.iter().find_map(|(event_id, event)| {
            event
                .omap
                .iter()
                .find(|object_id| !self.objects.contains_key(*object_id))
                .map(|object_id| (event_id.as_str(), object_id.as_str()))
        })
    }

    /// Events sorted by timestamp; ties keep insertion order.
    #[must_use]
    pub fn events_in_order(&self) -> Vec<(&String, &OcelEvent)> {
        let mut events: Vec<_> = self.events.iter().collect();
        events.sort_by_key(|(_, event)| event.timestamp);
        events
    }

    /// Flatten into one case per object of `object_type`.
    ///
    /// Cases follow the objects' insertion order, so flight `p{i}` is case `i - 1` in a generated
    /// log. Each case is named after its object id and holds, in timestamp order, every event that
    /// references that object. Event attributes carry the activity and timestamp under the
    /// standard keys plus the event's own `vmap` entries.
    #[must_use]
    pub fn case_view(&self, object_type: ObjectType) -> EventLog {
        let ordered = self.events_in_order();
        self.objects_of_type(object_type)
            .map(|(object_id, _)| {
                let events = ordered
                    .iter()
                    .filter(|(_, event)| event.omap.contains(object_id))
                    .map(|(_, event)| {
                        let mut attributes: Attributes = event.vmap.clone();
                        attributes.insert(NAME_KEY.into(), event.activity.to_string());
                        attributes.insert(TIMESTAMP_KEY.into(), event.timestamp.to_rfc3339());
                        Event { attributes }
                    })
                    .collect();
                Case::new(object_id.clone()).with_events(events)
            })
            .collect::<Vec<_>>()
            .into()
    }
}
