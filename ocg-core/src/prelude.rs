//! Commonly used types, for glob import.
pub use crate::errors::*;
pub use crate::eventlog::{
    Case,
    Event,
    EventLog,
};
pub use crate::ocel::{
    Activity,
    ObjectType,
    OcelEvent,
    OcelLog,
    OcelObject,
};
pub use crate::summary::show_event_log_details;
