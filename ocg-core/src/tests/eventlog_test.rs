use super::*;
use crate::eventlog::{
    NAME_KEY,
    TIMESTAMP_KEY,
};

#[rstest]
fn test_event_accessors() {
    let event = Event::new("boarding", "2024-01-01T00:00:00+00:00");
    assert_eq!(event.activity(), Some("boarding"));
    assert_eq!(event.timestamp(), Some("2024-01-01T00:00:00+00:00"));
    assert_eq!(event.attributes.len(), 2);
}

#[rstest]
fn test_event_missing_fields() {
    let event = Event::default();
    assert_eq!(event.activity(), None);
    assert_eq!(event.timestamp(), None);
}

#[rstest]
fn test_case_id() {
    let case = Case::new("p1").with_events(vec![Event::new("arrival", "t")]);
    assert_eq!(case.id(), Some("p1"));
    assert_eq!(case.attributes.get(NAME_KEY).map(String::as_str), Some("p1"));
    assert!(case.events[0].attributes.contains_key(TIMESTAMP_KEY));
}

#[rstest]
fn test_event_log_from_cases() {
    let log: EventLog = vec![Case::new("a"), Case::new("b")].into();
    assert_eq!(log.len(), 2);
    assert!(!log.is_empty());
    assert_eq!(log.cases()[1].id(), Some("b"));
    assert!(EventLog::default().is_empty());
}
