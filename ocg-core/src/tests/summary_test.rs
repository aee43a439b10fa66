use assertables::*;

use super::*;
use crate::errors::FieldLocation;
use crate::eventlog::{
    Attributes,
    NAME_KEY,
    TIMESTAMP_KEY,
};
use crate::summary::*;

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

#[fixture]
fn five_cases() -> Vec<Case> {
    (0..5)
        .map(|i| {
            Case::new(format!("case-{i}")).with_events(vec![
                Event::new("boarding", format!("2024-01-0{}T10:00:00+00:00", i + 1)),
                Event::new("arrival", format!("2024-01-0{}T11:00:00+00:00", i + 1)),
            ])
        })
        .collect()
}

fn render(cases: &[Case], offset: usize, limit: usize) -> String {
    let mut out = Vec::new();
    show_event_log_details(cases, offset, limit, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[rstest]
fn test_window_in_middle(five_cases: Vec<Case>) {
    let output = render(&five_cases, 2, 2);
    let expected = format!(
        "Window index: 0 Case index: 2 Case ID: case-2\n\
         Event index: 0 Event activity: boarding Event time: 2024-01-03T10:00:00+00:00\n\
         Event index: 1 Event activity: arrival Event time: 2024-01-03T11:00:00+00:00\n\
         {sep}\n\
         Window index: 1 Case index: 3 Case ID: case-3\n\
         Event index: 0 Event activity: boarding Event time: 2024-01-04T10:00:00+00:00\n\
         Event index: 1 Event activity: arrival Event time: 2024-01-04T11:00:00+00:00\n\
         {sep}\n",
        sep = separator(),
    );
    assert_eq!(output, expected);
}

#[rstest]
fn test_default_window(five_cases: Vec<Case>) {
    let output = render(&five_cases, DEFAULT_OFFSET, DEFAULT_LIMIT);
    assert_eq!(output.matches(&separator()).count(), 3);
    assert_contains!(output, "Window index: 2 Case index: 2 Case ID: case-2");
    assert_not_contains!(output, "case-3");
}

#[rstest]
#[case(5)]
#[case(10)]
#[case(usize::MAX)]
fn test_offset_out_of_range(five_cases: Vec<Case>, #[case] offset: usize) {
    assert_eq!(render(&five_cases, offset, 3), "");
}

#[rstest]
fn test_zero_limit(five_cases: Vec<Case>) {
    assert_eq!(render(&five_cases, 0, 0), "");
}

#[rstest]
fn test_limit_past_end(five_cases: Vec<Case>) {
    assert_eq!(window(&five_cases, 3, usize::MAX).len(), 2);
    assert_eq!(render(&five_cases, 3, 100).matches(&separator()).count(), 2);
}

#[rstest]
fn test_case_without_events() {
    let cases = vec![Case::new("empty")];
    assert_eq!(render(&cases, 0, 3), format!("Window index: 0 Case index: 0 Case ID: empty\n{}\n", separator()));
}

#[rstest]
fn test_missing_case_id(five_cases: Vec<Case>) {
    let mut cases = five_cases;
    cases[3].attributes = Attributes::new();

    let mut out = Vec::new();
    let err = show_event_log_details(&cases, 2, 3, &mut out).unwrap_err();
    assert!(matches!(
        err,
        SummaryError::MissingField { field: NAME_KEY, location: FieldLocation::Case { case_index: 3 } }
    ));
    assert!(out.is_empty());
}

#[rstest]
fn test_missing_event_timestamp(five_cases: Vec<Case>) {
    let mut cases = five_cases;
    cases[0].events[1].attributes.remove(TIMESTAMP_KEY);

    let err = show_event_log_details(&cases, 0, 1, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        SummaryError::MissingField {
            field: TIMESTAMP_KEY,
            location: FieldLocation::Event { case_index: 0, event_index: 1 }
        }
    ));
    assert_eq!(err.to_string(), "missing field `time:timestamp` on event 1 of case 0");
}

#[rstest]
fn test_malformed_case_outside_window_is_ignored(five_cases: Vec<Case>) {
    let mut cases = five_cases;
    cases[4].events[0].attributes.remove(NAME_KEY);
    assert_eq!(render(&cases, 0, 2).matches(&separator()).count(), 2);
}

#[rstest]
fn test_input_not_mutated(five_cases: Vec<Case>) {
    let before = five_cases.clone();
    render(&five_cases, 1, 3);
    assert_eq!(five_cases, before);
}
