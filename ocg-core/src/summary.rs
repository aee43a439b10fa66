//! Human-readable dump of a window of cases from an event log.
//!
//! Output, per case in the window:
//!
//! ```text
//! Window index: 0 Case index: 2 Case ID: p3
//! Event index: 0 Event activity: boarding Event time: 2024-03-14T09:41:00+00:00
//! ...
//! ----------------------------------------------------------------------- (104 dashes)
//! ```
use std::io::Write;

use tracing::{
    debug,
    instrument,
};

use crate::errors::{
    FieldLocation,
    SummaryError,
};
use crate::eventlog::{
    Case,
    NAME_KEY,
    TIMESTAMP_KEY,
};

/// First case printed when no offset is given.
pub const DEFAULT_OFFSET: usize = 0;
/// Number of cases printed when no limit is given.
pub const DEFAULT_LIMIT: usize = 3;
/// Length of the dashed line after each case.
pub const SEPARATOR_WIDTH: usize = 104;

/// The half-open slice `[offset, offset + limit)` of `cases`, clamped to its bounds.
#[must_use]
pub fn window(cases: &[Case], offset: usize, limit: usize) -> &[Case] {
    let start = offset.min(cases.len());
    let end = offset.saturating_add(limit).min(cases.len());
    &cases[start..end]
}

/// Fields of one case pulled out ahead of printing.
struct CaseSummary<'a> {
    /// Absolute index of the case.
    case_index: usize,
    /// Case id.
    id: &'a str,
    /// Activity and timestamp of each event.
    events: Vec<(&'a str, &'a str)>,
}

impl<'a> CaseSummary<'a> {
    /// Collect the printed fields of `case`, failing on the first one that is missing.
    fn from_case(case: &'a Case, case_index: usize) -> Result<Self, SummaryError> {
        let id = case.id().ok_or(SummaryError::MissingField {
            field: NAME_KEY,
            location: FieldLocation::Case { case_index },
        })?;

        let events = case
            .events
            .iter()
            .enumerate()
            .map(|(event_index, event)| {
                let location = FieldLocation::Event { case_index, event_index };
                let activity = event
                    .activity()
                    .ok_or(SummaryError::MissingField { field: NAME_KEY, location })?;
                let timestamp = event
                    .timestamp()
                    .ok_or(SummaryError::MissingField { field: TIMESTAMP_KEY, location })?;
                Ok((activity, timestamp))
            })
            .collect::<Result<_, SummaryError>>()?;

        Ok(Self { case_index, id, events })
    }
}

/// Print the cases in `[offset, offset + limit)` and their events to `out`.
///
/// An offset past the end or a zero limit prints nothing. Every case in the window is checked
/// for its id, activity and timestamp fields before anything is written, so a malformed window
/// fails without partial output.
///
/// # Errors
///
/// Returns [`SummaryError::MissingField`] for a malformed case or event, and
/// [`SummaryError::Io`] if `out` fails.
#[instrument(skip(cases, out), fields(cases = cases.len()))]
pub fn show_event_log_details<W: Write + ?Sized>(
    cases: &[Case],
    offset: usize,
    limit: usize,
    out: &mut W,
) -> Result<(), SummaryError> {
    let summaries = window(cases, offset, limit)
        .iter()
        .enumerate()
        .map(|(i, case)| CaseSummary::from_case(case, offset + i))
        .collect::<Result<Vec<_>, _>>()?;

    for (window_index, summary) in summaries.iter().enumerate() {
        writeln!(out, "Window index: {window_index} Case index: {} Case ID: {}", summary.case_index, summary.id)?;
        for (event_index, (activity, timestamp)) in summary.events.iter().enumerate() {
            writeln!(out, "Event index: {event_index} Event activity: {activity} Event time: {timestamp}")?;
        }
        writeln!(out, "{:-<width$}", "", width = SEPARATOR_WIDTH)?;
    }
    out.flush()?;

    debug!(printed = summaries.len(), "summarized event log window");
    Ok(())
}
