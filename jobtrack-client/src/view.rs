//! What the list and form show for a given [`SyncState`].

use shared_types::Job;

use crate::filter::StatusFilter;
use crate::store::SyncState;

pub const EMPTY_LIST_MESSAGE: &str = "No jobs match this filter. Try a different status or add a job.";

/// Jobs passing `filter`, in collection order.
pub fn filtered(state: &SyncState, filter: StatusFilter) -> Vec<&Job> {
    state.jobs.iter().filter(|job| filter.matches(job)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub filter: StatusFilter,
    pub label: String,
    pub active: bool,
}

/// The filter row. Only the `All` chip carries a count, and it is always the
/// unfiltered collection size.
pub fn filter_chips(state: &SyncState, active: StatusFilter) -> Vec<FilterChip> {
    StatusFilter::choices()
        .map(|filter| {
            let label = match filter {
                StatusFilter::All => format!("All ({})", state.jobs.len()),
                StatusFilter::Only(status) => status.label().to_string(),
            };
            FilterChip {
                filter,
                label,
                active: filter == active,
            }
        })
        .collect()
}

#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Jobs(Vec<&'a Job>),
}

impl<'a> ListView<'a> {
    pub fn new(state: &'a SyncState, filter: StatusFilter) -> Self {
        if state.loading {
            return ListView::Loading;
        }
        if let Some(error) = state.list_error.as_deref() {
            return ListView::Error(error);
        }

        let jobs = filtered(state, filter);
        if jobs.is_empty() {
            ListView::Empty
        } else {
            ListView::Jobs(jobs)
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormView<'a> {
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub error: Option<&'a str>,
}

impl<'a> FormView<'a> {
    pub fn new(state: &'a SyncState) -> Self {
        Self {
            submit_label: if state.submitting { "Saving..." } else { "Add Job" },
            submit_disabled: state.submitting,
            error: state.submit_error.as_deref(),
        }
    }
}
