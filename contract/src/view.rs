//! Render model shared by the browser and terminal front ends.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Placeholder shown in place of an empty result list.
pub const EMPTY_RESULTS_MESSAGE: &str = "No primes found in the specified range.";

/// What the page shows below the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View<'a> {
    /// Nothing submitted yet: only the form.
    Idle,
    /// A request is outstanding: progress indicator only.
    Loading,
    /// One error banner, no results panel.
    Error(&'a str),
    /// Results panel for the last successful response.
    Results { requested_limit: u64, count: usize, primes: &'a [u64] },
}

impl View<'_> {
    /// True when the submit control should be disabled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Header text of the results panel.
#[must_use]
pub fn results_heading(requested_limit: u64) -> String {
    format!("Results up to {requested_limit}")
}

/// Badge text with the number of primes received.
#[must_use]
pub fn total_badge(count: usize) -> String {
    format!("Total: {count}")
}
