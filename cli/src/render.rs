//! Plain-text rendering of the session view.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use contract::{EMPTY_RESULTS_MESSAGE, View, results_heading, total_badge};

/// Lines to print for `view`. Errors render as the bare message.
pub fn render_lines(view: View<'_>) -> Vec<String> {
    match view {
        View::Idle => Vec::new(),
        View::Loading => vec!["Generating...".to_owned()],
        View::Error(message) => vec![message.to_owned()],
        View::Results { requested_limit, count, primes } => {
            let body = if primes.is_empty() {
                EMPTY_RESULTS_MESSAGE.to_owned()
            } else {
                primes.iter().map(u64::to_string).collect::<Vec<_>>().join(" ")
            };
            vec![results_heading(requested_limit), total_badge(count), body]
        }
    }
}
