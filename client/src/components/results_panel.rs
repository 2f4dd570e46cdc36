//! Results panel for a successful response.
//!
//! Header shows the server-echoed limit and a count badge; the body lists each
//! prime in server order, or an explicit placeholder when the list is empty.

#[cfg(test)]
#[path = "results_panel_test.rs"]
mod results_panel_test;

use contract::{EMPTY_RESULTS_MESSAGE, results_heading, total_badge};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

/// One row of the results list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListEntry {
    Prime(u64),
    Empty,
}

fn list_entries(primes: &[u64]) -> Vec<ListEntry> {
    if primes.is_empty() {
        return vec![ListEntry::Empty];
    }
    primes.iter().copied().map(ListEntry::Prime).collect()
}

#[component]
pub fn ResultsPanel(requested_limit: u64, count: usize, primes: Vec<u64>) -> impl IntoView {
    let rows = list_entries(&primes)
        .into_iter()
        .map(|entry| match entry {
            ListEntry::Prime(p) => view! { <li class="results-panel__item">{p}</li> }.into_any(),
            ListEntry::Empty => view! {
                <li class="results-panel__item results-panel__item--empty">{EMPTY_RESULTS_MESSAGE}</li>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <section class="results-panel">
            <header class="results-panel__header">
                <span class="results-panel__title">{results_heading(requested_limit)}</span>
                <span class="results-panel__badge">{total_badge(count)}</span>
            </header>
            <ul class="results-panel__list">{rows}</ul>
        </section>
    }
}
