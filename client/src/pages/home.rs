//! The prime generator page: form, then one of error banner or results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submission cycle for the page. `submit` on the shared
//! `PrimesState` validates and hands out a ticket; the fetch runs on the wasm
//! event loop and its outcome is applied with `resolve`, which drops anything
//! that is not the latest ticket.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use contract::{PrimesState, Ticket, View};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::error_banner::ErrorBanner;
use crate::components::limit_form::LimitForm;
use crate::components::results_panel::ResultsPanel;
use crate::config::ClientConfig;

/// What is drawn below the form card.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OutcomeSection {
    /// Idle, or busy (the spinner lives in the submit button).
    Hidden,
    Banner(String),
    Results { requested_limit: u64, count: usize, primes: Vec<u64> },
}

fn outcome_section(state: &PrimesState) -> OutcomeSection {
    match state.view() {
        View::Idle | View::Loading => OutcomeSection::Hidden,
        View::Error(message) => OutcomeSection::Banner(message.to_owned()),
        View::Results { requested_limit, count, primes } => {
            OutcomeSection::Results { requested_limit, count, primes: primes.to_vec() }
        }
    }
}

fn render_outcome(section: OutcomeSection) -> AnyView {
    match section {
        OutcomeSection::Hidden => ().into_any(),
        OutcomeSection::Banner(message) => view! { <ErrorBanner message/> }.into_any(),
        OutcomeSection::Results { requested_limit, count, primes } => {
            view! { <ResultsPanel requested_limit count primes/> }.into_any()
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<RwSignal<PrimesState>>();
    let config = expect_context::<ClientConfig>();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(ticket) = state.try_update(PrimesState::submit).and_then(Result::ok) else {
            return;
        };
        dispatch(state, &config, ticket);
    });

    view! {
        <main class="primes-page">
            <div class="primes-card">
                <h1 class="primes-card__header">"Prime Number Generator"</h1>
                <div class="primes-card__body">
                    <LimitForm on_submit/>
                </div>
            </div>
            {move || render_outcome(state.with(outcome_section))}
        </main>
    }
}

/// Fetch for `ticket` in the background and apply the outcome.
#[cfg(feature = "hydrate")]
fn dispatch(state: RwSignal<PrimesState>, config: &ClientConfig, ticket: Ticket) {
    use contract::{PrimesSource, Resolution};

    use crate::net::api::BrowserSource;

    let source = BrowserSource::new(config.api_base_url.clone());
    leptos::task::spawn_local(async move {
        let outcome = source.fetch_primes(ticket.limit()).await;
        if let Err(err) = &outcome {
            log::error!("prime fetch for limit {} failed: {err}", ticket.limit());
        }
        if state.try_update(|s| s.resolve(ticket, outcome)) == Some(Resolution::Stale) {
            log::warn!("dropped stale response for request #{}", ticket.seq());
        }
    });
}

#[cfg(not(feature = "hydrate"))]
fn dispatch(state: RwSignal<PrimesState>, config: &ClientConfig, ticket: Ticket) {
    let _ = (state, config, ticket);
}
