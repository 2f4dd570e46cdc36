//! Limit input form with the submit control.
//!
//! The form is `novalidate`: the browser's native number checks would block
//! bad input before our own validation can show its message.

#[cfg(test)]
#[path = "limit_form_test.rs"]
mod limit_form_test;

use contract::PrimesState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Numeric limit field plus submit button. Disabled while a request is out.
#[component]
pub fn LimitForm(on_submit: Callback<SubmitEvent>) -> impl IntoView {
    let state = expect_context::<RwSignal<PrimesState>>();
    let busy = move || state.with(submit_disabled);

    view! {
        <form class="limit-form" novalidate=true on:submit=move |ev| on_submit.run(ev)>
            <label class="limit-form__label" for="limit-input">"Enter Limit (N):"</label>
            <input
                id="limit-input"
                class="limit-form__input"
                type="number"
                placeholder="Enter a number > 1"
                prop:value=move || state.with(|s| s.limit_input.clone())
                on:input=move |ev| state.update(|s| s.set_limit_input(event_target_value(&ev)))
            />
            <button class="limit-form__submit" type="submit" disabled=busy>
                <Show when=busy fallback=|| submit_label(false)>
                    <span class="limit-form__spinner" role="status" aria-hidden="true"></span>
                    {submit_label(true)}
                </Show>
            </button>
        </form>
    }
}

/// True while a request is outstanding.
fn submit_disabled(state: &PrimesState) -> bool {
    state.view().is_loading()
}

/// Text of the submit button.
fn submit_label(busy: bool) -> &'static str {
    if busy { "Generating..." } else { "Generate Primes" }
}
