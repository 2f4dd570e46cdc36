//! Single error banner for rejected input and failed fetches.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="error-banner" role="alert">{message}</div>
    }
}
