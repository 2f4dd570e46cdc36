//! Root application component and SSR shell.

use contract::PrimesState;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_URL_META, ClientConfig};
use crate::pages::home::HomePage;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided as context for the server render and written into the
/// head so the hydrating client picks up the same base URL.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let api_base_url = config.api_base_url.clone();
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_URL_META content=api_base_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session state record as context and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_default();
    let primes = RwSignal::new(PrimesState::default());

    provide_context(config);
    provide_context(primes);

    view! {
        <Title text="Prime Number Generator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
