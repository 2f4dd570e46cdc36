//! # client
//!
//! Leptos + WASM frontend for the prime number generator.
//!
//! The page is rendered on the server by the `primes-web` host and hydrated in
//! the browser. Validation, the request cycle and the view model come from the
//! `contract` crate; this crate only draws them and performs the browser fetch.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::ClientConfig;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ClientConfig::from_document();
    log::info!("prime service at {}", config.api_base_url);

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <App/> }
    });
}
