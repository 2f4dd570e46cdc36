//! HTTP call to the external prime service.
//!
//! Client-side (hydrate): a real `GET` via `gloo-net`.
//! Server-side (SSR): a stub that fails, since the request is only ever made
//! from the browser in response to a form submission.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, non-2xx statuses and malformed bodies all come back as a
//! [`FetchError`]; the caller shows one generic banner and logs the cause.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{FetchError, PrimesResponse, PrimesSource};

#[cfg(not(feature = "hydrate"))]
const NOT_AVAILABLE_ON_SERVER: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn request_url(base_url: &str, limit: u64) -> String {
    contract::primes_endpoint(base_url, limit)
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> FetchError {
    FetchError::Network(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_response(status: u16, body: &str) -> Result<PrimesResponse, FetchError> {
    contract::decode_primes_body(status, body)
}

/// Fetch primes up to `limit` from `GET {base_url}/primes/{limit}`.
///
/// Issues exactly one request and never retries.
///
/// # Errors
///
/// Returns a [`FetchError`] for network failures, non-2xx statuses and bodies
/// that do not match `{ initial, primes }`.
pub async fn fetch_primes(base_url: &str, limit: u64) -> Result<PrimesResponse, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = request_url(base_url, limit);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(network_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(network_error)?;
        decode_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, limit);
        Err(FetchError::Network(NOT_AVAILABLE_ON_SERVER.to_owned()))
    }
}

/// Browser-side [`PrimesSource`] bound to one base URL.
#[derive(Clone, Debug)]
pub struct BrowserSource {
    base_url: String,
}

impl BrowserSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl PrimesSource for BrowserSource {
    async fn fetch_primes(&self, limit: u64) -> Result<PrimesResponse, FetchError> {
        fetch_primes(&self.base_url, limit).await
    }
}
