//! `reqwest`-backed dispatcher for the prime service.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::time::Duration;

use contract::{FetchError, PrimesResponse, PrimesSource, decode_primes_body, primes_endpoint};

/// Issues `GET {base_url}/primes/{n}` with a whole-request timeout.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Build a source bound to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url: base_url.to_owned() })
    }
}

impl PrimesSource for HttpSource {
    async fn fetch_primes(&self, limit: u64) -> Result<PrimesResponse, FetchError> {
        let url = primes_endpoint(&self.base_url, limit);
        tracing::debug!(%url, "requesting primes");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "prime service responded");

        decode_primes_body(status, &body)
    }
}
