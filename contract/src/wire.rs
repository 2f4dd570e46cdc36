//! Wire schema of the external prime service.
//!
//! `GET {base_url}/primes/{n}` answers `{ "initial": <int>, "primes": [...] }`.
//! The list is trusted as-is; nothing here checks that it holds primes.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Successful response body from the prime service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimesResponse {
    /// Limit the server actually used (echoed or clamped).
    pub initial: u64,
    /// Primes up to `initial`, in server order.
    pub primes: Vec<u64>,
}

/// Build the request URL for a validated limit.
///
/// A trailing `/` on `base_url` is ignored.
#[must_use]
pub fn primes_endpoint(base_url: &str, limit: u64) -> String {
    format!("{}/primes/{limit}", base_url.trim_end_matches('/'))
}

/// Map a raw HTTP status and body onto the response contract.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for any non-2xx status and
/// [`FetchError::Body`] when the body is not `{ initial, primes }`.
pub fn decode_primes_body(status: u16, body: &str) -> Result<PrimesResponse, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FetchError::Body(e.to_string()))
}
