//! Error kinds surfaced by a submission cycle.
//!
//! The UI deliberately collapses every fetch failure into one message. The
//! variants of [`FetchError`] exist so callers can log the cause.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the entered limit is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid number greater than 1.";

/// Message shown for any failure of the outbound request.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch prime numbers. Check that the prime service is reachable.";

/// Errors raised before a request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The limit is not a number or is less than 2.
    #[error("invalid limit input")]
    InvalidInput,
    /// A previous request is still outstanding.
    #[error("a request is already in flight")]
    Busy,
}

/// Failure of the outbound request to the prime service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (unreachable host, CORS, timeout).
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body did not match `{ initial, primes }`.
    #[error("malformed response body: {0}")]
    Body(String),
}

impl FetchError {
    /// The user-facing text for this failure. Identical for every variant.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}
