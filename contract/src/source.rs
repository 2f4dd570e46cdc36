//! Dispatcher seam between the state machine and an HTTP stack.
//!
//! The browser fetches with `gloo-net` and the terminal with `reqwest`; both
//! implement [`PrimesSource`] so the submit -> fetch -> resolve flow is written
//! once in [`run_submission`].

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use crate::error::{FetchError, SubmitError};
use crate::session::{PrimesState, Resolution};
use crate::wire::PrimesResponse;

/// Something that can answer `GET {base_url}/primes/{limit}`.
///
/// Implementations issue exactly one request per call and never retry.
pub trait PrimesSource {
    fn fetch_primes(&self, limit: u64) -> impl Future<Output = Result<PrimesResponse, FetchError>>;
}

/// Run one full submission cycle against `source`.
///
/// The raw input already in `state.limit_input` is validated first; an invalid
/// limit never reaches `source`.
///
/// # Errors
///
/// Returns the [`SubmitError`] from [`PrimesState::submit`] when nothing was
/// dispatched. Fetch failures are not errors here: they are applied to `state`
/// and reported through its view.
pub async fn run_submission<S: PrimesSource>(state: &mut PrimesState, source: &S) -> Result<Resolution, SubmitError> {
    let ticket = state.submit()?;
    let outcome = source.fetch_primes(ticket.limit()).await;
    Ok(state.resolve(ticket, outcome))
}
