//! Session state machine for one form instance.
//!
//! DESIGN
//! ======
//! A submission cycle is split in two so the owner can await the fetch in
//! between: [`PrimesState::submit`] validates and hands out a [`Ticket`], and
//! [`PrimesState::resolve`] applies the outcome for that ticket. Each ticket
//! carries a sequence number; only the most recently issued ticket can change
//! state, so an out-of-order completion can never overwrite a newer result.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::{FetchError, INVALID_INPUT_MESSAGE, SubmitError};
use crate::limit::parse_limit;
use crate::view::View;
use crate::wire::PrimesResponse;

/// Summary of the last successful response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultMeta {
    /// The `initial` value echoed by the server.
    pub requested_limit: u64,
    /// Number of primes received. Always equals `primes.len()`.
    pub count: usize,
}

/// Handle for one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    limit: u64,
}

impl Ticket {
    /// The validated limit to request.
    #[must_use]
    pub fn limit(self) -> u64 {
        self.limit
    }

    /// Sequence number of this dispatch.
    #[must_use]
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// What [`PrimesState::resolve`] did with an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome belonged to the latest ticket and was applied.
    Applied,
    /// A newer ticket exists; the outcome was dropped.
    Stale,
}

/// Transient UI state for the prime generator form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrimesState {
    pub limit_input: String,
    pub primes: Vec<u64>,
    pub busy: bool,
    pub error_message: Option<String>,
    pub result_meta: Option<ResultMeta>,
    latest_seq: u64,
}

impl PrimesState {
    /// Replace the raw text of the limit field.
    pub fn set_limit_input(&mut self, raw: impl Into<String>) {
        self.limit_input = raw.into();
    }

    /// Validate the current input and start a request cycle.
    ///
    /// Prior errors and results are cleared first. On success the state is
    /// busy and the returned ticket must be passed back to [`Self::resolve`].
    ///
    /// # Errors
    ///
    /// - [`SubmitError::Busy`] if a request is outstanding; state is untouched.
    /// - [`SubmitError::InvalidInput`] if the limit is rejected; the error
    ///   message is set and nothing is dispatched.
    pub fn submit(&mut self) -> Result<Ticket, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }
        self.error_message = None;
        self.primes.clear();
        self.result_meta = None;

        let limit = match parse_limit(&self.limit_input) {
            Ok(limit) => limit,
            Err(err) => {
                self.error_message = Some(INVALID_INPUT_MESSAGE.to_owned());
                return Err(err);
            }
        };

        self.latest_seq += 1;
        self.busy = true;
        Ok(Ticket { seq: self.latest_seq, limit })
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<PrimesResponse, FetchError>) -> Resolution {
        if ticket.seq != self.latest_seq {
            return Resolution::Stale;
        }
        self.busy = false;
        match outcome {
            Ok(resp) => {
                self.result_meta = Some(ResultMeta { requested_limit: resp.initial, count: resp.primes.len() });
                self.primes = resp.primes;
                self.error_message = None;
            }
            Err(err) => {
                self.primes.clear();
                self.result_meta = None;
                self.error_message = Some(err.user_message().to_owned());
            }
        }
        Resolution::Applied
    }

    /// Project the state onto what should be drawn.
    #[must_use]
    pub fn view(&self) -> View<'_> {
        if self.busy {
            return View::Loading;
        }
        if let Some(message) = self.error_message.as_deref() {
            return View::Error(message);
        }
        match self.result_meta {
            Some(meta) => View::Results { requested_limit: meta.requested_limit, count: meta.count, primes: &self.primes },
            None => View::Idle,
        }
    }
}
