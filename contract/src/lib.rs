//! Shared request/response contract for the prime number generator.
//!
//! This crate owns everything both front ends (`client` in the browser and
//! `cli` in the terminal) must agree on: the wire schema of the external prime
//! service, limit validation, the session state machine, and the view model the
//! renderers draw from. It has no I/O of its own; fetching is delegated to a
//! [`PrimesSource`] supplied by the caller.

pub mod error;
pub mod limit;
pub mod session;
pub mod source;
pub mod view;
pub mod wire;

pub use error::{FETCH_FAILED_MESSAGE, FetchError, INVALID_INPUT_MESSAGE, SubmitError};
pub use limit::{MIN_LIMIT, parse_limit};
pub use session::{PrimesState, Resolution, ResultMeta, Ticket};
pub use source::{PrimesSource, run_submission};
pub use view::{EMPTY_RESULTS_MESSAGE, View, results_heading, total_badge};
pub use wire::{PrimesResponse, decode_primes_body, primes_endpoint};
