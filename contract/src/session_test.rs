use super::*;
use crate::error::FETCH_FAILED_MESSAGE;

fn ok(initial: u64, primes: &[u64]) -> Result<PrimesResponse, FetchError> {
    Ok(PrimesResponse { initial, primes: primes.to_vec() })
}

fn state_with(input: &str) -> PrimesState {
    let mut state = PrimesState::default();
    state.set_limit_input(input);
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = PrimesState::default();
    assert!(state.limit_input.is_empty());
    assert!(state.primes.is_empty());
    assert!(!state.busy);
    assert!(state.error_message.is_none());
    assert!(state.result_meta.is_none());
    assert_eq!(state.view(), View::Idle);
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_valid_input_goes_busy_and_issues_ticket() {
    let mut state = state_with("10");
    let ticket = state.submit().expect("ticket");
    assert_eq!(ticket.limit(), 10);
    assert_eq!(ticket.seq(), 1);
    assert!(state.busy);
    assert_eq!(state.view(), View::Loading);
}

#[test]
fn submit_invalid_input_sets_message_and_stays_idle() {
    let mut state = state_with("1");
    assert_eq!(state.submit(), Err(SubmitError::InvalidInput));
    assert!(!state.busy);
    assert_eq!(state.error_message.as_deref(), Some("Please enter a valid number greater than 1."));
    assert_eq!(state.view(), View::Error("Please enter a valid number greater than 1."));
}

#[test]
fn submit_invalid_input_clears_previous_results() {
    let mut state = state_with("10");
    let ticket = state.submit().expect("ticket");
    state.resolve(ticket, ok(10, &[2, 3, 5, 7]));

    state.set_limit_input("abc");
    assert_eq!(state.submit(), Err(SubmitError::InvalidInput));
    assert!(state.primes.is_empty());
    assert!(state.result_meta.is_none());
}

#[test]
fn submit_clears_previous_error() {
    let mut state = state_with("0");
    let _ = state.submit();
    assert!(state.error_message.is_some());

    state.set_limit_input("5");
    state.submit().expect("ticket");
    assert!(state.error_message.is_none());
}

#[test]
fn submit_while_busy_is_rejected_without_changes() {
    let mut state = state_with("10");
    state.submit().expect("ticket");
    let before = state.clone();

    state.set_limit_input("20");
    assert_eq!(state.submit(), Err(SubmitError::Busy));
    assert!(state.busy);
    assert_eq!(state.primes, before.primes);
    assert_eq!(state.error_message, before.error_message);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_success_populates_primes_and_meta() {
    let mut state = state_with("10");
    let ticket = state.submit().expect("ticket");
    assert_eq!(state.resolve(ticket, ok(10, &[2, 3, 5, 7])), Resolution::Applied);

    assert!(!state.busy);
    assert_eq!(state.primes, vec![2, 3, 5, 7]);
    assert_eq!(state.result_meta, Some(ResultMeta { requested_limit: 10, count: 4 }));
    assert_eq!(state.view(), View::Results { requested_limit: 10, count: 4, primes: &[2, 3, 5, 7] });
}

#[test]
fn resolve_uses_server_echoed_limit() {
    let mut state = state_with("1000000000");
    let ticket = state.submit().expect("ticket");
    state.resolve(ticket, ok(100, &[2, 3, 5]));
    assert_eq!(state.result_meta.map(|m| m.requested_limit), Some(100));
}

#[test]
fn resolve_count_always_matches_primes_len() {
    let mut state = state_with("30");
    let ticket = state.submit().expect("ticket");
    state.resolve(ticket, ok(30, &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]));
    let meta = state.result_meta.expect("meta");
    assert_eq!(meta.count, state.primes.len());
}

#[test]
fn resolve_empty_list_still_shows_results_panel() {
    let mut state = state_with("2");
    let ticket = state.submit().expect("ticket");
    state.resolve(ticket, ok(2, &[]));
    assert_eq!(state.view(), View::Results { requested_limit: 2, count: 0, primes: &[] });
}

#[test]
fn resolve_failure_sets_generic_message_and_keeps_primes_empty() {
    let mut state = state_with("20");
    let ticket = state.submit().expect("ticket");
    assert_eq!(state.resolve(ticket, Err(FetchError::Status(500))), Resolution::Applied);

    assert!(!state.busy);
    assert!(state.primes.is_empty());
    assert!(state.result_meta.is_none());
    assert_eq!(state.view(), View::Error(FETCH_FAILED_MESSAGE));
}

#[test]
fn resolve_failure_message_does_not_depend_on_cause() {
    let causes = [
        FetchError::Status(404),
        FetchError::Network("cors".to_owned()),
        FetchError::Body("eof".to_owned()),
    ];
    for cause in causes {
        let mut state = state_with("20");
        let ticket = state.submit().expect("ticket");
        state.resolve(ticket, Err(cause));
        assert_eq!(state.error_message.as_deref(), Some(FETCH_FAILED_MESSAGE));
    }
}

#[test]
fn resolve_stale_ticket_is_dropped() {
    let mut state = state_with("10");
    let first = state.submit().expect("first");
    state.resolve(first, ok(10, &[2, 3, 5, 7]));

    state.set_limit_input("5");
    let second = state.submit().expect("second");
    assert_eq!(state.resolve(first, ok(99, &[97])), Resolution::Stale);
    assert!(state.busy);
    assert!(state.primes.is_empty());

    assert_eq!(state.resolve(second, ok(5, &[2, 3, 5])), Resolution::Applied);
    assert_eq!(state.primes, vec![2, 3, 5]);
}

#[test]
fn sequential_submissions_reflect_only_latest_response() {
    let mut state = state_with("10");
    let first = state.submit().expect("first");
    state.resolve(first, ok(10, &[2, 3, 5, 7]));

    let second = state.submit().expect("second");
    assert_eq!(second.limit(), 10);
    assert!(second.seq() > first.seq());
    state.resolve(second, ok(10, &[2, 3, 5]));

    assert_eq!(state.primes, vec![2, 3, 5]);
    assert_eq!(state.result_meta, Some(ResultMeta { requested_limit: 10, count: 3 }));
}
