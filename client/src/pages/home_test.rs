use contract::{FETCH_FAILED_MESSAGE, FetchError, INVALID_INPUT_MESSAGE, PrimesResponse};

use super::*;

fn submitted(input: &str) -> (PrimesState, Option<Ticket>) {
    let mut state = PrimesState::default();
    state.set_limit_input(input);
    let ticket = state.submit().ok();
    (state, ticket)
}

#[test]
fn outcome_hidden_before_first_submit() {
    assert_eq!(outcome_section(&PrimesState::default()), OutcomeSection::Hidden);
}

#[test]
fn outcome_hidden_while_busy() {
    let (state, ticket) = submitted("10");
    assert!(ticket.is_some());
    assert_eq!(outcome_section(&state), OutcomeSection::Hidden);
}

#[test]
fn outcome_banner_for_invalid_input() {
    let (state, ticket) = submitted("1");
    assert!(ticket.is_none());
    assert_eq!(outcome_section(&state), OutcomeSection::Banner(INVALID_INPUT_MESSAGE.to_owned()));
}

#[test]
fn outcome_results_for_success() {
    let (mut state, ticket) = submitted("10");
    let resp = PrimesResponse { initial: 10, primes: vec![2, 3, 5, 7] };
    state.resolve(ticket.expect("ticket"), Ok(resp));
    assert_eq!(
        outcome_section(&state),
        OutcomeSection::Results { requested_limit: 10, count: 4, primes: vec![2, 3, 5, 7] }
    );
}

#[test]
fn outcome_banner_only_for_server_error() {
    let (mut state, ticket) = submitted("20");
    state.resolve(ticket.expect("ticket"), Err(FetchError::Status(500)));
    assert_eq!(outcome_section(&state), OutcomeSection::Banner(FETCH_FAILED_MESSAGE.to_owned()));
}
