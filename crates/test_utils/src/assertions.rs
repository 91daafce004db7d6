//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use domain_vehicle::HistoryEvent;

/// Asserts that history events are in ascending date order
///
/// # Panics
///
/// Panics naming the first adjacent pair that is out of order
pub fn assert_history_sorted(events: &[HistoryEvent]) {
    for (index, pair) in events.windows(2).enumerate() {
        assert!(
            pair[0].sort_date() <= pair[1].sort_date(),
            "History out of order at position {}: {} ({:?}) before {} ({:?})",
            index,
            pair[0].sort_date(),
            pair[0].kind(),
            pair[1].sort_date(),
            pair[1].kind()
        );
    }
}

/// Asserts the number of policy and claim events in a history
pub fn assert_history_counts(events: &[HistoryEvent], policies: usize, claims: usize) {
    let policy_events = events
        .iter()
        .filter(|event| matches!(event, HistoryEvent::Policy(_)))
        .count();
    let claim_events = events.len() - policy_events;

    assert_eq!(
        (policy_events, claim_events),
        (policies, claims),
        "Expected {} policy and {} claim events, got {} and {}",
        policies,
        claims,
        policy_events,
        claim_events
    );
}
