// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::slot_in_days;
use crate::{DomainError, InterviewId, InterviewState, OfferId};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidTransition {
        from: InterviewState::OptionsOffered,
        operation: "confirm",
    };
    assert_eq!(
        format!("{err}"),
        "Cannot confirm: the interview is currently waiting for a slot to be selected"
    );

    let err: DomainError = DomainError::InconsistentInterview {
        id: InterviewId::new("APP-1-1"),
        reason: String::from("a scheduled interview has a slot"),
    };
    assert_eq!(
        format!("{err}"),
        "Interview APP-1-1 is inconsistent: expected a scheduled interview has a slot"
    );

    let err: DomainError = DomainError::RescheduleLimitExceeded { max_reschedules: 2 };
    assert_eq!(
        format!("{err}"),
        "Cannot reschedule: the embassy allows at most 2 reschedule(s) and none remain"
    );

    let err: DomainError = DomainError::CancellationNotAllowed {
        hours_remaining: 10,
        min_cancellation_hours: 24,
    };
    assert_eq!(
        format!("{err}"),
        "Cannot cancel: minimum notice period not met (10 hour(s) left, 24 required)"
    );

    let err: DomainError = DomainError::LeadTimeViolation {
        days_ahead: 3,
        min_lead_days: 7,
    };
    assert_eq!(
        format!("{err}"),
        "Cannot schedule 3 day(s) ahead: the embassy requires at least 7 day(s) of lead time"
    );

    let err: DomainError = DomainError::InvalidDate {
        slot: slot_in_days(-1),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot use 2026-10-15 at 09:00 (30 min): the proposed date must be in the future"
    );

    let err: DomainError = DomainError::SlotUnavailable(OfferId::new("A"));
    assert_eq!(
        format!("{err}"),
        "Slot offer 'A' is fully booked; please choose another option"
    );

    let err: DomainError = DomainError::NoOffersProvided;
    assert_eq!(
        format!("{err}"),
        "The embassy response did not include any slot options"
    );
}

#[test]
fn test_state_string_round_trip() {
    let states = [
        InterviewState::PendingAssignment,
        InterviewState::Scheduled,
        InterviewState::OptionsOffered,
        InterviewState::Confirmed,
        InterviewState::Rescheduled,
        InterviewState::Cancelled,
        InterviewState::Completed,
        InterviewState::NoShow,
    ];

    for state in states {
        let parsed: InterviewState = state.as_str().parse().unwrap();
        assert_eq!(parsed, state);
    }
    assert!(matches!(
        "archived".parse::<InterviewState>(),
        Err(DomainError::UnknownValue { .. })
    ));
}
