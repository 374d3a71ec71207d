// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::interview::InterviewState;
use crate::slot::Slot;
use crate::types::{ApplicationId, InterviewId, OfferId};

/// Errors that can occur while enforcing scheduling rules.
///
/// Every variant is recoverable: callers receive it as a value and decide
/// how to present it. The `Display` text is meant to be shown to the
/// applicant as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A slot could not be constructed.
    InvalidSlot {
        /// Why the slot is invalid.
        reason: String,
    },
    /// A slot offer could not be constructed or updated.
    InvalidOffer {
        /// Why the offer is invalid.
        reason: String,
    },
    /// The operation is not permitted from the interview's current state.
    InvalidTransition {
        /// The state the interview was in.
        from: InterviewState,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// Confirmation was attempted while no slot is assigned.
    NoSlotAssigned {
        /// The state the interview was in.
        state: InterviewState,
    },
    /// The embassy's reschedule budget is spent.
    RescheduleLimitExceeded {
        /// The maximum number of reschedules the embassy allows.
        max_reschedules: u32,
    },
    /// The proposed date is closer than the embassy's minimum lead time.
    LeadTimeViolation {
        /// Days between today and the proposed date.
        days_ahead: i64,
        /// The embassy's minimum lead time in days.
        min_lead_days: u32,
    },
    /// The proposed slot does not start in the future.
    InvalidDate {
        /// The rejected slot.
        slot: Slot,
    },
    /// The cancellation notice window has already closed.
    CancellationNotAllowed {
        /// Whole hours left before the interview starts.
        hours_remaining: i64,
        /// The embassy's minimum notice in hours.
        min_cancellation_hours: u32,
    },
    /// The referenced offer is not among the interview's offers.
    OfferNotFound(OfferId),
    /// The referenced offer has no capacity left.
    SlotUnavailable(OfferId),
    /// The embassy offered zero slots.
    NoOffersProvided,
    /// A policy entry carries inconsistent limits.
    InvalidPolicy {
        /// Why the policy is invalid.
        reason: String,
    },
    /// A response was routed to the manager of a different application.
    ApplicationMismatch {
        /// The application the manager owns.
        expected: ApplicationId,
        /// The application named by the response.
        found: ApplicationId,
    },
    /// A stored interview breaks an invariant no transition can break.
    InconsistentInterview {
        /// The interview that failed to load.
        id: InterviewId,
        /// The invariant that does not hold.
        reason: String,
    },
    /// A persisted enumeration value could not be parsed.
    UnknownValue {
        /// The enumeration being parsed.
        kind: &'static str,
        /// The unrecognized value.
        value: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSlot { reason } => write!(f, "Invalid interview slot: {reason}"),
            Self::InvalidOffer { reason } => write!(f, "Invalid slot offer: {reason}"),
            Self::InvalidTransition { from, operation } => {
                write!(
                    f,
                    "Cannot {operation}: the interview is currently {}",
                    from.label()
                )
            }
            Self::NoSlotAssigned { state } => {
                write!(
                    f,
                    "Cannot confirm: no interview slot has been assigned yet (the interview is {})",
                    state.label()
                )
            }
            Self::RescheduleLimitExceeded { max_reschedules } => {
                write!(
                    f,
                    "Cannot reschedule: the embassy allows at most {max_reschedules} reschedule(s) and none remain"
                )
            }
            Self::LeadTimeViolation {
                days_ahead,
                min_lead_days,
            } => {
                write!(
                    f,
                    "Cannot schedule {days_ahead} day(s) ahead: the embassy requires at least {min_lead_days} day(s) of lead time"
                )
            }
            Self::InvalidDate { slot } => {
                write!(
                    f,
                    "Cannot use {slot}: the proposed date must be in the future"
                )
            }
            Self::CancellationNotAllowed {
                hours_remaining,
                min_cancellation_hours,
            } => {
                write!(
                    f,
                    "Cannot cancel: minimum notice period not met ({hours_remaining} hour(s) left, {min_cancellation_hours} required)"
                )
            }
            Self::OfferNotFound(offer_id) => {
                write!(f, "Slot offer '{offer_id}' is not available for this interview")
            }
            Self::SlotUnavailable(offer_id) => {
                write!(
                    f,
                    "Slot offer '{offer_id}' is fully booked; please choose another option"
                )
            }
            Self::NoOffersProvided => {
                write!(f, "The embassy response did not include any slot options")
            }
            Self::InvalidPolicy { reason } => write!(f, "Invalid embassy policy: {reason}"),
            Self::ApplicationMismatch { expected, found } => {
                write!(
                    f,
                    "Response for application '{found}' cannot be applied to application '{expected}'"
                )
            }
            Self::InconsistentInterview { id, reason } => {
                write!(f, "Interview {id} is inconsistent: expected {reason}")
            }
            Self::UnknownValue { kind, value } => write!(f, "Unknown {kind}: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
