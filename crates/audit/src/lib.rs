// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! Audit and notification events for interview scheduling.
//!
//! Two kinds of record leave a successful transition:
//!
//! - An [`AuditEvent`]: the authoritative, immutable account of who
//!   changed what and why.
//! - An [`InterviewEvent`]: a best-effort notification for the delivery
//!   collaborator (email, SMS). Losing one never affects domain state.

use chrono::NaiveDateTime;
use embassy_interview_domain::{ApplicationId, Interview, InterviewId, InterviewState};
use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// An actor is the applicant, an advisor, or an automated integration
/// relaying an embassy decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "applicant", "advisor", "embassy").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, message ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`Reschedule`", "`Cancel`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact description of an interview at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A string representation of the interview.
    pub data: String,
}

impl StateSnapshot {
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }

    /// Captures the fields of an interview that transitions change.
    #[must_use]
    pub fn of(interview: &Interview) -> Self {
        let slot: String = interview
            .current_slot()
            .map_or_else(|| String::from("none"), ToString::to_string);
        Self::new(format!(
            "interview={},state={},slot={},reschedules={}",
            interview.id(),
            interview.state(),
            slot,
            interview.reschedule_count()
        ))
    }

    /// Snapshot used when no interview existed before the transition.
    #[must_use]
    pub fn absent() -> Self {
        Self::new(String::from("interview=none"))
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful state change must produce exactly one audit event.
/// Audit events are immutable once created and capture:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
/// - The application the interview belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
    /// The application whose interview changed.
    pub application_id: ApplicationId,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        application_id: ApplicationId,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
            application_id,
        }
    }
}

/// Notification categories published to the delivery collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    InterviewScheduled,
    InterviewOptionsAvailable,
    InterviewConfirmed,
    InterviewRescheduled,
    InterviewCancelled,
    /// Also used for no-shows; the carried state tells them apart.
    InterviewCompleted,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InterviewScheduled => "INTERVIEW_SCHEDULED",
            Self::InterviewOptionsAvailable => "INTERVIEW_OPTIONS_AVAILABLE",
            Self::InterviewConfirmed => "INTERVIEW_CONFIRMED",
            Self::InterviewRescheduled => "INTERVIEW_RESCHEDULED",
            Self::InterviewCancelled => "INTERVIEW_CANCELLED",
            Self::InterviewCompleted => "INTERVIEW_COMPLETED",
        }
    }

    /// Returns the notification for a transition into `state`, if any.
    ///
    /// `PendingAssignment` is never entered by a transition and has no
    /// notification.
    #[must_use]
    pub const fn for_state(state: InterviewState) -> Option<Self> {
        match state {
            InterviewState::PendingAssignment => None,
            InterviewState::Scheduled => Some(Self::InterviewScheduled),
            InterviewState::OptionsOffered => Some(Self::InterviewOptionsAvailable),
            InterviewState::Confirmed => Some(Self::InterviewConfirmed),
            InterviewState::Rescheduled => Some(Self::InterviewRescheduled),
            InterviewState::Cancelled => Some(Self::InterviewCancelled),
            InterviewState::Completed | InterviewState::NoShow => Some(Self::InterviewCompleted),
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fire-and-forget notification about an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewEvent {
    pub kind: EventKind,
    pub application_id: ApplicationId,
    pub interview_id: InterviewId,
    /// The state the interview is in after the transition.
    pub state: InterviewState,
    /// Human-readable text for the applicant.
    pub message: String,
    pub occurred_at: NaiveDateTime,
}

impl InterviewEvent {
    #[must_use]
    pub fn new(kind: EventKind, interview: &Interview, message: String, occurred_at: NaiveDateTime) -> Self {
        Self {
            kind,
            application_id: interview.application_id().clone(),
            interview_id: interview.id().clone(),
            state: interview.state(),
            message,
            occurred_at,
        }
    }
}
