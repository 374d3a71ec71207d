// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview lifecycle and transition rules.
//!
//! ## States
//!
//! ```text
//! PendingAssignment --assign--> Scheduled --confirm--> Confirmed --complete--> Completed
//!        |                        ^   |                    |    \--no-show--> NoShow
//!        +--offer--> OptionsOffered   +--reschedule--> Rescheduled
//! ```
//!
//! Any non-terminal state may be cancelled. `Cancelled`, `Completed` and
//! `NoShow` are terminal: no transition leaves them.
//!
//! Every transition is a method taking `&self` and returning a new
//! `Interview`, so a failed guard never leaves a half-updated value behind.

use crate::error::DomainError;
use crate::policy::EmbassyPolicy;
use crate::slot::Slot;
use crate::slot_offer::SlotOffer;
use crate::types::{ApplicationId, EmbassyId, InterviewId, OfferId};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const SUPERSEDED_DETAIL: &str = "Superseded by a new embassy decision";

/// Lifecycle state of an interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewState {
    /// The application was approved but the embassy has not assigned a slot.
    #[default]
    PendingAssignment,
    /// A slot is assigned and awaits confirmation.
    Scheduled,
    /// The embassy offered candidate slots; the applicant must pick one.
    OptionsOffered,
    /// The applicant confirmed attendance.
    Confirmed,
    /// The slot was moved at least once and awaits confirmation.
    Rescheduled,
    /// The interview was cancelled.
    Cancelled,
    /// The interview took place.
    Completed,
    /// The applicant did not attend.
    NoShow,
}

impl InterviewState {
    /// Returns the string representation used for persistence and events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PendingAssignment => "pending_assignment",
            Self::Scheduled => "scheduled",
            Self::OptionsOffered => "options_offered",
            Self::Confirmed => "confirmed",
            Self::Rescheduled => "rescheduled",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::NoShow => "no_show",
        }
    }

    /// Returns the phrase used in applicant-facing messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::PendingAssignment => "waiting for the embassy to assign a slot",
            Self::Scheduled => "scheduled",
            Self::OptionsOffered => "waiting for a slot to be selected",
            Self::Confirmed => "confirmed",
            Self::Rescheduled => "rescheduled",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::NoShow => "closed as a no-show",
        }
    }

    /// Returns true if no transition may leave this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed | Self::NoShow)
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    /// Returns true if a slot in this state may be moved to another date.
    #[must_use]
    pub const fn allows_reschedule(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Rescheduled | Self::Confirmed)
    }

    /// Returns true if a slot in this state awaits confirmation.
    #[must_use]
    pub const fn awaits_confirmation(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Rescheduled)
    }
}

impl FromStr for InterviewState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_assignment" => Ok(Self::PendingAssignment),
            "scheduled" => Ok(Self::Scheduled),
            "options_offered" => Ok(Self::OptionsOffered),
            "confirmed" => Ok(Self::Confirmed),
            "rescheduled" => Ok(Self::Rescheduled),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            "no_show" => Ok(Self::NoShow),
            _ => Err(DomainError::UnknownValue {
                kind: "interview state",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for InterviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the embassy assigned the interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentMode {
    /// The embassy set a single date.
    FixedDate,
    /// The embassy offered candidates for the applicant to choose from.
    OptionsToChoose,
}

impl AssignmentMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FixedDate => "fixed_date",
            Self::OptionsToChoose => "options_to_choose",
        }
    }
}

/// Why an interview was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancellationReason {
    ApplicantRequest,
    EmbassyRequest,
    ScheduleConflict,
    ForceMajeure,
    Other,
}

impl CancellationReason {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ApplicantRequest => "applicant_request",
            Self::EmbassyRequest => "embassy_request",
            Self::ScheduleConflict => "schedule_conflict",
            Self::ForceMajeure => "force_majeure",
            Self::Other => "other",
        }
    }
}

impl FromStr for CancellationReason {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applicant_request" => Ok(Self::ApplicantRequest),
            "embassy_request" => Ok(Self::EmbassyRequest),
            "schedule_conflict" => Ok(Self::ScheduleConflict),
            "force_majeure" => Ok(Self::ForceMajeure),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::UnknownValue {
                kind: "cancellation reason",
                value: s.to_string(),
            }),
        }
    }
}

/// One application's consular interview.
///
/// ## Invariants
///
/// - `reschedule_count <= policy.max_reschedules()`
/// - `state == Confirmed` implies `current_slot.is_some()`
/// - `state == OptionsOffered` implies `offered_slots` is non-empty and
///   `current_slot.is_none()`
/// - Terminal states are never left
///
/// Deserialization checks the same invariants, so a stored interview
/// cannot come back in a shape no transition could have produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterview")]
pub struct Interview {
    id: InterviewId,
    application_id: ApplicationId,
    embassy_id: EmbassyId,
    state: InterviewState,
    assignment_mode: Option<AssignmentMode>,
    current_slot: Option<Slot>,
    offered_slots: Vec<SlotOffer>,
    selected_offer_id: Option<OfferId>,
    location: Option<String>,
    notes: Option<String>,
    reschedule_count: u32,
    slot_history: Vec<Slot>,
    cancelled: bool,
    cancellation_reason: Option<CancellationReason>,
    cancellation_detail: String,
    created_at: NaiveDateTime,
    confirmed_at: Option<NaiveDateTime>,
    completed_at: Option<NaiveDateTime>,
    /// Optimistic concurrency version, maintained by repositories.
    version: u64,
}

#[derive(Deserialize)]
struct RawInterview {
    id: InterviewId,
    application_id: ApplicationId,
    embassy_id: EmbassyId,
    state: InterviewState,
    assignment_mode: Option<AssignmentMode>,
    current_slot: Option<Slot>,
    #[serde(default)]
    offered_slots: Vec<SlotOffer>,
    selected_offer_id: Option<OfferId>,
    location: Option<String>,
    notes: Option<String>,
    #[serde(default)]
    reschedule_count: u32,
    #[serde(default)]
    slot_history: Vec<Slot>,
    #[serde(default)]
    cancelled: bool,
    cancellation_reason: Option<CancellationReason>,
    #[serde(default)]
    cancellation_detail: String,
    created_at: NaiveDateTime,
    confirmed_at: Option<NaiveDateTime>,
    completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    version: u64,
}

impl TryFrom<RawInterview> for Interview {
    type Error = DomainError;

    fn try_from(raw: RawInterview) -> Result<Self, Self::Error> {
        let interview: Self = Self {
            id: raw.id,
            application_id: raw.application_id,
            embassy_id: raw.embassy_id,
            state: raw.state,
            assignment_mode: raw.assignment_mode,
            current_slot: raw.current_slot,
            offered_slots: raw.offered_slots,
            selected_offer_id: raw.selected_offer_id,
            location: raw.location,
            notes: raw.notes,
            reschedule_count: raw.reschedule_count,
            slot_history: raw.slot_history,
            cancelled: raw.cancelled,
            cancellation_reason: raw.cancellation_reason,
            cancellation_detail: raw.cancellation_detail,
            created_at: raw.created_at,
            confirmed_at: raw.confirmed_at,
            completed_at: raw.completed_at,
            version: raw.version,
        };
        interview.check_consistency()?;
        Ok(interview)
    }
}

impl Interview {
    /// Creates an interview awaiting assignment.
    #[must_use]
    pub const fn new(
        id: InterviewId,
        application_id: ApplicationId,
        embassy_id: EmbassyId,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            application_id,
            embassy_id,
            state: InterviewState::PendingAssignment,
            assignment_mode: None,
            current_slot: None,
            offered_slots: Vec::new(),
            selected_offer_id: None,
            location: None,
            notes: None,
            reschedule_count: 0,
            slot_history: Vec::new(),
            cancelled: false,
            cancellation_reason: None,
            cancellation_detail: String::new(),
            created_at,
            confirmed_at: None,
            completed_at: None,
            version: 0,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &InterviewId {
        &self.id
    }

    #[must_use]
    pub const fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    #[must_use]
    pub const fn embassy_id(&self) -> &EmbassyId {
        &self.embassy_id
    }

    #[must_use]
    pub const fn state(&self) -> InterviewState {
        self.state
    }

    #[must_use]
    pub const fn assignment_mode(&self) -> Option<AssignmentMode> {
        self.assignment_mode
    }

    #[must_use]
    pub const fn current_slot(&self) -> Option<&Slot> {
        self.current_slot.as_ref()
    }

    #[must_use]
    pub fn offered_slots(&self) -> &[SlotOffer] {
        &self.offered_slots
    }

    /// Looks up one of this interview's offers.
    #[must_use]
    pub fn offer(&self, offer_id: &OfferId) -> Option<&SlotOffer> {
        self.offered_slots.iter().find(|o| o.id() == offer_id)
    }

    #[must_use]
    pub const fn selected_offer_id(&self) -> Option<&OfferId> {
        self.selected_offer_id.as_ref()
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    #[must_use]
    pub const fn reschedule_count(&self) -> u32 {
        self.reschedule_count
    }

    /// Slots this interview previously held, oldest first.
    #[must_use]
    pub fn slot_history(&self) -> &[Slot] {
        &self.slot_history
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub const fn cancellation_reason(&self) -> Option<CancellationReason> {
        self.cancellation_reason
    }

    #[must_use]
    pub fn cancellation_detail(&self) -> &str {
        &self.cancellation_detail
    }

    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    #[must_use]
    pub const fn confirmed_at(&self) -> Option<NaiveDateTime> {
        self.confirmed_at
    }

    #[must_use]
    pub const fn completed_at(&self) -> Option<NaiveDateTime> {
        self.completed_at
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns a copy stamped with a storage version.
    ///
    /// Intended for repository adapters only; domain transitions never
    /// touch the version.
    #[must_use]
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Returns true unless the interview reached a terminal state.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns how many reschedules the policy still allows.
    #[must_use]
    pub const fn reschedules_remaining(&self, policy: &EmbassyPolicy) -> u32 {
        policy.max_reschedules().saturating_sub(self.reschedule_count)
    }

    /// Verifies the field combinations every transition preserves.
    fn check_consistency(&self) -> Result<(), DomainError> {
        let inconsistent = |reason: &str| DomainError::InconsistentInterview {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        match self.state {
            InterviewState::PendingAssignment => {
                if self.current_slot.is_some() || !self.offered_slots.is_empty() {
                    return Err(inconsistent("a pending interview has no slot or offers"));
                }
            }
            InterviewState::OptionsOffered => {
                if self.offered_slots.is_empty() || self.current_slot.is_some() {
                    return Err(inconsistent(
                        "an interview with options has offers and no slot",
                    ));
                }
            }
            InterviewState::Scheduled | InterviewState::Rescheduled => {
                if self.current_slot.is_none() {
                    return Err(inconsistent("a scheduled interview has a slot"));
                }
            }
            InterviewState::Confirmed => {
                if self.current_slot.is_none() || self.confirmed_at.is_none() {
                    return Err(inconsistent(
                        "a confirmed interview has a slot and a confirmation time",
                    ));
                }
            }
            InterviewState::Completed | InterviewState::NoShow => {
                if self.current_slot.is_none() || self.completed_at.is_none() {
                    return Err(inconsistent(
                        "a closed interview has a slot and a completion time",
                    ));
                }
            }
            InterviewState::Cancelled => {}
        }

        let cancelled: bool = self.state == InterviewState::Cancelled;
        if self.cancelled != cancelled || self.cancellation_reason.is_some() != cancelled {
            return Err(inconsistent(
                "the cancellation flag and reason match the cancelled state",
            ));
        }
        if usize::try_from(self.reschedule_count).ok() != Some(self.slot_history.len()) {
            return Err(inconsistent("every reschedule leaves one slot in the history"));
        }
        if let Some(offer_id) = &self.selected_offer_id
            && self.offer(offer_id).is_none()
        {
            return Err(inconsistent("the selected offer is one of the offers"));
        }
        Ok(())
    }

    fn ensure_state(
        &self,
        allowed: bool,
        operation: &'static str,
    ) -> Result<(), DomainError> {
        if allowed {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.state,
                operation,
            })
        }
    }

    /// Assigns a fixed slot chosen by the embassy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the interview is
    /// `PendingAssignment`.
    pub fn assign_fixed_slot(
        &self,
        slot: Slot,
        location: Option<String>,
    ) -> Result<Self, DomainError> {
        self.ensure_state(
            self.state == InterviewState::PendingAssignment,
            "assign a fixed date",
        )?;

        let mut next: Self = self.clone();
        next.assignment_mode = Some(AssignmentMode::FixedDate);
        next.current_slot = Some(slot);
        next.location = location.or(next.location);
        next.state = InterviewState::Scheduled;
        Ok(next)
    }

    /// Publishes candidate slots for the applicant to choose from.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The interview is not `PendingAssignment`
    /// - `offers` is empty
    /// - Two offers share an identifier
    pub fn offer_slots(
        &self,
        offers: Vec<SlotOffer>,
        location: Option<String>,
    ) -> Result<Self, DomainError> {
        self.ensure_state(
            self.state == InterviewState::PendingAssignment,
            "offer slot options",
        )?;
        crate::validation::validate_offers(&offers)?;

        let mut next: Self = self.clone();
        next.assignment_mode = Some(AssignmentMode::OptionsToChoose);
        next.offered_slots = offers;
        next.location = location.or(next.location);
        next.state = InterviewState::OptionsOffered;
        Ok(next)
    }

    /// Selects one of the offered slots, reserving a seat on this
    /// interview's copy of the offer.
    ///
    /// This is the single-writer form. When several interviews share an
    /// offer, reserve through the offer ledger and call
    /// [`Interview::claim_reserved_offer`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The interview is not `OptionsOffered`
    /// - No offer matches `offer_id`
    /// - The offer is full
    pub fn select_offer(&self, offer_id: &OfferId) -> Result<Self, DomainError> {
        self.ensure_state(
            self.state == InterviewState::OptionsOffered,
            "select a slot option",
        )?;
        let offer: &SlotOffer = self
            .offer(offer_id)
            .ok_or_else(|| DomainError::OfferNotFound(offer_id.clone()))?;
        let reserved: SlotOffer = offer.reserve()?;
        Ok(self.install_offer(reserved))
    }

    /// Installs an offer whose seat was already reserved elsewhere.
    ///
    /// `reserved` is the authoritative post-reservation snapshot; it
    /// replaces this interview's stale copy.
    ///
    /// # Errors
    ///
    /// Returns an error if the interview is not `OptionsOffered` or the
    /// offer is not one of its options.
    pub fn claim_reserved_offer(&self, reserved: SlotOffer) -> Result<Self, DomainError> {
        self.ensure_state(
            self.state == InterviewState::OptionsOffered,
            "select a slot option",
        )?;
        if self.offer(reserved.id()).is_none() {
            return Err(DomainError::OfferNotFound(reserved.id().clone()));
        }
        Ok(self.install_offer(reserved))
    }

    fn install_offer(&self, reserved: SlotOffer) -> Self {
        let mut next: Self = self.clone();
        next.current_slot = Some(*reserved.slot());
        next.selected_offer_id = Some(reserved.id().clone());
        for offer in &mut next.offered_slots {
            if offer.id() == reserved.id() {
                *offer = reserved.clone();
            }
        }
        next.state = InterviewState::Scheduled;
        next
    }

    /// Reports whether a reschedule is still permitted, with the reason.
    #[must_use]
    pub fn can_reschedule(&self, policy: &EmbassyPolicy) -> (bool, String) {
        if !self.state.allows_reschedule() {
            return (
                false,
                format!(
                    "The interview cannot be rescheduled while it is {}",
                    self.state.label()
                ),
            );
        }
        let remaining: u32 = self.reschedules_remaining(policy);
        if remaining == 0 {
            return (
                false,
                format!(
                    "The reschedule limit of {} has been reached",
                    policy.max_reschedules()
                ),
            );
        }
        (
            true,
            format!("{remaining} of {} reschedule(s) remaining", policy.max_reschedules()),
        )
    }

    /// Moves the interview to `new_slot`.
    ///
    /// The previous slot is appended to the history. Rescheduling a
    /// confirmed interview clears its confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The state does not allow rescheduling
    /// - The reschedule budget is spent
    /// - `new_slot` does not start after `now`
    /// - `new_slot` is closer than the policy's minimum lead time
    pub fn reschedule(
        &self,
        new_slot: Slot,
        policy: &EmbassyPolicy,
        now: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        self.ensure_state(self.state.allows_reschedule(), "reschedule")?;
        let current: Slot = self.current_slot.ok_or(DomainError::InvalidTransition {
            from: self.state,
            operation: "reschedule",
        })?;

        if self.reschedule_count >= policy.max_reschedules() {
            return Err(DomainError::RescheduleLimitExceeded {
                max_reschedules: policy.max_reschedules(),
            });
        }
        if !new_slot.is_future(now) {
            return Err(DomainError::InvalidDate { slot: new_slot });
        }
        crate::validation::validate_lead_time(policy, &new_slot, now.date())?;

        let mut next: Self = self.clone();
        next.slot_history.push(current);
        next.current_slot = Some(new_slot);
        next.reschedule_count += 1;
        next.confirmed_at = None;
        next.state = InterviewState::Rescheduled;
        Ok(next)
    }

    /// Reports whether the interview may be cancelled now, with the reason.
    #[must_use]
    pub fn can_cancel(&self, policy: &EmbassyPolicy, now: NaiveDateTime) -> (bool, String) {
        match self.check_cancellable(policy, now) {
            Ok(()) => match self.current_slot {
                Some(slot) => (
                    true,
                    format!(
                        "Cancellation allowed: {} hour(s) before the interview",
                        slot.hours_remaining(now)
                    ),
                ),
                None => (
                    true,
                    String::from("Cancellation allowed: no slot has been assigned yet"),
                ),
            },
            Err(err) => (false, err.to_string()),
        }
    }

    fn check_cancellable(
        &self,
        policy: &EmbassyPolicy,
        now: NaiveDateTime,
    ) -> Result<(), DomainError> {
        self.ensure_state(self.state.is_active(), "cancel")?;
        if let Some(slot) = self.current_slot {
            let notice: Duration = Duration::hours(i64::from(policy.min_cancellation_hours()));
            if slot.time_remaining(now) < notice {
                return Err(DomainError::CancellationNotAllowed {
                    hours_remaining: slot.hours_remaining(now),
                    min_cancellation_hours: policy.min_cancellation_hours(),
                });
            }
        }
        Ok(())
    }

    /// Cancels the interview.
    ///
    /// The notice window is inclusive: cancelling exactly
    /// `min_cancellation_hours` before the start succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the interview is terminal or the notice window
    /// has closed.
    pub fn cancel(
        &self,
        reason: CancellationReason,
        detail: &str,
        policy: &EmbassyPolicy,
        now: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        self.check_cancellable(policy, now)?;

        let mut next: Self = self.clone();
        next.cancelled = true;
        next.cancellation_reason = Some(reason);
        next.cancellation_detail = detail.trim().to_string();
        next.state = InterviewState::Cancelled;
        Ok(next)
    }

    /// Closes an interview that a newer embassy decision replaces.
    ///
    /// Unlike [`Interview::cancel`] this ignores the notice window: the
    /// embassy, not the applicant, withdrew the slot. The selected offer
    /// is kept so its seat can be returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the interview is
    /// already terminal.
    pub fn supersede(&self) -> Result<Self, DomainError> {
        self.ensure_state(self.state.is_active(), "supersede")?;

        let mut next: Self = self.clone();
        next.cancelled = true;
        next.cancellation_reason = Some(CancellationReason::EmbassyRequest);
        next.cancellation_detail = String::from(SUPERSEDED_DETAIL);
        next.state = InterviewState::Cancelled;
        Ok(next)
    }

    /// Confirms attendance for the assigned slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NoSlotAssigned` when no slot is set, or
    /// `DomainError::InvalidTransition` when the state is not `Scheduled`
    /// or `Rescheduled`.
    pub fn confirm(&self, now: NaiveDateTime) -> Result<Self, DomainError> {
        if self.state.is_active() && self.current_slot.is_none() {
            return Err(DomainError::NoSlotAssigned { state: self.state });
        }
        self.ensure_state(self.state.awaits_confirmation(), "confirm")?;

        let mut next: Self = self.clone();
        next.confirmed_at = Some(now);
        next.state = InterviewState::Confirmed;
        Ok(next)
    }

    /// Records that the interview took place.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the interview is
    /// `Confirmed`.
    pub fn mark_completed(&self, now: NaiveDateTime) -> Result<Self, DomainError> {
        self.close(InterviewState::Completed, "mark as completed", now)
    }

    /// Records that the applicant did not attend.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` unless the interview is
    /// `Confirmed`.
    pub fn mark_no_show(&self, now: NaiveDateTime) -> Result<Self, DomainError> {
        self.close(InterviewState::NoShow, "mark as a no-show", now)
    }

    fn close(
        &self,
        outcome: InterviewState,
        operation: &'static str,
        now: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        self.ensure_state(self.state == InterviewState::Confirmed, operation)?;

        let mut next: Self = self.clone();
        next.completed_at = Some(now);
        next.state = outcome;
        Ok(next)
    }

    /// Replaces the advisor notes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` if the interview is terminal.
    pub fn with_notes(&self, notes: &str) -> Result<Self, DomainError> {
        self.ensure_state(self.state.is_active(), "edit notes")?;

        let trimmed: &str = notes.trim();
        let mut next: Self = self.clone();
        next.notes = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        Ok(next)
    }
}

