// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::TransitionResult;
use chrono::NaiveDateTime;
use embassy_interview_audit::{
    Action, Actor, AuditEvent, Cause, EventKind, InterviewEvent, StateSnapshot,
};
use embassy_interview_domain::{CancellationReason, EmbassyPolicy, Interview, Slot};

/// Applies a command to an interview, producing a new interview, an audit
/// event and a notification.
///
/// This function is pure: `interview` is never modified, and on error
/// nothing is produced.
///
/// # Arguments
///
/// * `interview` - The current interview (immutable)
/// * `policy` - The policy of the interview's embassy
/// * `command` - The command to apply
/// * `now` - The instant the command takes effect
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if:
/// - The command violates a domain rule
/// - `policy` belongs to another embassy
pub fn apply(
    interview: &Interview,
    policy: &EmbassyPolicy,
    command: Command,
    now: NaiveDateTime,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    if policy.embassy_id() != interview.embassy_id() {
        return Err(CoreError::Internal(format!(
            "policy for embassy {} applied to interview {} of embassy {}",
            policy.embassy_id(),
            interview.id(),
            interview.embassy_id()
        )));
    }

    let name: &'static str = command.name();
    let (new_interview, message, details): (Interview, String, Option<String>) = match command {
        Command::AssignFixedDate { slot, location } => {
            let next: Interview = interview.assign_fixed_slot(slot, location)?;
            let message: String = scheduled_message(&slot, &next);
            (next, message, None)
        }
        Command::OfferSlots { offers, location } => {
            let count: usize = offers.len();
            let next: Interview = interview.offer_slots(offers, location)?;
            (
                next,
                format!("{count} interview slot option(s) are available. Please select one."),
                Some(format!("offers={count}")),
            )
        }
        Command::SelectOffer { offer_id } => {
            let next: Interview = interview.select_offer(&offer_id)?;
            let message: String = scheduled_message(&current_slot(&next)?, &next);
            (next, message, Some(format!("offer={offer_id}")))
        }
        Command::ClaimReservedOffer { offer } => {
            let details: String = format!("offer={}", offer.id());
            let next: Interview = interview.claim_reserved_offer(offer)?;
            let message: String = scheduled_message(&current_slot(&next)?, &next);
            (next, message, Some(details))
        }
        Command::Reschedule { new_slot } => {
            let next: Interview = interview.reschedule(new_slot, policy, now)?;
            let message: String = if next.reschedule_count() == policy.max_reschedules() {
                format!(
                    "Interview rescheduled to {new_slot}. This was your last allowed reschedule."
                )
            } else {
                format!(
                    "Interview rescheduled to {new_slot}. {} reschedule(s) remaining.",
                    next.reschedules_remaining(policy)
                )
            };
            let details: String = interview.current_slot().map_or_else(
                || format!("to={new_slot}"),
                |old| format!("from={old},to={new_slot}"),
            );
            (next, message, Some(details))
        }
        Command::Cancel { reason, detail } => {
            let next: Interview = interview.cancel(reason, &detail, policy, now)?;
            let message: String = if next.cancellation_detail().is_empty() {
                format!("Interview cancelled ({}).", reason.as_str())
            } else {
                format!(
                    "Interview cancelled ({}): {}",
                    reason.as_str(),
                    next.cancellation_detail()
                )
            };
            (next, message, Some(format!("reason={}", reason.as_str())))
        }
        Command::Supersede => {
            let next: Interview = interview.supersede()?;
            let message: String = format!(
                "Interview cancelled ({}): {}",
                CancellationReason::EmbassyRequest.as_str(),
                next.cancellation_detail()
            );
            (
                next,
                message,
                Some(format!(
                    "reason={}",
                    CancellationReason::EmbassyRequest.as_str()
                )),
            )
        }
        Command::Confirm => {
            let next: Interview = interview.confirm(now)?;
            let slot: Slot = current_slot(&next)?;
            (next, format!("Interview confirmed for {slot}."), None)
        }
        Command::MarkCompleted => {
            let next: Interview = interview.mark_completed(now)?;
            (next, String::from("Interview completed."), None)
        }
        Command::MarkNoShow => {
            let next: Interview = interview.mark_no_show(now)?;
            (
                next,
                String::from("Interview closed: the applicant did not attend."),
                None,
            )
        }
    };

    let kind: EventKind = EventKind::for_state(new_interview.state()).ok_or_else(|| {
        CoreError::Internal(format!(
            "{name} left interview {} in state {} which has no notification",
            new_interview.id(),
            new_interview.state()
        ))
    })?;

    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        Action::new(String::from(name), details),
        StateSnapshot::of(interview),
        StateSnapshot::of(&new_interview),
        new_interview.application_id().clone(),
    );
    let notification: InterviewEvent =
        InterviewEvent::new(kind, &new_interview, message.clone(), now);

    Ok(TransitionResult {
        new_interview,
        audit_event,
        notification,
        message,
    })
}

fn current_slot(interview: &Interview) -> Result<Slot, CoreError> {
    interview.current_slot().copied().ok_or_else(|| {
        CoreError::Internal(format!(
            "interview {} is {} without a slot",
            interview.id(),
            interview.state()
        ))
    })
}

fn scheduled_message(slot: &Slot, interview: &Interview) -> String {
    let location: String = interview
        .location()
        .map_or_else(String::new, |l| format!(" ({l})"));
    format!("Interview scheduled for {slot}{location}. Please confirm your attendance.")
}
