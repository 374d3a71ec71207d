// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{ResponseOutcome, TransitionResult};
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{
    DomainError, EmbassyPolicy, EmbassyResponse, Interview, InterviewManager, ResponseDecision,
};

/// Processes an embassy decision for the manager's application.
///
/// A rejection leaves the manager untouched. An approval closes the
/// current interview if it is still active (cancelled with reason
/// `EmbassyRequest`), archives it, and installs a new one: in `Scheduled`
/// for a fixed slot, or `OptionsOffered` for slot options.
///
/// # Errors
///
/// Returns an error if:
/// - The response is for another application
/// - An approval carries no offers, or duplicate offers
/// - `policy` belongs to another embassy than the response
pub fn process_response(
    manager: &InterviewManager,
    response: EmbassyResponse,
    policy: &EmbassyPolicy,
    actor: Actor,
    cause: Cause,
) -> Result<ResponseOutcome, CoreError> {
    if &response.application_id != manager.application_id() {
        return Err(CoreError::DomainViolation(
            DomainError::ApplicationMismatch {
                expected: manager.application_id().clone(),
                found: response.application_id,
            },
        ));
    }

    let command: Command = match response.decision {
        ResponseDecision::Rejected { reason, can_appeal } => {
            return Ok(ResponseOutcome::Rejected { reason, can_appeal });
        }
        ResponseDecision::ApprovedFixed { slot } => Command::AssignFixedDate {
            slot,
            location: response.location,
        },
        ResponseDecision::ApprovedWithOptions { offers } => Command::OfferSlots {
            offers,
            location: response.location,
        },
    };

    let pending: Interview = Interview::new(
        manager.next_interview_id(),
        response.application_id,
        response.embassy_id,
        response.received_at,
    );
    let transition: TransitionResult = apply(
        &pending,
        policy,
        command,
        response.received_at,
        actor.clone(),
        cause.clone(),
    )?;

    let superseded: Option<TransitionResult> = match manager.current() {
        Some(current) if current.is_active() => {
            // The previous interview may belong to another embassy.
            let own_policy: EmbassyPolicy =
                EmbassyPolicy::new(current.embassy_id().clone(), policy.limits());
            Some(apply(
                current,
                &own_policy,
                Command::Supersede,
                response.received_at,
                actor,
                cause,
            )?)
        }
        _ => None,
    };
    let closed: InterviewManager = superseded
        .as_ref()
        .map_or_else(|| manager.clone(), |s| manager.refresh_current(&s.new_interview));
    let installed: InterviewManager = closed
        .archive_current()
        .install(transition.new_interview.clone())?;

    Ok(ResponseOutcome::Installed {
        manager: installed,
        interview: transition.new_interview,
        audit_event: transition.audit_event,
        notification: transition.notification,
        superseded,
    })
}
