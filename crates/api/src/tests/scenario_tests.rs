// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    Harness, actor, approved_fixed, approved_with_options, cause, harness, now, offer,
    seed_from_response, seed_pending, slot_in_days, slot_in_hours, stored,
};
use crate::{
    AssignmentService, CancellationService, ConfirmationService, ErrorKind, OperationResult,
    ReschedulingService, ResponseProcessingService, ResponseReport, Transition,
};
use embassy_interview_domain::{
    ApplicationId, CancellationReason, EmbassyId, EmbassyResponse, Interview, InterviewId,
    InterviewManager, InterviewState, OfferId,
};
use embassy_interview_persistence::{InterviewManagerRepository, OfferLedger};

#[test]
fn test_fixed_slot_with_two_reschedules_then_limit() {
    let h: Harness = harness();
    let id: InterviewId = seed_pending(&h.ctx, "APP-1");
    let assignment: AssignmentService = AssignmentService::new(h.ctx.clone());
    let rescheduling: ReschedulingService = ReschedulingService::new(h.ctx.clone());

    let assigned: OperationResult<Transition> =
        assignment.assign_fixed_date(&id, slot_in_days(10), None, actor(), cause());
    assert!(assigned.success);
    assert_eq!(stored(&h.ctx, &id).state(), InterviewState::Scheduled);

    let first: OperationResult<Transition> =
        rescheduling.reschedule(&id, slot_in_days(12), actor(), cause());
    assert!(first.success);
    assert_eq!(
        first.message,
        "Interview rescheduled to 2026-10-28 at 09:30 (30 min). 1 reschedule(s) remaining."
    );
    let after_first: Interview = stored(&h.ctx, &id);
    assert_eq!(after_first.state(), InterviewState::Rescheduled);
    assert_eq!(after_first.reschedule_count(), 1);

    let second: OperationResult<Transition> =
        rescheduling.reschedule(&id, slot_in_days(14), actor(), cause());
    assert!(second.success);
    assert!(second.message.contains("last allowed reschedule"));
    assert_eq!(stored(&h.ctx, &id).reschedule_count(), 2);

    let third: OperationResult<Transition> =
        rescheduling.reschedule(&id, slot_in_days(16), actor(), cause());
    assert!(!third.success);
    assert_eq!(third.error, Some(ErrorKind::RescheduleLimitExceeded));
    assert_eq!(stored(&h.ctx, &id).reschedule_count(), 2);
    assert_eq!(
        rescheduling.can_reschedule(&id).unwrap(),
        (false, String::from("The reschedule limit of 2 has been reached"))
    );
}

#[test]
fn test_concurrent_selection_of_last_seat() {
    let h: Harness = harness();
    let shared = || vec![offer("SHARED", 10, 1), offer("OTHER", 11, 1)];
    let first: InterviewId = seed_from_response(
        &h.ctx,
        &approved_with_options("APP-1", shared()),
    );
    let second: InterviewId = seed_from_response(
        &h.ctx,
        &approved_with_options("APP-2", shared()),
    );
    let assignment: AssignmentService = AssignmentService::new(h.ctx.clone());

    let results: Vec<OperationResult<Transition>> = std::thread::scope(|scope| {
        let handles: Vec<_> = [&first, &second]
            .into_iter()
            .map(|id| {
                let assignment: &AssignmentService = &assignment;
                scope.spawn(move || {
                    assignment.select_offer(id, &OfferId::new("SHARED"), actor(), cause())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let winners: usize = results.iter().filter(|r| r.success).count();
    let losers: Vec<Option<ErrorKind>> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.error)
        .collect();
    assert_eq!(winners, 1);
    assert_eq!(losers, vec![Some(ErrorKind::SlotUnavailable)]);
    assert_eq!(
        h.ctx
            .offers
            .find(&OfferId::new("SHARED"))
            .unwrap()
            .map(|o| o.reserved_count()),
        Some(1)
    );
    let states: Vec<InterviewState> = [first, second]
        .iter()
        .map(|id| stored(&h.ctx, id).state())
        .collect();
    assert!(states.contains(&InterviewState::Scheduled));
    assert!(states.contains(&InterviewState::OptionsOffered));
}

#[test]
fn test_cancel_without_slot_always_succeeds() {
    let h: Harness = harness();
    let id: InterviewId = seed_pending(&h.ctx, "APP-1");
    let cancellation: CancellationService = CancellationService::new(h.ctx.clone());

    let result: OperationResult<Transition> = cancellation.cancel(
        &id,
        CancellationReason::ApplicantRequest,
        "Travel plans changed",
        actor(),
        cause(),
    );

    assert!(result.success);
    let cancelled: Interview = stored(&h.ctx, &id);
    assert_eq!(cancelled.state(), InterviewState::Cancelled);
    assert!(cancelled.is_cancelled());
    assert_eq!(cancelled.cancellation_detail(), "Travel plans changed");
}

#[test]
fn test_cancel_inside_notice_window_is_refused() {
    let h: Harness = harness();
    let id: InterviewId = seed_pending(&h.ctx, "APP-1");
    AssignmentService::new(h.ctx.clone())
        .assign_fixed_date(&id, slot_in_hours(10), None, actor(), cause())
        .into_result()
        .unwrap();
    let cancellation: CancellationService = CancellationService::new(h.ctx.clone());

    let result: OperationResult<Transition> = cancellation.cancel(
        &id,
        CancellationReason::ApplicantRequest,
        "",
        actor(),
        cause(),
    );

    assert!(!result.success);
    assert_eq!(result.error, Some(ErrorKind::CancellationNotAllowed));
    assert_eq!(
        result.message,
        "Cannot cancel: minimum notice period not met (10 hour(s) left, 24 required)"
    );
    assert_eq!(stored(&h.ctx, &id).state(), InterviewState::Scheduled);
    assert!(!cancellation.can_cancel(&id).unwrap().0);
}

#[test]
fn test_rejection_leaves_current_interview_untouched() {
    let h: Harness = harness();
    let id: InterviewId = seed_from_response(&h.ctx, &approved_fixed("APP-1", 10));
    let before: Option<InterviewManager> = h
        .ctx
        .managers
        .find_by_application(&ApplicationId::new("APP-1"))
        .unwrap();
    let rejection: EmbassyResponse = EmbassyResponse::rejected(
        ApplicationId::new("APP-1"),
        EmbassyId::new("USA"),
        String::from("Insufficient ties to home country"),
        false,
        now(),
    );

    let result: OperationResult<ResponseReport> =
        ResponseProcessingService::new(h.ctx.clone()).process(&rejection, actor(), cause());

    assert!(result.success);
    assert_eq!(
        result.data,
        Some(ResponseReport::Rejected {
            reason: String::from("Insufficient ties to home country"),
            can_appeal: false,
        })
    );
    let after: Option<InterviewManager> = h
        .ctx
        .managers
        .find_by_application(&ApplicationId::new("APP-1"))
        .unwrap();
    assert_eq!(after, before);
    assert_eq!(
        after.and_then(|m| m.current().map(|i| i.id().clone())),
        Some(id)
    );
}

#[test]
fn test_confirm_while_options_offered_is_invalid_transition() {
    let h: Harness = harness();
    let id: InterviewId = seed_from_response(
        &h.ctx,
        &approved_with_options("APP-1", vec![offer("A", 10, 2)]),
    );

    let result: OperationResult<Transition> =
        ConfirmationService::new(h.ctx.clone()).confirm(&id, actor(), cause());

    assert!(!result.success);
    assert_eq!(result.error, Some(ErrorKind::InvalidTransition));
    assert_eq!(stored(&h.ctx, &id).state(), InterviewState::OptionsOffered);
}
