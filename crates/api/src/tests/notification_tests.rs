// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    Harness, actor, approved_fixed, cause, harness, now, seed_from_response, slot_in_days, stored,
};
use crate::{
    ConfirmationService, FixedClock, NotifyError, Notifier, OperationResult, ReschedulingService,
    ServiceContext, Transition,
};
use embassy_interview_audit::{EventKind, InterviewEvent};
use embassy_interview_domain::{
    ApplicationId, InterviewId, InterviewManager, InterviewState, PolicyRegistry,
};
use embassy_interview_persistence::{AuditLog, InterviewManagerRepository};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts attempts and refuses every one.
#[derive(Default)]
struct UnreachableChannel {
    attempts: AtomicUsize,
}

impl Notifier for UnreachableChannel {
    fn notify(&self, _event: &InterviewEvent) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Delivery(String::from("SMTP relay unreachable")))
    }
}

#[tokio::test]
async fn test_subscribers_receive_transition_notifications() {
    let h: Harness = harness();
    let mut rx = h.notifier.subscribe();

    let id: InterviewId = seed_from_response(&h.ctx, &approved_fixed("APP-1", 10));
    ConfirmationService::new(h.ctx.clone())
        .confirm(&id, actor(), cause())
        .into_result()
        .unwrap();

    let scheduled: InterviewEvent = rx.recv().await.unwrap();
    assert_eq!(scheduled.kind, EventKind::InterviewScheduled);
    assert_eq!(scheduled.interview_id, id);
    assert_eq!(scheduled.occurred_at, now());

    let confirmed: InterviewEvent = rx.recv().await.unwrap();
    assert_eq!(confirmed.kind, EventKind::InterviewConfirmed);
    assert_eq!(confirmed.state, InterviewState::Confirmed);
    assert_eq!(
        confirmed.message,
        "Interview confirmed for 2026-10-26 at 09:30 (30 min)."
    );
}

#[tokio::test]
async fn test_rejected_operation_publishes_nothing() {
    let h: Harness = harness();
    let id: InterviewId = seed_from_response(&h.ctx, &approved_fixed("APP-1", 10));
    let mut rx = h.notifier.subscribe();

    let result: OperationResult<Transition> = ReschedulingService::new(h.ctx.clone())
        .reschedule(&id, slot_in_days(2), actor(), cause());

    assert!(!result.success);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_failed_delivery_does_not_roll_back() {
    let channel: Arc<UnreachableChannel> = Arc::new(UnreachableChannel::default());
    let ctx: ServiceContext = ServiceContext::in_memory(
        PolicyRegistry::builtin(),
        channel.clone(),
        Arc::new(FixedClock::new(now())),
    );
    let id: InterviewId = seed_from_response(&ctx, &approved_fixed("APP-1", 10));

    let result: OperationResult<Transition> =
        ConfirmationService::new(ctx.clone()).confirm(&id, actor(), cause());

    assert!(result.success);
    assert_eq!(channel.attempts.load(Ordering::SeqCst), 2);
    assert_eq!(stored(&ctx, &id).state(), InterviewState::Confirmed);
    assert_eq!(
        ctx.audit_log
            .list_for_application(&ApplicationId::new("APP-1"))
            .unwrap()
            .len(),
        2
    );
    let manager: InterviewManager = ctx
        .managers
        .find_by_application(&ApplicationId::new("APP-1"))
        .unwrap()
        .unwrap();
    assert_eq!(
        manager.current().map(|i| i.state()),
        Some(InterviewState::Confirmed)
    );
}
