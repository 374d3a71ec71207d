// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BroadcastNotifier, FixedClock, OperationResult, ResponseProcessingService, ResponseReport,
    ServiceContext,
};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{
    ApplicationId, EmbassyId, EmbassyResponse, Interview, InterviewId, OfferId, PolicyRegistry,
    Slot, SlotOffer,
};
use embassy_interview_persistence::InterviewRepository;
use std::sync::Arc;

pub struct Harness {
    pub ctx: ServiceContext,
    pub clock: Arc<FixedClock>,
    pub notifier: Arc<BroadcastNotifier>,
}

/// 2026-10-16 09:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn harness() -> Harness {
    let clock: Arc<FixedClock> = Arc::new(FixedClock::new(now()));
    let notifier: Arc<BroadcastNotifier> = Arc::new(BroadcastNotifier::new());
    let ctx: ServiceContext =
        ServiceContext::in_memory(PolicyRegistry::builtin(), notifier.clone(), clock.clone());
    Harness {
        ctx,
        clock,
        notifier,
    }
}

pub fn actor() -> Actor {
    Actor::new(String::from("advisor-7"), String::from("advisor"))
}

pub fn cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Applicant phone call"))
}

pub fn slot_in_days(days: i64) -> Slot {
    Slot::new(
        now().date() + Duration::days(days),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        30,
    )
    .unwrap()
}

/// A slot starting exactly `hours` hours after [`now`].
pub fn slot_in_hours(hours: i64) -> Slot {
    let start: NaiveDateTime = now() + Duration::hours(hours);
    Slot::new(start.date(), start.time(), 30).unwrap()
}

pub fn offer(id: &str, days: i64, capacity: u32) -> SlotOffer {
    SlotOffer::new(OfferId::new(id), slot_in_days(days), capacity).unwrap()
}

/// Stores a fresh `PendingAssignment` interview for `application`.
pub fn seed_pending(ctx: &ServiceContext, application: &str) -> InterviewId {
    let interview: Interview = Interview::new(
        InterviewId::new(&format!("{application}-1")),
        ApplicationId::new(application),
        EmbassyId::new("USA"),
        now(),
    );
    ctx.interviews.save(&interview).unwrap().id().clone()
}

/// Runs an approval through response processing and returns the new
/// interview's id.
pub fn seed_from_response(ctx: &ServiceContext, response: &EmbassyResponse) -> InterviewId {
    let result: OperationResult<ResponseReport> =
        ResponseProcessingService::new(ctx.clone()).process(response, actor(), cause());
    match result.data {
        Some(ResponseReport::Installed(transition)) => transition.interview.id().clone(),
        other => panic!("expected an installed interview, got {other:?}"),
    }
}

pub fn approved_fixed(application: &str, days: i64) -> EmbassyResponse {
    EmbassyResponse::approved_fixed(
        ApplicationId::new(application),
        EmbassyId::new("USA"),
        slot_in_days(days),
        Some(String::from("Consular section, window 2")),
        now(),
    )
}

pub fn approved_with_options(application: &str, offers: Vec<SlotOffer>) -> EmbassyResponse {
    EmbassyResponse::approved_with_options(
        ApplicationId::new(application),
        EmbassyId::new("USA"),
        offers,
        None,
        now(),
    )
}

pub fn stored(ctx: &ServiceContext, id: &InterviewId) -> Interview {
    ctx.interviews.find_by_id(id).unwrap().unwrap()
}
