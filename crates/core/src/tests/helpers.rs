// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{
    ApplicationId, EmbassyId, EmbassyPolicy, Interview, InterviewId, InterviewManager, OfferId,
    PolicyRegistry, Slot, SlotOffer,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("advisor-123"), String::from("advisor"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Applicant request"))
}

/// 2026-10-16 09:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn slot_in_days(days: i64) -> Slot {
    Slot::new(
        now().date() + Duration::days(days),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        45,
    )
    .unwrap()
}

pub fn usa_policy() -> EmbassyPolicy {
    PolicyRegistry::builtin().policy_for(&EmbassyId::new("USA"))
}

pub fn pending_interview() -> Interview {
    Interview::new(
        InterviewId::new("APP-9-1"),
        ApplicationId::new("APP-9"),
        EmbassyId::new("USA"),
        now(),
    )
}

pub fn scheduled_interview(days: i64) -> Interview {
    pending_interview()
        .assign_fixed_slot(slot_in_days(days), None)
        .unwrap()
}

pub fn offer(id: &str, days: i64, capacity: u32) -> SlotOffer {
    SlotOffer::new(OfferId::new(id), slot_in_days(days), capacity).unwrap()
}

pub fn empty_manager() -> InterviewManager {
    InterviewManager::new(ApplicationId::new("APP-9"), EmbassyId::new("USA"))
}
