// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApplicationId, EmbassyId, EmbassyPolicy, Interview, InterviewId, OfferId, PolicyLimits,
    PolicyRegistry, Slot, SlotOffer,
};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// The fixed "now" every domain test runs against: 2026-10-16 09:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn today() -> NaiveDate {
    now().date()
}

/// A 30 minute slot at 09:00, `days` days after today.
pub fn slot_in_days(days: i64) -> Slot {
    Slot::new(
        today() + Duration::days(days),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        30,
    )
    .unwrap()
}

/// A 30 minute slot starting exactly `hours` hours after now.
pub fn slot_in_hours(hours: i64) -> Slot {
    let start: NaiveDateTime = now() + Duration::hours(hours);
    Slot::new(start.date(), start.time(), 30).unwrap()
}

pub fn usa_policy() -> EmbassyPolicy {
    PolicyRegistry::builtin().policy_for(&EmbassyId::new("USA"))
}

pub fn policy_with(max_reschedules: u32, min_cancellation_hours: u32, min_lead_days: u32) -> EmbassyPolicy {
    EmbassyPolicy::new(
        EmbassyId::new("TST"),
        PolicyLimits {
            max_reschedules,
            min_cancellation_hours,
            min_lead_days,
        },
    )
}

pub fn pending_interview() -> Interview {
    Interview::new(
        InterviewId::new("APP-1-1"),
        ApplicationId::new("APP-1"),
        EmbassyId::new("USA"),
        now(),
    )
}

pub fn scheduled_interview(days: i64) -> Interview {
    pending_interview()
        .assign_fixed_slot(slot_in_days(days), Some(String::from("Consular section, window 3")))
        .unwrap()
}

pub fn offer(id: &str, days: i64, capacity: u32) -> SlotOffer {
    SlotOffer::new(OfferId::new(id), slot_in_days(days), capacity).unwrap()
}
