// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod response_repository_tests;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use embassy_interview_domain::{
    ApplicationId, EmbassyId, Interview, InterviewId, InterviewManager, OfferId, Slot, SlotOffer,
};

/// 2026-10-16 09:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn today() -> NaiveDate {
    now().date()
}

pub fn slot_in_days(days: i64) -> Slot {
    Slot::new(
        today() + Duration::days(days),
        NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        30,
    )
    .unwrap()
}

pub fn pending(application: &str, embassy: &str) -> Interview {
    Interview::new(
        InterviewId::new(&format!("{application}-1")),
        ApplicationId::new(application),
        EmbassyId::new(embassy),
        now(),
    )
}

pub fn scheduled(application: &str, embassy: &str, days: i64) -> Interview {
    pending(application, embassy)
        .assign_fixed_slot(slot_in_days(days), None)
        .unwrap()
}

pub fn offer(id: &str, capacity: u32) -> SlotOffer {
    SlotOffer::new(OfferId::new(id), slot_in_days(10), capacity).unwrap()
}

pub fn manager(application: &str) -> InterviewManager {
    InterviewManager::new(ApplicationId::new(application), EmbassyId::new("USA"))
}
