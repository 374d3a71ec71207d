// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{now, offer, slot_in_days, slot_in_hours, today};
use crate::{DomainError, OfferId, Slot, SlotOffer};
use chrono::{Duration, NaiveTime};

#[test]
fn test_slot_rejects_zero_duration() {
    let result = Slot::new(today(), NaiveTime::from_hms_opt(10, 0, 0).unwrap(), 0);

    assert!(matches!(result, Err(DomainError::InvalidSlot { .. })));
}

#[test]
fn test_slot_derived_instants() {
    let slot: Slot = Slot::new(
        today(),
        NaiveTime::from_hms_opt(10, 15, 0).unwrap(),
        45,
    )
    .unwrap();

    assert_eq!(slot.start(), today().and_hms_opt(10, 15, 0).unwrap());
    assert_eq!(slot.end(), today().and_hms_opt(11, 0, 0).unwrap());
}

#[test]
fn test_slot_remaining_time_queries() {
    let slot: Slot = slot_in_days(10);

    assert_eq!(slot.days_remaining(today()), 10);
    assert_eq!(slot.hours_remaining(now()), 240);
    assert!(slot.is_future(now()));
}

#[test]
fn test_slot_starting_now_is_not_future() {
    let slot: Slot = slot_in_hours(0);

    assert!(!slot.is_future(now()));
    assert!(slot.is_future(now() - Duration::minutes(1)));
}

#[test]
fn test_slot_hours_remaining_truncates() {
    let slot: Slot = slot_in_hours(10);

    assert_eq!(slot.hours_remaining(now() + Duration::minutes(30)), 9);
    assert_eq!(slot.hours_remaining(now() + Duration::hours(11)), -1);
}

#[test]
fn test_slot_describe() {
    let slot: Slot = Slot::new(
        today(),
        NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        45,
    )
    .unwrap();

    assert_eq!(slot.describe(), "2026-10-16 at 09:30 (45 min)");
    assert_eq!(format!("{slot}"), slot.describe());
}

#[test]
fn test_slot_deserialization_enforces_duration() {
    let valid: Result<Slot, _> =
        serde_json::from_str(r#"{"date":"2026-10-26","time":"09:00:00","duration_minutes":30}"#);
    let invalid: Result<Slot, _> =
        serde_json::from_str(r#"{"date":"2026-10-26","time":"09:00:00","duration_minutes":0}"#);

    assert!(valid.is_ok());
    assert!(invalid.is_err());
}

#[test]
fn test_offer_rejects_zero_capacity() {
    let result = SlotOffer::new(OfferId::new("A"), slot_in_days(10), 0);

    assert!(matches!(result, Err(DomainError::InvalidOffer { .. })));
}

#[test]
fn test_offer_rejects_overbooked_snapshot() {
    let result = SlotOffer::with_reservations(OfferId::new("A"), slot_in_days(10), 2, 3);

    assert!(matches!(result, Err(DomainError::InvalidOffer { .. })));
}

#[test]
fn test_offer_reserve_closes_at_capacity() {
    let fresh: SlotOffer = offer("A", 10, 2);
    assert!(fresh.is_open());

    let once: SlotOffer = fresh.reserve().unwrap();
    assert_eq!(once.reserved_count(), 1);
    assert!(once.is_open());

    let twice: SlotOffer = once.reserve().unwrap();
    assert_eq!(twice.reserved_count(), 2);
    assert_eq!(twice.remaining(), 0);
    assert!(!twice.is_open());

    assert_eq!(
        twice.reserve(),
        Err(DomainError::SlotUnavailable(OfferId::new("A")))
    );
    // The original value is untouched.
    assert_eq!(fresh.reserved_count(), 0);
}

#[test]
fn test_offer_release_reopens() {
    let full: SlotOffer = offer("A", 10, 1).reserve().unwrap();

    let released: SlotOffer = full.release().unwrap();

    assert!(released.is_open());
    assert!(matches!(
        released.release(),
        Err(DomainError::InvalidOffer { .. })
    ));
}
