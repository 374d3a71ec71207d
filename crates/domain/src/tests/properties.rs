// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Property tests for the reschedule budget and offer capacity.

use super::helpers::{now, offer, policy_with, scheduled_interview, slot_in_days};
use crate::{EmbassyPolicy, Interview, SlotOffer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn reschedule_count_never_exceeds_policy(
        max_reschedules in 0_u32..5,
        min_lead_days in 0_u32..10,
        offsets in prop::collection::vec(-3_i64..30, 0..12),
    ) {
        let policy: EmbassyPolicy = policy_with(max_reschedules, 24, min_lead_days);
        let mut interview: Interview = scheduled_interview(20);

        for days in offsets {
            if let Ok(next) = interview.reschedule(slot_in_days(days), &policy, now()) {
                prop_assert_eq!(next.reschedule_count(), interview.reschedule_count() + 1);
                interview = next;
            }
            prop_assert!(interview.reschedule_count() <= policy.max_reschedules());
            prop_assert_eq!(
                interview.slot_history().len(),
                interview.reschedule_count() as usize
            );
        }
    }

    #[test]
    fn offer_reservations_never_exceed_capacity(
        capacity in 1_u32..6,
        operations in prop::collection::vec(any::<bool>(), 0..32),
    ) {
        let mut current: SlotOffer = offer("P", 10, capacity);

        for reserve in operations {
            let next = if reserve { current.reserve() } else { current.release() };
            if let Ok(next) = next {
                current = next;
            }
            prop_assert!(current.reserved_count() <= current.capacity());
            prop_assert_eq!(current.is_open(), current.reserved_count() < current.capacity());
        }
    }
}
