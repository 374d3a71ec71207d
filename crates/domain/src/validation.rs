// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interview::Interview;
use crate::policy::EmbassyPolicy;
use crate::slot::Slot;
use crate::slot_offer::SlotOffer;
use crate::types::OfferId;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Validates that a slot respects the embassy's minimum lead time.
///
/// # Arguments
///
/// * `policy` - The embassy policy to enforce
/// * `slot` - The proposed slot
/// * `today` - The current calendar date
///
/// # Errors
///
/// Returns `DomainError::LeadTimeViolation` if the slot's date is fewer
/// than `min_lead_days` days after `today`.
pub fn validate_lead_time(
    policy: &EmbassyPolicy,
    slot: &Slot,
    today: NaiveDate,
) -> Result<(), DomainError> {
    let days_ahead: i64 = slot.days_remaining(today);
    if days_ahead < i64::from(policy.min_lead_days()) {
        return Err(DomainError::LeadTimeViolation {
            days_ahead,
            min_lead_days: policy.min_lead_days(),
        });
    }
    Ok(())
}

/// Returns true if the slot respects the embassy's minimum lead time.
#[must_use]
pub fn is_lead_time_valid(policy: &EmbassyPolicy, slot: &Slot, today: NaiveDate) -> bool {
    validate_lead_time(policy, slot, today).is_ok()
}

/// Returns true for any non-terminal interview.
#[must_use]
pub const fn is_active_state(interview: &Interview) -> bool {
    interview.is_active()
}

/// Validates a set of offers published together.
///
/// # Errors
///
/// Returns an error if:
/// - `offers` is empty
/// - Two offers share an identifier
pub fn validate_offers(offers: &[SlotOffer]) -> Result<(), DomainError> {
    if offers.is_empty() {
        return Err(DomainError::NoOffersProvided);
    }

    let mut seen: HashSet<&OfferId> = HashSet::new();
    for offer in offers {
        if !seen.insert(offer.id()) {
            return Err(DomainError::InvalidOffer {
                reason: format!("offer '{}' is listed more than once", offer.id()),
            });
        }
    }
    Ok(())
}
