// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use embassy_interview_domain::{CancellationReason, OfferId, Slot, SlotOffer};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request interview state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assign a single slot chosen by the embassy.
    AssignFixedDate {
        /// The assigned slot.
        slot: Slot,
        /// Where the interview takes place.
        location: Option<String>,
    },
    /// Publish candidate slots for the applicant.
    OfferSlots {
        /// The candidate slots.
        offers: Vec<SlotOffer>,
        /// Where the interview takes place.
        location: Option<String>,
    },
    /// Select an offer, reserving a seat on the interview's own copy.
    SelectOffer {
        /// The chosen offer.
        offer_id: OfferId,
    },
    /// Install an offer whose seat was already reserved by the offer
    /// ledger.
    ClaimReservedOffer {
        /// The ledger's post-reservation snapshot.
        offer: SlotOffer,
    },
    /// Move the interview to another slot.
    Reschedule {
        /// The replacement slot.
        new_slot: Slot,
    },
    /// Cancel the interview.
    Cancel {
        /// Why the interview is cancelled.
        reason: CancellationReason,
        /// Free-form explanation.
        detail: String,
    },
    /// Close an active interview replaced by a new embassy decision.
    Supersede,
    /// Confirm attendance.
    Confirm,
    /// Record that the interview took place.
    MarkCompleted,
    /// Record that the applicant did not attend.
    MarkNoShow,
}

impl Command {
    /// Returns the name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AssignFixedDate { .. } => "AssignFixedDate",
            Self::OfferSlots { .. } => "OfferSlots",
            Self::SelectOffer { .. } => "SelectOffer",
            Self::ClaimReservedOffer { .. } => "ClaimReservedOffer",
            Self::Reschedule { .. } => "Reschedule",
            Self::Cancel { .. } => "Cancel",
            Self::Supersede => "Supersede",
            Self::Confirm => "Confirm",
            Self::MarkCompleted => "MarkCompleted",
            Self::MarkNoShow => "MarkNoShow",
        }
    }
}
