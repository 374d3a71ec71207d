// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inbound embassy decisions.

use crate::slot::Slot;
use crate::slot_offer::SlotOffer;
use crate::types::{ApplicationId, EmbassyId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Whether the embassy approved or rejected the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Approved,
    Rejected,
}

/// The content of an embassy decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ResponseDecision {
    /// Approved with a single date set by the embassy.
    ApprovedFixed {
        /// The assigned slot.
        slot: Slot,
    },
    /// Approved with candidate slots for the applicant to choose from.
    ApprovedWithOptions {
        /// The candidate slots.
        offers: Vec<SlotOffer>,
    },
    /// Rejected.
    Rejected {
        /// The embassy's stated reason.
        reason: String,
        /// Whether the applicant may appeal.
        can_appeal: bool,
    },
}

/// A one-shot decision from the embassy about one application.
///
/// Responses are consumed once by response processing and are not
/// retained by the interview they produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbassyResponse {
    pub application_id: ApplicationId,
    pub embassy_id: EmbassyId,
    pub decision: ResponseDecision,
    /// Where the interview takes place, if the embassy said.
    pub location: Option<String>,
    pub received_at: NaiveDateTime,
}

impl EmbassyResponse {
    /// Creates an approval with a fixed slot.
    #[must_use]
    pub const fn approved_fixed(
        application_id: ApplicationId,
        embassy_id: EmbassyId,
        slot: Slot,
        location: Option<String>,
        received_at: NaiveDateTime,
    ) -> Self {
        Self {
            application_id,
            embassy_id,
            decision: ResponseDecision::ApprovedFixed { slot },
            location,
            received_at,
        }
    }

    /// Creates an approval with slot options.
    #[must_use]
    pub const fn approved_with_options(
        application_id: ApplicationId,
        embassy_id: EmbassyId,
        offers: Vec<SlotOffer>,
        location: Option<String>,
        received_at: NaiveDateTime,
    ) -> Self {
        Self {
            application_id,
            embassy_id,
            decision: ResponseDecision::ApprovedWithOptions { offers },
            location,
            received_at,
        }
    }

    /// Creates a rejection.
    #[must_use]
    pub const fn rejected(
        application_id: ApplicationId,
        embassy_id: EmbassyId,
        reason: String,
        can_appeal: bool,
        received_at: NaiveDateTime,
    ) -> Self {
        Self {
            application_id,
            embassy_id,
            decision: ResponseDecision::Rejected { reason, can_appeal },
            location: None,
            received_at,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ResponseKind {
        match self.decision {
            ResponseDecision::ApprovedFixed { .. } | ResponseDecision::ApprovedWithOptions { .. } => {
                ResponseKind::Approved
            }
            ResponseDecision::Rejected { .. } => ResponseKind::Rejected,
        }
    }
}
