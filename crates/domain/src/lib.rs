// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions, clippy::missing_const_for_fn)]

mod error;
mod interview;
mod manager;
mod policy;
mod response;
mod slot;
mod slot_offer;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use interview::{AssignmentMode, CancellationReason, Interview, InterviewState};
pub use manager::InterviewManager;
pub use policy::{EmbassyPolicy, PolicyLimits, PolicyRegistry, PolicyTable};
pub use response::{EmbassyResponse, ResponseDecision, ResponseKind};
pub use slot::Slot;
pub use slot_offer::SlotOffer;
pub use types::{ApplicationId, EmbassyId, InterviewId, OfferId};
pub use validation::{is_active_state, is_lead_time_valid, validate_lead_time, validate_offers};
