// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::ServiceContext;
use embassy_interview_domain::{EmbassyId, Interview, Slot, is_active_state, is_lead_time_valid};

/// Read-only policy checks. Nothing here is audited.
#[derive(Clone)]
pub struct ValidationService {
    ctx: ServiceContext,
}

impl ValidationService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Returns true if `slot` is far enough ahead for the embassy.
    #[must_use]
    pub fn is_lead_time_valid(&self, embassy_id: &EmbassyId, slot: &Slot) -> bool {
        is_lead_time_valid(
            &self.ctx.policies.policy_for(embassy_id),
            slot,
            self.ctx.clock.now().date(),
        )
    }

    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_active_state(&self, interview: &Interview) -> bool {
        is_active_state(interview)
    }
}
