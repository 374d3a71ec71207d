// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::{ServiceContext, finish};
use crate::error::ServiceError;
use crate::result::{OperationResult, Transition};
use embassy_interview::Command;
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{Interview, InterviewId, Slot};

/// Moves interviews to new slots within the embassy's reschedule budget.
#[derive(Clone)]
pub struct ReschedulingService {
    ctx: ServiceContext,
}

impl ReschedulingService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reports whether the interview may be rescheduled, with the reason.
    ///
    /// # Errors
    ///
    /// Returns an error if the interview does not exist.
    pub fn can_reschedule(&self, interview_id: &InterviewId) -> Result<(bool, String), ServiceError> {
        let interview: Interview = self.ctx.load(interview_id)?;
        Ok(interview.can_reschedule(&self.ctx.policy_for(&interview)))
    }

    /// Moves the interview to `new_slot`.
    ///
    /// On success the message names the new slot and the remaining budget,
    /// and says so explicitly when this was the last allowed reschedule.
    #[must_use]
    pub fn reschedule(
        &self,
        interview_id: &InterviewId,
        new_slot: Slot,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.ctx
                .execute(interview_id, Command::Reschedule { new_slot }, actor, cause);
        finish("reschedule", interview_id, result)
    }
}
