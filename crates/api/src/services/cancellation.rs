// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::{ServiceContext, finish};
use crate::error::ServiceError;
use crate::result::{OperationResult, Transition};
use embassy_interview::Command;
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{CancellationReason, Interview, InterviewId};

/// Cancels interviews, enforcing the embassy's notice period.
#[derive(Clone)]
pub struct CancellationService {
    ctx: ServiceContext,
}

impl CancellationService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reports whether the interview may be cancelled now, with the reason.
    ///
    /// # Errors
    ///
    /// Returns an error if the interview does not exist.
    pub fn can_cancel(&self, interview_id: &InterviewId) -> Result<(bool, String), ServiceError> {
        let interview: Interview = self.ctx.load(interview_id)?;
        Ok(interview.can_cancel(&self.ctx.policy_for(&interview), self.ctx.clock.now()))
    }

    /// Cancels the interview.
    ///
    /// If the slot came from a shared offer, its seat is returned to the
    /// ledger. A failed return is logged; the cancellation stands.
    #[must_use]
    pub fn cancel(
        &self,
        interview_id: &InterviewId,
        reason: CancellationReason,
        detail: &str,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> = self.ctx.execute(
            interview_id,
            Command::Cancel {
                reason,
                detail: detail.to_string(),
            },
            actor,
            cause,
        );

        if let Ok(transition) = &result {
            self.ctx.release_seat(&transition.interview);
        }
        finish("cancel", interview_id, result)
    }
}
