// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::{ServiceContext, finish};
use crate::error::ServiceError;
use crate::result::{OperationResult, Transition};
use embassy_interview::Command;
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::InterviewId;

#[derive(Clone)]
pub struct ConfirmationService {
    ctx: ServiceContext,
}

impl ConfirmationService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Confirms attendance. Fails under `InvalidTransition` when no slot
    /// is assigned or the interview is not awaiting confirmation.
    #[must_use]
    pub fn confirm(
        &self,
        interview_id: &InterviewId,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.ctx.execute(interview_id, Command::Confirm, actor, cause);
        finish("confirm", interview_id, result)
    }
}
