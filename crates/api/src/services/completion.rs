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

/// Closes confirmed interviews once they took place (or did not).
#[derive(Clone)]
pub struct CompletionService {
    ctx: ServiceContext,
}

impl CompletionService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    #[must_use]
    pub fn mark_completed(
        &self,
        interview_id: &InterviewId,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.ctx
                .execute(interview_id, Command::MarkCompleted, actor, cause);
        finish("mark_completed", interview_id, result)
    }

    #[must_use]
    pub fn mark_no_show(
        &self,
        interview_id: &InterviewId,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<Transition> {
        let result: Result<Transition, ServiceError> =
            self.ctx.execute(interview_id, Command::MarkNoShow, actor, cause);
        finish("mark_no_show", interview_id, result)
    }
}
