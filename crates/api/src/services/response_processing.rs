// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::context::ServiceContext;
use crate::error::{ErrorKind, ServiceError};
use crate::result::{OperationResult, ResponseReport, Transition};
use embassy_interview::{ResponseOutcome, process_response};
use embassy_interview_audit::{Actor, Cause};
use embassy_interview_domain::{
    EmbassyPolicy, EmbassyResponse, Interview, InterviewId, InterviewManager,
};
use tracing::{info, warn};

/// Turns embassy decisions into interviews.
#[derive(Clone)]
pub struct ResponseProcessingService {
    ctx: ServiceContext,
}

impl ResponseProcessingService {
    #[must_use]
    pub const fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Records and applies an embassy response.
    ///
    /// A rejection reports the reason and whether the applicant may
    /// appeal, and leaves every interview as it was. An approval cancels
    /// the application's current interview if it is still active, returns
    /// its offer seat, archives it, and installs a new one.
    #[must_use]
    pub fn process(
        &self,
        response: &EmbassyResponse,
        actor: Actor,
        cause: Cause,
    ) -> OperationResult<ResponseReport> {
        match self.process_inner(response, actor, cause) {
            Ok(report) => {
                let message: String = match &report {
                    ResponseReport::Rejected { reason, can_appeal } => {
                        info!(
                            application_id = %response.application_id,
                            can_appeal,
                            "Application rejected by embassy"
                        );
                        if *can_appeal {
                            format!("The embassy rejected the application: {reason}. The decision can be appealed.")
                        } else {
                            format!("The embassy rejected the application: {reason}. The decision is final.")
                        }
                    }
                    ResponseReport::Installed(transition) => {
                        info!(
                            application_id = %response.application_id,
                            interview_id = %transition.interview.id(),
                            state = %transition.interview.state(),
                            "Installed interview from embassy response"
                        );
                        transition.notification.message.clone()
                    }
                };
                OperationResult::ok(report, message)
            }
            Err(err) => {
                warn!(
                    application_id = %response.application_id,
                    kind = %err.kind,
                    message = %err.message,
                    "Embassy response rejected"
                );
                OperationResult::failure(err)
            }
        }
    }

    fn process_inner(
        &self,
        response: &EmbassyResponse,
        actor: Actor,
        cause: Cause,
    ) -> Result<ResponseReport, ServiceError> {
        self.ctx.responses.save(response)?;

        let existing: Option<InterviewManager> = self
            .ctx
            .managers
            .find_by_application(&response.application_id)?
            .map(|manager| self.with_stored_current(manager))
            .transpose()?;
        let manager: InterviewManager = existing.clone().unwrap_or_else(|| {
            InterviewManager::new(response.application_id.clone(), response.embassy_id.clone())
        });
        let previous: Option<InterviewId> = manager.current().map(|i| i.id().clone());
        let policy: EmbassyPolicy = self.ctx.policies.policy_for(&response.embassy_id);

        let outcome: ResponseOutcome =
            process_response(&manager, response.clone(), &policy, actor, cause)?;
        let (installed, interview, audit_event, notification, superseded) = match outcome {
            ResponseOutcome::Rejected { reason, can_appeal } => {
                return Ok(ResponseReport::Rejected { reason, can_appeal });
            }
            ResponseOutcome::Installed {
                manager,
                interview,
                audit_event,
                notification,
                superseded,
            } => (manager, interview, audit_event, notification, superseded),
        };

        if !interview.offered_slots().is_empty() {
            self.ctx.offers.register(interview.offered_slots())?;
        }
        // Closing the previous interview first makes a racing command on it
        // fail its version check instead of reviving it.
        let closed: Option<Interview> = match &superseded {
            Some(transition) => {
                let closed: Interview = self.ctx.interviews.save(&transition.new_interview)?;
                self.ctx.release_seat(&closed);
                Some(closed)
            }
            None => None,
        };

        let saved: Interview = self.ctx.interviews.save(&interview)?;
        if existing.is_some() {
            self.ctx
                .update_manager(&response.application_id, |stored| {
                    replace_current(stored, previous.as_ref(), closed.as_ref(), &saved).map(Some)
                })?;
        } else {
            self.ctx.managers.create(&installed.refresh_current(&saved))?;
        }

        if let Some(transition) = superseded {
            self.ctx.audit_log.append(&transition.audit_event)?;
            self.ctx.publish(&transition.notification);
        }
        self.ctx.audit_log.append(&audit_event)?;
        self.ctx.publish(&notification);

        Ok(ResponseReport::Installed(Transition {
            interview: saved,
            audit_event,
            notification,
        }))
    }

    /// Replaces the manager's copy of its current interview with the
    /// stored one, which may be newer.
    fn with_stored_current(
        &self,
        manager: InterviewManager,
    ) -> Result<InterviewManager, ServiceError> {
        let Some(current) = manager.current() else {
            return Ok(manager);
        };
        if let Some(stored) = self.ctx.interviews.find_by_id(current.id())? {
            return Ok(manager.refresh_current(&stored));
        }
        Ok(manager)
    }
}

/// Archives the stored manager's current interview (as `closed`, when it
/// was superseded) and installs `installed`.
///
/// Fails with a conflict if another decision replaced `previous` in the
/// meantime.
fn replace_current(
    stored: &InterviewManager,
    previous: Option<&InterviewId>,
    closed: Option<&Interview>,
    installed: &Interview,
) -> Result<InterviewManager, ServiceError> {
    let base: InterviewManager =
        closed.map_or_else(|| stored.clone(), |c| stored.refresh_current(c));
    if base.current().map(Interview::id) != previous {
        return Err(ServiceError::new(
            ErrorKind::ConcurrentModification,
            format!(
                "Interviews of application {} changed while a decision was processed; reload and retry",
                stored.application_id()
            ),
        ));
    }
    base.archive_current()
        .install(installed.clone())
        .map_err(ServiceError::from)
}
