// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::Clock;
use crate::error::{ErrorKind, ServiceError};
use crate::notifier::Notifier;
use crate::result::{OperationResult, Transition};
use embassy_interview::{Command, TransitionResult, apply};
use embassy_interview_audit::{Actor, Cause, InterviewEvent};
use embassy_interview_domain::{
    ApplicationId, EmbassyPolicy, Interview, InterviewId, InterviewManager, PolicyRegistry,
};
use embassy_interview_persistence::{
    AtomicOfferLedger, AuditLog, EmbassyResponseRepository, InMemoryAuditLog,
    InMemoryEmbassyResponseRepository, InMemoryInterviewManagerRepository,
    InMemoryInterviewRepository, InterviewManagerRepository, InterviewRepository, OfferLedger,
    PersistenceError,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How many times a manager update is attempted before a conflict is
/// reported to the caller.
const MANAGER_SAVE_ATTEMPTS: u32 = 3;

/// The collaborators every service shares.
#[derive(Clone)]
pub struct ServiceContext {
    pub interviews: Arc<dyn InterviewRepository>,
    pub responses: Arc<dyn EmbassyResponseRepository>,
    pub managers: Arc<dyn InterviewManagerRepository>,
    pub offers: Arc<dyn OfferLedger>,
    pub audit_log: Arc<dyn AuditLog>,
    pub policies: Arc<PolicyRegistry>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Wires the services to fresh in-memory stores.
    #[must_use]
    pub fn in_memory(
        policies: PolicyRegistry,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            interviews: Arc::new(InMemoryInterviewRepository::new()),
            responses: Arc::new(InMemoryEmbassyResponseRepository::new()),
            managers: Arc::new(InMemoryInterviewManagerRepository::new()),
            offers: Arc::new(AtomicOfferLedger::new()),
            audit_log: Arc::new(InMemoryAuditLog::new()),
            policies: Arc::new(policies),
            notifier,
            clock,
        }
    }

    pub(crate) fn load(&self, interview_id: &InterviewId) -> Result<Interview, ServiceError> {
        let interview: Interview = self.interviews.find_by_id(interview_id)?.ok_or_else(|| {
            ServiceError::new(
                ErrorKind::InterviewNotFound,
                format!("Interview {interview_id} was not found"),
            )
        })?;
        debug!(
            interview_id = %interview_id,
            state = %interview.state(),
            version = interview.version(),
            "Loaded interview"
        );
        Ok(interview)
    }

    pub(crate) fn policy_for(&self, interview: &Interview) -> EmbassyPolicy {
        self.policies.policy_for(interview.embassy_id())
    }

    /// Loads an interview, applies `command` under its embassy's policy,
    /// and commits the result.
    pub(crate) fn execute(
        &self,
        interview_id: &InterviewId,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<Transition, ServiceError> {
        let interview: Interview = self.load(interview_id)?;
        let transition: TransitionResult = self.apply(&interview, command, actor, cause)?;
        self.commit(transition)
    }

    pub(crate) fn apply(
        &self,
        interview: &Interview,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<TransitionResult, ServiceError> {
        apply(
            interview,
            &self.policy_for(interview),
            command,
            self.clock.now(),
            actor,
            cause,
        )
        .map_err(ServiceError::from)
    }

    /// Persists a transition, records its audit event, and publishes its
    /// notification.
    pub(crate) fn commit(&self, transition: TransitionResult) -> Result<Transition, ServiceError> {
        let saved: Interview = self.interviews.save(&transition.new_interview)?;
        self.sync_manager(&saved)?;
        self.audit_log.append(&transition.audit_event)?;
        self.publish(&transition.notification);

        Ok(Transition {
            interview: saved,
            audit_event: transition.audit_event,
            notification: transition.notification,
        })
    }

    /// Keeps the manager's copy of its current interview in step with the
    /// interview store.
    fn sync_manager(&self, saved: &Interview) -> Result<(), ServiceError> {
        self.update_manager(saved.application_id(), |manager| {
            let refreshed: InterviewManager = manager.refresh_current(saved);
            Ok((refreshed != *manager).then_some(refreshed))
        })?;
        Ok(())
    }

    /// Saves the manager `update` derives from the stored one.
    ///
    /// `update` returns `None` when there is nothing to save. A stale save
    /// is retried from a fresh read, up to `MANAGER_SAVE_ATTEMPTS` times.
    pub(crate) fn update_manager<F>(
        &self,
        application_id: &ApplicationId,
        update: F,
    ) -> Result<Option<InterviewManager>, ServiceError>
    where
        F: Fn(&InterviewManager) -> Result<Option<InterviewManager>, ServiceError>,
    {
        let mut attempt: u32 = 1;
        loop {
            let Some(stored) = self.managers.find_by_application(application_id)? else {
                return Ok(None);
            };
            let Some(updated) = update(&stored)? else {
                return Ok(Some(stored));
            };
            match self.managers.save(&updated) {
                Ok(saved) => return Ok(Some(saved)),
                Err(err @ PersistenceError::ManagerConflict { .. })
                    if attempt < MANAGER_SAVE_ATTEMPTS =>
                {
                    debug!(
                        application_id = %application_id,
                        attempt,
                        error = %err,
                        "Retrying interview manager save"
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Returns the seat of the interview's selected offer to the ledger.
    /// A failed return is logged; the caller's transition stands.
    pub(crate) fn release_seat(&self, interview: &Interview) {
        let Some(offer_id) = interview.selected_offer_id() else {
            return;
        };
        match self.offers.release(offer_id) {
            Ok(offer) => debug!(
                offer_id = %offer_id,
                interview_id = %interview.id(),
                remaining = offer.remaining(),
                "Returned offer seat of closed interview"
            ),
            Err(err) => warn!(
                offer_id = %offer_id,
                interview_id = %interview.id(),
                error = %err,
                "Could not return offer seat of closed interview"
            ),
        }
    }

    /// Delivers a notification. Failures are logged and swallowed.
    pub(crate) fn publish(&self, event: &InterviewEvent) {
        if let Err(err) = self.notifier.notify(event) {
            warn!(
                kind = %event.kind,
                interview_id = %event.interview_id,
                error = %err,
                "Notification delivery failed; the transition stands"
            );
        }
    }
}

/// Converts a service outcome into an [`OperationResult`], logging it.
pub(crate) fn finish(
    operation: &'static str,
    interview_id: &InterviewId,
    result: Result<Transition, ServiceError>,
) -> OperationResult<Transition> {
    match result {
        Ok(transition) => {
            info!(
                operation,
                interview_id = %interview_id,
                state = %transition.interview.state(),
                version = transition.interview.version(),
                "Interview updated"
            );
            let message: String = transition.notification.message.clone();
            OperationResult::ok(transition, message)
        }
        Err(err) => {
            warn!(
                operation,
                interview_id = %interview_id,
                kind = %err.kind,
                message = %err.message,
                "Interview operation rejected"
            );
            OperationResult::failure(err)
        }
    }
}
