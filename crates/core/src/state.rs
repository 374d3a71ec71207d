// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use embassy_interview_audit::{AuditEvent, InterviewEvent};
use embassy_interview_domain::{Interview, InterviewManager};

/// The result of a successful interview transition.
///
/// A transition always produces a new interview, exactly one audit event,
/// and exactly one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The interview after the transition.
    pub new_interview: Interview,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The notification to hand to the delivery collaborator.
    pub notification: InterviewEvent,
    /// Applicant-facing summary of what happened.
    pub message: String,
}

/// The outcome of processing one embassy response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The embassy approved; a new interview replaced the current one.
    Installed {
        /// The manager after archiving and installing.
        manager: InterviewManager,
        /// The newly installed interview.
        interview: Interview,
        /// The audit event recording the installation.
        audit_event: AuditEvent,
        /// The notification to hand to the delivery collaborator.
        notification: InterviewEvent,
        /// The closing transition of the previous interview, when it was
        /// still active.
        superseded: Option<TransitionResult>,
    },
    /// The embassy rejected; the manager is untouched.
    Rejected {
        /// The embassy's stated reason.
        reason: String,
        /// Whether the applicant may appeal.
        can_appeal: bool,
    },
}

impl ResponseOutcome {
    /// Returns the interview installed by an approval.
    #[must_use]
    pub const fn interview(&self) -> Option<&Interview> {
        match self {
            Self::Installed { interview, .. } => Some(interview),
            Self::Rejected { .. } => None,
        }
    }
}
