// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::{ErrorKind, ServiceError};
use embassy_interview_audit::{AuditEvent, InterviewEvent};
use embassy_interview_domain::Interview;
use serde::Serialize;

/// The uniform result of every service operation.
///
/// Failures never panic and never surface as `Err`: they come back with
/// `success == false`, an [`ErrorKind`] and a message the applicant can
/// act on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub error: Option<ErrorKind>,
}

impl<T> OperationResult<T> {
    #[must_use]
    pub const fn ok(data: T, message: String) -> Self {
        Self {
            success: true,
            message,
            data: Some(data),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(err: ServiceError) -> Self {
        Self {
            success: false,
            message: err.message,
            data: None,
            error: Some(err.kind),
        }
    }

    /// Returns the error kind of a failed operation.
    #[must_use]
    pub const fn error_kind(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Converts back into a `Result`, for callers that prefer `?`.
    ///
    /// # Errors
    ///
    /// Returns the failure as a `ServiceError`.
    pub fn into_result(self) -> Result<T, ServiceError> {
        match (self.data, self.error) {
            (Some(data), None) => Ok(data),
            (_, kind) => Err(ServiceError::new(
                kind.unwrap_or(ErrorKind::Internal),
                self.message,
            )),
        }
    }
}

/// Everything a successful interview transition produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// The interview as stored, with its new version.
    pub interview: Interview,
    pub audit_event: AuditEvent,
    pub notification: InterviewEvent,
}

/// The result of processing an embassy response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResponseReport {
    /// The application was rejected; no interview changed.
    Rejected { reason: String, can_appeal: bool },
    /// A new interview was installed.
    Installed(Transition),
}
