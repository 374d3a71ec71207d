// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use embassy_interview::CoreError;
use embassy_interview_domain::DomainError;
use embassy_interview_persistence::PersistenceError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// The category of a failed operation, as reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InterviewNotFound,
    InvalidTransition,
    RescheduleLimitExceeded,
    LeadTimeViolation,
    InvalidDate,
    CancellationNotAllowed,
    OfferNotFound,
    SlotUnavailable,
    NoOffersProvided,
    /// Another writer changed the interview; reload and retry.
    ConcurrentModification,
    /// A malformed slot, offer, policy or identifier.
    InvalidInput,
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InterviewNotFound => "INTERVIEW_NOT_FOUND",
            Self::InvalidTransition => "INVALID_TRANSITION",
            Self::RescheduleLimitExceeded => "RESCHEDULE_LIMIT_EXCEEDED",
            Self::LeadTimeViolation => "LEAD_TIME_VIOLATION",
            Self::InvalidDate => "INVALID_DATE",
            Self::CancellationNotAllowed => "CANCELLATION_NOT_ALLOWED",
            Self::OfferNotFound => "OFFER_NOT_FOUND",
            Self::SlotUnavailable => "SLOT_UNAVAILABLE",
            Self::NoOffersProvided => "NO_OFFERS_PROVIDED",
            Self::ConcurrentModification => "CONCURRENT_MODIFICATION",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rejected service operation: a kind plus an actionable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ServiceError {
    #[must_use]
    pub const fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ServiceError {}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ServiceError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

/// Translates a domain error into a service error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ServiceError {
    let message: String = err.to_string();
    let kind: ErrorKind = match err {
        DomainError::InvalidTransition { .. } | DomainError::NoSlotAssigned { .. } => {
            ErrorKind::InvalidTransition
        }
        DomainError::RescheduleLimitExceeded { .. } => ErrorKind::RescheduleLimitExceeded,
        DomainError::LeadTimeViolation { .. } => ErrorKind::LeadTimeViolation,
        DomainError::InvalidDate { .. } => ErrorKind::InvalidDate,
        DomainError::CancellationNotAllowed { .. } => ErrorKind::CancellationNotAllowed,
        DomainError::OfferNotFound(_) => ErrorKind::OfferNotFound,
        DomainError::SlotUnavailable(_) => ErrorKind::SlotUnavailable,
        DomainError::NoOffersProvided => ErrorKind::NoOffersProvided,
        DomainError::InvalidSlot { .. }
        | DomainError::InvalidOffer { .. }
        | DomainError::InvalidPolicy { .. }
        | DomainError::ApplicationMismatch { .. }
        | DomainError::InconsistentInterview { .. }
        | DomainError::UnknownValue { .. } => ErrorKind::InvalidInput,
    };
    ServiceError::new(kind, message)
}

/// Translates a core error into a service error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ServiceError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ServiceError::new(ErrorKind::Internal, msg),
    }
}

/// Translates a persistence error into a service error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ServiceError {
    let message: String = err.to_string();
    let kind: ErrorKind = match err {
        PersistenceError::InterviewNotFound(_) | PersistenceError::ManagerNotFound(_) => {
            ErrorKind::InterviewNotFound
        }
        PersistenceError::OfferNotFound(_) => ErrorKind::OfferNotFound,
        PersistenceError::SlotUnavailable(_) => ErrorKind::SlotUnavailable,
        // Two responses racing to create the same manager is a lost update too.
        PersistenceError::ConcurrentModification { .. }
        | PersistenceError::ManagerConflict { .. }
        | PersistenceError::DuplicateManager(_) => ErrorKind::ConcurrentModification,
        PersistenceError::InvalidOffer(_) => ErrorKind::InvalidInput,
        PersistenceError::LockPoisoned(_) => ErrorKind::Internal,
    };
    ServiceError::new(kind, message)
}

/// Errors raised outside an interview operation: configuration loading
/// and similar process-level failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The policy file could not be read.
    #[error("Cannot read policy file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The policy file is not valid JSON for a policy table.
    #[error("Cannot parse policy table: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The policy table parsed but breaks a policy rule.
    #[error("{0}")]
    InvalidPolicy(DomainError),

    /// A service operation failed.
    #[error("{0}")]
    Service(#[from] ServiceError),
}
