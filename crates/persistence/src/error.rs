// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use embassy_interview_domain::{ApplicationId, DomainError, InterviewId, OfferId};

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The requested interview was not found.
    InterviewNotFound(InterviewId),
    /// No interview manager exists for the application.
    ManagerNotFound(ApplicationId),
    /// The offer was never registered with the ledger.
    OfferNotFound(OfferId),
    /// Every seat of the offer is taken.
    SlotUnavailable(OfferId),
    /// The stored interview changed since the caller loaded it.
    ConcurrentModification {
        interview_id: InterviewId,
        expected: u64,
        found: u64,
    },
    /// The stored manager changed since the caller loaded it.
    ManagerConflict {
        application_id: ApplicationId,
        expected: u64,
        found: u64,
    },
    /// A manager already exists for the application.
    DuplicateManager(ApplicationId),
    /// An offer could not be registered or released.
    InvalidOffer(String),
    /// A store lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InterviewNotFound(id) => write!(f, "Interview not found: {id}"),
            Self::ManagerNotFound(application_id) => {
                write!(f, "No interviews are tracked for application {application_id}")
            }
            Self::OfferNotFound(id) => write!(f, "Slot offer not found: {id}"),
            Self::SlotUnavailable(id) => {
                write!(f, "Slot offer {id} is fully booked")
            }
            Self::ConcurrentModification {
                interview_id,
                expected,
                found,
            } => write!(
                f,
                "Interview {interview_id} was modified concurrently (loaded version {expected}, stored version {found}); reload and retry"
            ),
            Self::ManagerConflict {
                application_id,
                expected,
                found,
            } => write!(
                f,
                "Interviews of application {application_id} were modified concurrently (loaded version {expected}, stored version {found}); reload and retry"
            ),
            Self::DuplicateManager(application_id) => {
                write!(f, "Interviews are already tracked for application {application_id}")
            }
            Self::InvalidOffer(msg) => write!(f, "Invalid slot offer: {msg}"),
            Self::LockPoisoned(store) => write!(f, "The {store} store is unavailable"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::SlotUnavailable(id) => Self::SlotUnavailable(id),
            DomainError::OfferNotFound(id) => Self::OfferNotFound(id),
            other => Self::InvalidOffer(other.to_string()),
        }
    }
}
