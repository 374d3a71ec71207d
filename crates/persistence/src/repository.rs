// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage contracts.
//!
//! Every operation is synchronous. Implementations must be safe to share
//! across threads: services hold them behind `Arc<dyn ...>`.

use crate::error::PersistenceError;
use chrono::NaiveDate;
use embassy_interview_audit::AuditEvent;
use embassy_interview_domain::{
    ApplicationId, EmbassyId, EmbassyResponse, Interview, InterviewId, InterviewManager, OfferId,
    SlotOffer,
};

/// Stores interviews with optimistic concurrency control.
pub trait InterviewRepository: Send + Sync {
    /// Stores `interview` and returns the stored copy with its new version.
    ///
    /// The version carried by `interview` must equal the stored version
    /// (0 for an interview that was never saved).
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ConcurrentModification` if another
    /// writer saved the interview since it was loaded.
    fn save(&self, interview: &Interview) -> Result<Interview, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_id(&self, id: &InterviewId) -> Result<Option<Interview>, PersistenceError>;

    /// Returns every interview of an application, including superseded ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Interview>, PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_embassy(&self, embassy_id: &EmbassyId) -> Result<Vec<Interview>, PersistenceError>;

    /// Returns interviews whose current slot falls on `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Interview>, PersistenceError>;

    /// Returns interviews still waiting for a slot: `PendingAssignment`
    /// and `OptionsOffered`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn list_pending(&self) -> Result<Vec<Interview>, PersistenceError>;

    /// Returns active interviews with a slot between `today` and
    /// `today + days` inclusive, soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn list_upcoming(&self, today: NaiveDate, days: u32)
    -> Result<Vec<Interview>, PersistenceError>;

    /// Removes an interview. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn delete(&self, id: &InterviewId) -> Result<bool, PersistenceError>;
}

/// Stores inbound embassy responses.
pub trait EmbassyResponseRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn save(&self, response: &EmbassyResponse) -> Result<(), PersistenceError>;

    /// Returns every response for an application, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<EmbassyResponse>, PersistenceError>;

    /// Returns the most recently received response for an application.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_latest(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<EmbassyResponse>, PersistenceError>;
}

/// Stores one interview manager per application.
pub trait InterviewManagerRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<InterviewManager>, PersistenceError>;

    /// Replaces an existing manager and returns it with its new version.
    ///
    /// The save succeeds only if the stored version equals
    /// `manager.version()`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ManagerNotFound` if the manager was never
    /// created, or `PersistenceError::ManagerConflict` if it changed since
    /// it was loaded.
    fn save(&self, manager: &InterviewManager) -> Result<InterviewManager, PersistenceError>;

    /// Stores a new manager at version 1 and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateManager` if the application
    /// already has one.
    fn create(&self, manager: &InterviewManager) -> Result<InterviewManager, PersistenceError>;
}

/// Serializes seat reservations on shared slot offers.
///
/// An offer's reservation count lives here, not on any one interview:
/// the copies held by interviews are snapshots.
pub trait OfferLedger: Send + Sync {
    /// Makes offers available for reservation.
    ///
    /// Registering an offer that is already known with the same slot and
    /// capacity is a no-op and keeps its reservations.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidOffer` if a known offer is
    /// registered with a different slot or capacity.
    fn register(&self, offers: &[SlotOffer]) -> Result<(), PersistenceError>;

    /// # Errors
    ///
    /// Returns an error if the ledger is unavailable.
    fn find(&self, offer_id: &OfferId) -> Result<Option<SlotOffer>, PersistenceError>;

    /// Atomically takes one seat and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::OfferNotFound` or
    /// `PersistenceError::SlotUnavailable`.
    fn try_reserve(&self, offer_id: &OfferId) -> Result<SlotOffer, PersistenceError>;

    /// Gives one seat back and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::OfferNotFound`, or
    /// `PersistenceError::InvalidOffer` if nothing is reserved.
    fn release(&self, offer_id: &OfferId) -> Result<SlotOffer, PersistenceError>;
}

/// Append-only store of audit events.
pub trait AuditLog: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn append(&self, event: &AuditEvent) -> Result<(), PersistenceError>;

    /// Returns an application's audit trail, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    fn list_for_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<AuditEvent>, PersistenceError>;
}
