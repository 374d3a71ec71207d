// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for embassy interview scheduling.
//!
//! This crate defines the storage contracts the services depend on and
//! ships in-memory implementations of each:
//!
//! - [`InterviewRepository`]: interviews, with an optimistic version check
//!   on every save
//! - [`EmbassyResponseRepository`]: inbound embassy decisions
//! - [`InterviewManagerRepository`]: one manager per application
//! - [`OfferLedger`]: atomic seat reservations on shared slot offers
//! - [`AuditLog`]: the append-only audit trail
//!
//! ## Concurrency
//!
//! Different interviews proceed in parallel. Two writers racing on the
//! same interview are serialized by the version check: the loser gets
//! [`PersistenceError::ConcurrentModification`] and must reload. Managers
//! carry their own version and reject stale saves with
//! [`PersistenceError::ManagerConflict`]. Seats on an offer are serialized
//! by the ledger, never by the interview store.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod ledger;
mod memory;
mod repository;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use ledger::AtomicOfferLedger;
pub use memory::{
    InMemoryAuditLog, InMemoryEmbassyResponseRepository, InMemoryInterviewManagerRepository,
    InMemoryInterviewRepository,
};
pub use repository::{
    AuditLog, EmbassyResponseRepository, InterviewManagerRepository, InterviewRepository,
    OfferLedger,
};
