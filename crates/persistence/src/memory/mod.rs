// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory stores backed by `RwLock`ed maps.
//!
//! Used by tests and the CLI. Each store gets a sequential instance id so
//! log lines from parallel tests can be told apart.

mod audit;
mod interviews;
mod managers;
mod responses;

use crate::error::PersistenceError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub use audit::InMemoryAuditLog;
pub use interviews::InMemoryInterviewRepository;
pub use managers::InMemoryInterviewManagerRepository;
pub use responses::InMemoryEmbassyResponseRepository;

/// Atomic counter for generating unique store instance ids.
static STORE_COUNTER: AtomicU64 = AtomicU64::new(0);

pub(crate) fn next_store_id() -> u64 {
    STORE_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub(crate) fn read<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> Result<RwLockReadGuard<'a, T>, PersistenceError> {
    lock.read().map_err(|_| PersistenceError::LockPoisoned(store))
}

pub(crate) fn write<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> Result<RwLockWriteGuard<'a, T>, PersistenceError> {
    lock.write().map_err(|_| PersistenceError::LockPoisoned(store))
}
