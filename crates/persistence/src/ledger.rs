// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lock-free seat reservations for shared slot offers.
//!
//! The map of offers sits behind an `RwLock`, but reservations only take
//! the read side: each entry's count is an `AtomicU32` advanced with a
//! compare-and-exchange loop, so two selections of the same offer can
//! never both take its last seat.

use crate::error::PersistenceError;
use crate::memory::{read, write};
use crate::repository::OfferLedger;
use embassy_interview_domain::{OfferId, SlotOffer};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, RwLock};
use tracing::debug;

const STORE: &str = "offer ledger";

#[derive(Debug)]
struct LedgerEntry {
    offer: SlotOffer,
    reserved: AtomicU32,
}

impl LedgerEntry {
    fn snapshot(&self, reserved: u32) -> Result<SlotOffer, PersistenceError> {
        SlotOffer::with_reservations(
            self.offer.id().clone(),
            *self.offer.slot(),
            self.offer.capacity(),
            reserved,
        )
        .map_err(PersistenceError::from)
    }
}

/// The in-memory [`OfferLedger`].
#[derive(Debug, Default)]
pub struct AtomicOfferLedger {
    entries: RwLock<HashMap<OfferId, Arc<LedgerEntry>>>,
}

impl AtomicOfferLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, offer_id: &OfferId) -> Result<Arc<LedgerEntry>, PersistenceError> {
        let entries = read(&self.entries, STORE)?;
        entries
            .get(offer_id)
            .cloned()
            .ok_or_else(|| PersistenceError::OfferNotFound(offer_id.clone()))
    }
}

impl OfferLedger for AtomicOfferLedger {
    fn register(&self, offers: &[SlotOffer]) -> Result<(), PersistenceError> {
        let mut entries = write(&self.entries, STORE)?;

        for offer in offers {
            if let Some(existing) = entries.get(offer.id())
                && (existing.offer.slot() != offer.slot()
                    || existing.offer.capacity() != offer.capacity())
            {
                return Err(PersistenceError::InvalidOffer(format!(
                    "offer '{}' is already registered with a different slot or capacity",
                    offer.id()
                )));
            }
        }

        for offer in offers {
            entries.entry(offer.id().clone()).or_insert_with(|| {
                debug!(
                    offer_id = %offer.id(),
                    capacity = offer.capacity(),
                    reserved = offer.reserved_count(),
                    "Registered slot offer"
                );
                Arc::new(LedgerEntry {
                    offer: offer.clone(),
                    reserved: AtomicU32::new(offer.reserved_count()),
                })
            });
        }
        Ok(())
    }

    fn find(&self, offer_id: &OfferId) -> Result<Option<SlotOffer>, PersistenceError> {
        let entries = read(&self.entries, STORE)?;
        entries
            .get(offer_id)
            .map(|e| e.snapshot(e.reserved.load(Ordering::Acquire)))
            .transpose()
    }

    fn try_reserve(&self, offer_id: &OfferId) -> Result<SlotOffer, PersistenceError> {
        let entry: Arc<LedgerEntry> = self.entry(offer_id)?;
        let capacity: u32 = entry.offer.capacity();

        let mut current: u32 = entry.reserved.load(Ordering::Acquire);
        loop {
            if current >= capacity {
                debug!(offer_id = %offer_id, capacity, "Offer is full");
                return Err(PersistenceError::SlotUnavailable(offer_id.clone()));
            }
            match entry.reserved.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        debug!(
            offer_id = %offer_id,
            reserved = current + 1,
            capacity,
            "Reserved offer seat"
        );
        entry.snapshot(current + 1)
    }

    fn release(&self, offer_id: &OfferId) -> Result<SlotOffer, PersistenceError> {
        let entry: Arc<LedgerEntry> = self.entry(offer_id)?;

        let mut current: u32 = entry.reserved.load(Ordering::Acquire);
        loop {
            if current == 0 {
                return Err(PersistenceError::InvalidOffer(format!(
                    "offer '{offer_id}' has no reservation to release"
                )));
            }
            match entry.reserved.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break,
                Err(actual) => current = actual,
            }
        }

        debug!(offer_id = %offer_id, reserved = current - 1, "Released offer seat");
        entry.snapshot(current - 1)
    }
}
