// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capacity-bounded slot offers.
//!
//! When an embassy proposes several candidate slots instead of a fixed
//! date, each candidate is published as a `SlotOffer`. One offer may be
//! visible to many applicants at once; its capacity is the number of
//! interviews that can hold it.
//!
//! `SlotOffer` itself is a value: `reserve` and `release` return updated
//! copies. Serializing reservations across applicants is the job of the
//! offer ledger at the persistence boundary.

use crate::error::DomainError;
use crate::slot::Slot;
use crate::types::OfferId;
use serde::{Deserialize, Serialize};

/// A slot offered by an embassy with bounded capacity.
///
/// ## Invariants
///
/// - `capacity >= 1`
/// - `reserved_count <= capacity`
/// - `is_open() == (reserved_count < capacity)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSlotOffer")]
pub struct SlotOffer {
    id: OfferId,
    slot: Slot,
    capacity: u32,
    reserved_count: u32,
}

#[derive(Deserialize)]
struct RawSlotOffer {
    id: OfferId,
    slot: Slot,
    capacity: u32,
    #[serde(default)]
    reserved_count: u32,
}

impl TryFrom<RawSlotOffer> for SlotOffer {
    type Error = DomainError;

    fn try_from(raw: RawSlotOffer) -> Result<Self, Self::Error> {
        Self::with_reservations(raw.id, raw.slot, raw.capacity, raw.reserved_count)
    }
}

impl SlotOffer {
    /// Creates an offer with no reservations.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOffer` if `capacity` is zero.
    pub fn new(id: OfferId, slot: Slot, capacity: u32) -> Result<Self, DomainError> {
        Self::with_reservations(id, slot, capacity, 0)
    }

    /// Rebuilds an offer with an existing reservation count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOffer` if `capacity` is zero or
    /// `reserved_count` exceeds it.
    pub fn with_reservations(
        id: OfferId,
        slot: Slot,
        capacity: u32,
        reserved_count: u32,
    ) -> Result<Self, DomainError> {
        if capacity == 0 {
            return Err(DomainError::InvalidOffer {
                reason: format!("offer '{id}' must have a capacity of at least 1"),
            });
        }
        if reserved_count > capacity {
            return Err(DomainError::InvalidOffer {
                reason: format!(
                    "offer '{id}' has {reserved_count} reservation(s) but a capacity of {capacity}"
                ),
            });
        }
        Ok(Self {
            id,
            slot,
            capacity,
            reserved_count,
        })
    }

    #[must_use]
    pub const fn id(&self) -> &OfferId {
        &self.id
    }

    #[must_use]
    pub const fn slot(&self) -> &Slot {
        &self.slot
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub const fn reserved_count(&self) -> u32 {
        self.reserved_count
    }

    /// Returns true while at least one seat is free.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.reserved_count < self.capacity
    }

    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.capacity - self.reserved_count
    }

    /// Returns a copy with one more seat taken.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotUnavailable` if the offer is already full.
    pub fn reserve(&self) -> Result<Self, DomainError> {
        if !self.is_open() {
            return Err(DomainError::SlotUnavailable(self.id.clone()));
        }
        Ok(Self {
            reserved_count: self.reserved_count + 1,
            ..self.clone()
        })
    }

    /// Returns a copy with one seat given back.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidOffer` if nothing is reserved.
    pub fn release(&self) -> Result<Self, DomainError> {
        if self.reserved_count == 0 {
            return Err(DomainError::InvalidOffer {
                reason: format!("offer '{}' has no reservation to release", self.id),
            });
        }
        Ok(Self {
            reserved_count: self.reserved_count - 1,
            ..self.clone()
        })
    }
}
