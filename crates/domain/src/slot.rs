// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interview slot value type.
//!
//! A slot is a wall-clock date and time in the embassy's local calendar plus
//! a duration. Slots never read the system clock: every time-relative query
//! takes "now" from the caller so results are deterministic.

use crate::error::DomainError;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// An immutable interview slot.
///
/// ## Invariants
///
/// - `duration_minutes > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSlot")]
pub struct Slot {
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
}

/// Unvalidated wire form of a slot.
#[derive(Deserialize)]
struct RawSlot {
    date: NaiveDate,
    time: NaiveTime,
    duration_minutes: u32,
}

impl TryFrom<RawSlot> for Slot {
    type Error = DomainError;

    fn try_from(raw: RawSlot) -> Result<Self, Self::Error> {
        Self::new(raw.date, raw.time, raw.duration_minutes)
    }
}

impl Slot {
    /// Creates a new slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSlot` if `duration_minutes` is zero.
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        if duration_minutes == 0 {
            return Err(DomainError::InvalidSlot {
                reason: String::from("duration must be greater than zero minutes"),
            });
        }
        Ok(Self {
            date,
            time,
            duration_minutes,
        })
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns the instant the interview starts.
    #[must_use]
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Returns the instant the interview ends.
    #[must_use]
    pub fn end(&self) -> NaiveDateTime {
        self.start() + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Returns the signed time left until the slot starts.
    ///
    /// Negative once the slot has started.
    #[must_use]
    pub fn time_remaining(&self, now: NaiveDateTime) -> Duration {
        self.start().signed_duration_since(now)
    }

    /// Returns the whole hours left until the slot starts, truncated toward zero.
    #[must_use]
    pub fn hours_remaining(&self, now: NaiveDateTime) -> i64 {
        self.time_remaining(now).num_hours()
    }

    /// Returns the calendar days between `today` and the slot's date.
    #[must_use]
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        self.date.signed_duration_since(today).num_days()
    }

    /// Returns true if the slot starts strictly after `now`.
    #[must_use]
    pub fn is_future(&self, now: NaiveDateTime) -> bool {
        self.start() > now
    }

    /// Returns the human-readable form shown to applicants.
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} at {} ({} min)",
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.duration_minutes
        )
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}
