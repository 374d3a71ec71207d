// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Identifies the visa application that owns an interview.
///
/// The application itself lives in the review subsystem; this core only
/// carries its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Creates a new application identifier.
    ///
    /// Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies an embassy (partner) whose policy governs an interview.
///
/// Embassy codes are normalized to uppercase so `"usa"` and `"USA"` resolve
/// to the same policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EmbassyId(String);

impl EmbassyId {
    /// Creates a new embassy identifier, normalized to uppercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }

    /// Returns the normalized embassy code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<String> for EmbassyId {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<EmbassyId> for String {
    fn from(value: EmbassyId) -> Self {
        value.0
    }
}

impl std::fmt::Display for EmbassyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one interview instance.
///
/// An application may accumulate several interviews over time when the
/// embassy issues new responses; each gets its own identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(String);

impl InterviewId {
    /// Creates a new interview identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Derives the identifier of the `sequence`-th interview of an application.
    #[must_use]
    pub fn for_application(application_id: &ApplicationId, sequence: usize) -> Self {
        Self(format!("{}-{sequence}", application_id.value()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InterviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a slot offer published by an embassy.
///
/// Offer identifiers are global: several interviews may reference the
/// same offer and compete for its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfferId(String);

impl OfferId {
    /// Creates a new offer identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
