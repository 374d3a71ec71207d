// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-application interview aggregate.
//!
//! ## Invariants
//!
//! - At most one interview is current at a time
//! - `history` is append-only; archived interviews are never mutated again

use crate::error::DomainError;
use crate::interview::Interview;
use crate::types::{ApplicationId, EmbassyId, InterviewId};
use serde::{Deserialize, Serialize};

/// Owns the current interview of one application and the interviews it
/// superseded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewManager {
    application_id: ApplicationId,
    embassy_id: EmbassyId,
    current: Option<Interview>,
    history: Vec<Interview>,
    /// Optimistic concurrency version, maintained by repositories.
    #[serde(default)]
    version: u64,
}

impl InterviewManager {
    #[must_use]
    pub const fn new(application_id: ApplicationId, embassy_id: EmbassyId) -> Self {
        Self {
            application_id,
            embassy_id,
            current: None,
            history: Vec::new(),
            version: 0,
        }
    }

    #[must_use]
    pub const fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    #[must_use]
    pub const fn embassy_id(&self) -> &EmbassyId {
        &self.embassy_id
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Interview> {
        self.current.as_ref()
    }

    /// Superseded interviews, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Interview] {
        &self.history
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns a copy stamped with a storage version. For repository
    /// adapters only.
    #[must_use]
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Returns the identifier the next installed interview should use.
    #[must_use]
    pub fn next_interview_id(&self) -> InterviewId {
        let installed: usize = self.history.len() + usize::from(self.current.is_some());
        InterviewId::for_application(&self.application_id, installed + 1)
    }

    /// Returns true unless there is no current interview or it is terminal.
    #[must_use]
    pub fn has_active_interview(&self) -> bool {
        self.current.as_ref().is_some_and(Interview::is_active)
    }

    /// Moves the current interview, if any, to the history.
    ///
    /// Used by response processing when a new embassy decision supersedes
    /// the current interview.
    #[must_use]
    pub fn archive_current(&self) -> Self {
        let mut next: Self = self.clone();
        if let Some(current) = next.current.take() {
            next.history.push(current);
        }
        next
    }

    /// Installs `interview` as the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot is still occupied (archive first) or
    /// the interview belongs to another application.
    pub fn install(&self, interview: Interview) -> Result<Self, DomainError> {
        self.ensure_owned(&interview)?;
        if let Some(current) = &self.current {
            return Err(DomainError::InvalidTransition {
                from: current.state(),
                operation: "install a new interview before archiving the current one",
            });
        }
        let mut next: Self = self.clone();
        next.current = Some(interview);
        Ok(next)
    }

    /// Replaces the current interview with a newer revision of itself.
    ///
    /// Returns the manager unchanged when `interview` is not the current
    /// one, or is older than the copy already held.
    #[must_use]
    pub fn refresh_current(&self, interview: &Interview) -> Self {
        let mut next: Self = self.clone();
        if let Some(current) = next.current.as_mut()
            && current.id() == interview.id()
            && interview.version() >= current.version()
        {
            *current = interview.clone();
        }
        next
    }

    fn ensure_owned(&self, interview: &Interview) -> Result<(), DomainError> {
        if interview.application_id() != &self.application_id {
            return Err(DomainError::ApplicationMismatch {
                expected: self.application_id.clone(),
                found: interview.application_id().clone(),
            });
        }
        Ok(())
    }
}
