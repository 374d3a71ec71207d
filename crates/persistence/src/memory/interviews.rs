// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{next_store_id, read, write};
use crate::error::PersistenceError;
use crate::repository::InterviewRepository;
use chrono::{Duration, NaiveDate};
use embassy_interview_domain::{
    ApplicationId, EmbassyId, Interview, InterviewId, InterviewState,
};
use std::collections::BTreeMap;
use std::sync::RwLock;
use tracing::debug;

const STORE: &str = "interview";

/// Interview store with optimistic version checks.
#[derive(Debug)]
pub struct InMemoryInterviewRepository {
    store_id: u64,
    interviews: RwLock<BTreeMap<InterviewId, Interview>>,
}

impl InMemoryInterviewRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store_id: next_store_id(),
            interviews: RwLock::new(BTreeMap::new()),
        }
    }

    fn filtered<F>(&self, keep: F) -> Result<Vec<Interview>, PersistenceError>
    where
        F: Fn(&Interview) -> bool,
    {
        let interviews = read(&self.interviews, STORE)?;
        Ok(interviews.values().filter(|i| keep(i)).cloned().collect())
    }
}

impl Default for InMemoryInterviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewRepository for InMemoryInterviewRepository {
    fn save(&self, interview: &Interview) -> Result<Interview, PersistenceError> {
        let mut interviews = write(&self.interviews, STORE)?;
        let stored_version: u64 = interviews.get(interview.id()).map_or(0, Interview::version);
        if stored_version != interview.version() {
            debug!(
                store_id = self.store_id,
                interview_id = %interview.id(),
                loaded = interview.version(),
                stored = stored_version,
                "Rejected stale interview save"
            );
            return Err(PersistenceError::ConcurrentModification {
                interview_id: interview.id().clone(),
                expected: interview.version(),
                found: stored_version,
            });
        }

        let saved: Interview = interview.clone().with_version(stored_version + 1);
        interviews.insert(saved.id().clone(), saved.clone());
        debug!(
            store_id = self.store_id,
            interview_id = %saved.id(),
            state = %saved.state(),
            version = saved.version(),
            "Saved interview"
        );
        Ok(saved)
    }

    fn find_by_id(&self, id: &InterviewId) -> Result<Option<Interview>, PersistenceError> {
        let interviews = read(&self.interviews, STORE)?;
        let found: Option<Interview> = interviews.get(id).cloned();
        debug!(
            store_id = self.store_id,
            interview_id = %id,
            found = found.is_some(),
            "Looked up interview"
        );
        Ok(found)
    }

    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<Interview>, PersistenceError> {
        self.filtered(|i| i.application_id() == application_id)
    }

    fn find_by_embassy(&self, embassy_id: &EmbassyId) -> Result<Vec<Interview>, PersistenceError> {
        self.filtered(|i| i.embassy_id() == embassy_id)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Interview>, PersistenceError> {
        self.filtered(|i| i.current_slot().is_some_and(|s| s.date() == date))
    }

    fn list_pending(&self) -> Result<Vec<Interview>, PersistenceError> {
        self.filtered(|i| {
            matches!(
                i.state(),
                InterviewState::PendingAssignment | InterviewState::OptionsOffered
            )
        })
    }

    fn list_upcoming(
        &self,
        today: NaiveDate,
        days: u32,
    ) -> Result<Vec<Interview>, PersistenceError> {
        let horizon: NaiveDate = today + Duration::days(i64::from(days));
        let mut upcoming: Vec<Interview> = self.filtered(|i| {
            i.is_active()
                && i
                    .current_slot()
                    .is_some_and(|s| s.date() >= today && s.date() <= horizon)
        })?;
        upcoming.sort_by_key(|i| i.current_slot().map(|s| s.start()));
        Ok(upcoming)
    }

    fn delete(&self, id: &InterviewId) -> Result<bool, PersistenceError> {
        let mut interviews = write(&self.interviews, STORE)?;
        let removed: bool = interviews.remove(id).is_some();
        debug!(
            store_id = self.store_id,
            interview_id = %id,
            removed,
            "Deleted interview"
        );
        Ok(removed)
    }
}
