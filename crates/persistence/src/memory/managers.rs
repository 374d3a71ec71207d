// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{next_store_id, read, write};
use crate::error::PersistenceError;
use crate::repository::InterviewManagerRepository;
use embassy_interview_domain::{ApplicationId, InterviewManager};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, info};

const STORE: &str = "interview manager";

#[derive(Debug)]
pub struct InMemoryInterviewManagerRepository {
    store_id: u64,
    managers: RwLock<HashMap<ApplicationId, InterviewManager>>,
}

impl InMemoryInterviewManagerRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store_id: next_store_id(),
            managers: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryInterviewManagerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewManagerRepository for InMemoryInterviewManagerRepository {
    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<InterviewManager>, PersistenceError> {
        let managers = read(&self.managers, STORE)?;
        Ok(managers.get(application_id).cloned())
    }

    fn save(&self, manager: &InterviewManager) -> Result<InterviewManager, PersistenceError> {
        let mut managers = write(&self.managers, STORE)?;
        let Some(existing) = managers.get_mut(manager.application_id()) else {
            return Err(PersistenceError::ManagerNotFound(
                manager.application_id().clone(),
            ));
        };
        if existing.version() != manager.version() {
            debug!(
                store_id = self.store_id,
                application_id = %manager.application_id(),
                loaded = manager.version(),
                stored = existing.version(),
                "Rejected stale interview manager save"
            );
            return Err(PersistenceError::ManagerConflict {
                application_id: manager.application_id().clone(),
                expected: manager.version(),
                found: existing.version(),
            });
        }

        let archived: usize = manager
            .history()
            .len()
            .saturating_sub(existing.history().len());
        let saved: InterviewManager = manager.clone().with_version(existing.version() + 1);
        *existing = saved.clone();

        if archived > 0 {
            info!(
                store_id = self.store_id,
                application_id = %saved.application_id(),
                archived,
                history = saved.history().len(),
                version = saved.version(),
                "Archived interview(s)"
            );
        } else {
            debug!(
                store_id = self.store_id,
                application_id = %saved.application_id(),
                version = saved.version(),
                "Saved interview manager"
            );
        }
        Ok(saved)
    }

    fn create(&self, manager: &InterviewManager) -> Result<InterviewManager, PersistenceError> {
        let mut managers = write(&self.managers, STORE)?;
        if managers.contains_key(manager.application_id()) {
            return Err(PersistenceError::DuplicateManager(
                manager.application_id().clone(),
            ));
        }
        let created: InterviewManager = manager.clone().with_version(1);
        managers.insert(created.application_id().clone(), created.clone());
        debug!(
            store_id = self.store_id,
            application_id = %created.application_id(),
            "Created interview manager"
        );
        Ok(created)
    }
}
