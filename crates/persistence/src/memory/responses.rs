// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{next_store_id, read, write};
use crate::error::PersistenceError;
use crate::repository::EmbassyResponseRepository;
use embassy_interview_domain::{ApplicationId, EmbassyResponse};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

const STORE: &str = "embassy response";

#[derive(Debug)]
pub struct InMemoryEmbassyResponseRepository {
    store_id: u64,
    responses: RwLock<HashMap<ApplicationId, Vec<EmbassyResponse>>>,
}

impl InMemoryEmbassyResponseRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store_id: next_store_id(),
            responses: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryEmbassyResponseRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbassyResponseRepository for InMemoryEmbassyResponseRepository {
    fn save(&self, response: &EmbassyResponse) -> Result<(), PersistenceError> {
        let mut responses = write(&self.responses, STORE)?;
        responses
            .entry(response.application_id.clone())
            .or_default()
            .push(response.clone());
        debug!(
            store_id = self.store_id,
            application_id = %response.application_id,
            kind = ?response.kind(),
            "Saved embassy response"
        );
        Ok(())
    }

    fn find_by_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<EmbassyResponse>, PersistenceError> {
        let responses = read(&self.responses, STORE)?;
        Ok(responses.get(application_id).cloned().unwrap_or_default())
    }

    fn find_latest(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Option<EmbassyResponse>, PersistenceError> {
        let responses = read(&self.responses, STORE)?;
        // max_by_key keeps the last of equal keys, so ties go to the later save.
        Ok(responses
            .get(application_id)
            .and_then(|all| all.iter().max_by_key(|r| r.received_at))
            .cloned())
    }
}
