// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{read, write};
use crate::error::PersistenceError;
use crate::repository::AuditLog;
use embassy_interview_audit::AuditEvent;
use embassy_interview_domain::ApplicationId;
use std::sync::RwLock;
use tracing::debug;

const STORE: &str = "audit";

#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    events: RwLock<Vec<AuditEvent>>,
}

impl InMemoryAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, event: &AuditEvent) -> Result<(), PersistenceError> {
        let mut events = write(&self.events, STORE)?;
        events.push(event.clone());
        debug!(
            application_id = %event.application_id,
            action = %event.action.name,
            sequence = events.len(),
            "Appended audit event"
        );
        Ok(())
    }

    fn list_for_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<Vec<AuditEvent>, PersistenceError> {
        let events = read(&self.events, STORE)?;
        Ok(events
            .iter()
            .filter(|e| &e.application_id == application_id)
            .cloned()
            .collect())
    }
}
