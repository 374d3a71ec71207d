// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound notification delivery.
//!
//! Notifications are informational only. A failed delivery is logged by
//! the caller and never undoes the transition that produced it.

use embassy_interview_audit::InterviewEvent;
use thiserror::Error;
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of notifications to buffer in the broadcast channel.
/// Subscribers that fall further behind lose the oldest ones.
const EVENT_BUFFER_SIZE: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Hands notifications to a delivery channel (email, SMS, a queue).
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::Delivery` if the channel rejected it.
    fn notify(&self, event: &InterviewEvent) -> Result<(), NotifyError>;
}

/// Fans notifications out to in-process subscribers over
/// `tokio::sync::broadcast`.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<InterviewEvent>,
}

impl BroadcastNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Returns a receiver for all future notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<InterviewEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for BroadcastNotifier {
    fn notify(&self, event: &InterviewEvent) -> Result<(), NotifyError> {
        match self.tx.send(event.clone()) {
            Ok(receivers) => {
                debug!(kind = %event.kind, interview_id = %event.interview_id, receivers, "Published notification");
            }
            Err(_) => {
                // No subscribers, which is fine
                debug!(kind = %event.kind, interview_id = %event.interview_id, "No subscribers for notification");
            }
        }
        Ok(())
    }
}
