// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

//! Service boundary for embassy interview scheduling.
//!
//! Callers talk to the services in [`services`]. Every mutating operation
//! returns an [`OperationResult`]; guard failures come back as an
//! [`ErrorKind`] and message rather than as panics or raw domain errors.

mod clock;
mod config;
mod context;
mod error;
mod notifier;
mod result;
pub mod services;

#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_policy_registry, parse_policy_table, render_policy_table};
pub use context::ServiceContext;
pub use error::{
    ApiError, ErrorKind, ServiceError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use notifier::{BroadcastNotifier, Notifier, NotifyError};
pub use result::{OperationResult, ResponseReport, Transition};
pub use services::{
    AssignmentService, CancellationService, CompletionService, ConfirmationService,
    ReschedulingService, ResponseProcessingService, ValidationService,
};
