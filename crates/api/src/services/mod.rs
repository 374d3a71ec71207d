// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling services.
//!
//! Each service loads the interview, runs the pure transition from the
//! core crate against the embassy's policy and the service clock, then
//! commits: save (version-checked), audit, notify.

mod assignment;
mod cancellation;
mod completion;
mod confirmation;
mod rescheduling;
mod response_processing;
mod validation;

pub use assignment::AssignmentService;
pub use cancellation::CancellationService;
pub use completion::CompletionService;
pub use confirmation::ConfirmationService;
pub use rescheduling::ReschedulingService;
pub use response_processing::ResponseProcessingService;
pub use validation::ValidationService;
