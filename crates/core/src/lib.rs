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

//! Interview state transitions.
//!
//! The public surface is `(interview, command) -> TransitionResult` via
//! [`apply`], and `(manager, response) -> ResponseOutcome` via
//! [`process_response`]. Both are pure; persistence and delivery happen
//! in the layers above.

mod apply;
mod command;
mod error;
mod response;
mod state;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use response::process_response;
pub use state::{ResponseOutcome, TransitionResult};
