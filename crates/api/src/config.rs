// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Policy table configuration.
//!
//! ```json
//! {
//!   "default": {"max_reschedules": 2, "min_cancellation_hours": 24, "min_lead_days": 7},
//!   "embassies": [
//!     {"embassy_id": "USA", "max_reschedules": 2, "min_cancellation_hours": 24, "min_lead_days": 7}
//!   ]
//! }
//! ```
//!
//! A missing `default` falls back to the conservative built-in limits.

use crate::error::ApiError;
use embassy_interview_domain::{PolicyRegistry, PolicyTable};
use std::path::Path;
use tracing::info;

/// Parses a JSON policy table into a registry.
///
/// # Errors
///
/// Returns `ApiError::ConfigParse` for malformed JSON and
/// `ApiError::InvalidPolicy` for duplicate or empty embassy entries.
pub fn parse_policy_table(json: &str) -> Result<PolicyRegistry, ApiError> {
    let table: PolicyTable = serde_json::from_str(json)?;
    PolicyRegistry::try_from(table).map_err(ApiError::InvalidPolicy)
}

/// Reads and parses the policy table at `path`.
///
/// # Errors
///
/// Returns `ApiError::ConfigRead` if the file cannot be read, otherwise
/// as [`parse_policy_table`].
pub fn load_policy_registry(path: &Path) -> Result<PolicyRegistry, ApiError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| ApiError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let registry: PolicyRegistry = parse_policy_table(&json)?;
    info!(
        path = %path.display(),
        embassies = registry.policies().count(),
        "Loaded embassy policy table"
    );
    Ok(registry)
}

/// Renders a registry as a pretty-printed policy table.
///
/// # Errors
///
/// Returns `ApiError::ConfigParse` if serialization fails.
pub fn render_policy_table(registry: &PolicyRegistry) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&registry.to_table())?)
}
