// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-embassy scheduling policy.
//!
//! Each embassy decides how many times an applicant may reschedule, how
//! much notice a cancellation needs, and how far ahead an interview must
//! be booked. The registry is an injected value with an explicit default;
//! unknown embassies never fail a lookup.

use crate::error::DomainError;
use crate::types::EmbassyId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The numeric limits of a policy, without the embassy it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLimits {
    /// Maximum number of reschedules per interview.
    pub max_reschedules: u32,
    /// Minimum hours of notice required to cancel.
    pub min_cancellation_hours: u32,
    /// Minimum days between today and a newly chosen date.
    pub min_lead_days: u32,
}

impl PolicyLimits {
    /// The conservative limits applied to embassies with no explicit entry.
    pub const CONSERVATIVE: Self = Self {
        max_reschedules: 2,
        min_cancellation_hours: 24,
        min_lead_days: 7,
    };
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self::CONSERVATIVE
    }
}

/// An embassy's scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbassyPolicy {
    embassy_id: EmbassyId,
    #[serde(flatten)]
    limits: PolicyLimits,
}

impl EmbassyPolicy {
    #[must_use]
    pub const fn new(embassy_id: EmbassyId, limits: PolicyLimits) -> Self {
        Self { embassy_id, limits }
    }

    #[must_use]
    pub const fn embassy_id(&self) -> &EmbassyId {
        &self.embassy_id
    }

    #[must_use]
    pub const fn limits(&self) -> PolicyLimits {
        self.limits
    }

    #[must_use]
    pub const fn max_reschedules(&self) -> u32 {
        self.limits.max_reschedules
    }

    #[must_use]
    pub const fn min_cancellation_hours(&self) -> u32 {
        self.limits.min_cancellation_hours
    }

    #[must_use]
    pub const fn min_lead_days(&self) -> u32 {
        self.limits.min_lead_days
    }
}

/// Serializable form of a policy table, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PolicyTable {
    /// Limits for embassies without an entry. Falls back to
    /// `PolicyLimits::CONSERVATIVE` when absent.
    #[serde(default)]
    pub default: Option<PolicyLimits>,
    /// Explicit per-embassy entries.
    #[serde(default)]
    pub embassies: Vec<EmbassyPolicy>,
}

/// Lookup table of embassy policies with a default fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRegistry {
    policies: BTreeMap<EmbassyId, EmbassyPolicy>,
    default: PolicyLimits,
}

impl PolicyRegistry {
    /// Creates an empty registry that answers every lookup with `default`.
    #[must_use]
    pub const fn new(default: PolicyLimits) -> Self {
        Self {
            policies: BTreeMap::new(),
            default,
        }
    }

    /// Returns the registry of embassies known out of the box.
    #[must_use]
    pub fn builtin() -> Self {
        let entries: [(&str, u32, u32, u32); 4] = [
            ("USA", 2, 24, 7),
            ("CAN", 3, 48, 14),
            ("ESP", 1, 72, 10),
            ("GBR", 2, 24, 5),
        ];

        entries.into_iter().fold(
            Self::new(PolicyLimits::CONSERVATIVE),
            |registry, (code, max_reschedules, min_cancellation_hours, min_lead_days)| {
                registry.with_policy(EmbassyPolicy::new(
                    EmbassyId::new(code),
                    PolicyLimits {
                        max_reschedules,
                        min_cancellation_hours,
                        min_lead_days,
                    },
                ))
            },
        )
    }

    /// Returns a registry with `policy` added, replacing any existing entry
    /// for the same embassy.
    #[must_use]
    pub fn with_policy(mut self, policy: EmbassyPolicy) -> Self {
        self.policies.insert(policy.embassy_id.clone(), policy);
        self
    }

    /// Returns the policy for `embassy_id`, or the default limits bound to
    /// that embassy when no explicit entry exists.
    #[must_use]
    pub fn policy_for(&self, embassy_id: &EmbassyId) -> EmbassyPolicy {
        self.policies
            .get(embassy_id)
            .cloned()
            .unwrap_or_else(|| EmbassyPolicy::new(embassy_id.clone(), self.default))
    }

    /// Returns true if the embassy has an explicit entry.
    #[must_use]
    pub fn contains(&self, embassy_id: &EmbassyId) -> bool {
        self.policies.contains_key(embassy_id)
    }

    #[must_use]
    pub const fn default_limits(&self) -> PolicyLimits {
        self.default
    }

    /// Iterates over the explicit entries in embassy order.
    pub fn policies(&self) -> impl Iterator<Item = &EmbassyPolicy> {
        self.policies.values()
    }

    /// Converts the registry back into its serializable table form.
    #[must_use]
    pub fn to_table(&self) -> PolicyTable {
        PolicyTable {
            default: Some(self.default),
            embassies: self.policies.values().cloned().collect(),
        }
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<PolicyTable> for PolicyRegistry {
    type Error = DomainError;

    /// Builds a registry from configuration.
    ///
    /// Duplicate embassy entries are rejected rather than silently merged.
    fn try_from(table: PolicyTable) -> Result<Self, Self::Error> {
        let mut registry: Self = Self::new(table.default.unwrap_or_default());
        for policy in table.embassies {
            if policy.embassy_id.value().is_empty() {
                return Err(DomainError::InvalidPolicy {
                    reason: String::from("embassy_id cannot be empty"),
                });
            }
            if registry.contains(&policy.embassy_id) {
                return Err(DomainError::InvalidPolicy {
                    reason: format!("duplicate entry for embassy '{}'", policy.embassy_id),
                });
            }
            registry = registry.with_policy(policy);
        }
        Ok(registry)
    }
}
