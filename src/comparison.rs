//! Cross-run comparison of policy averages.
//!
//! Collects the run-wide averages of successive runs, keyed by policy
//! name, so callers can compare how the policies fare on the same
//! process set. Re-running a policy replaces its previous entry.

use serde::{Deserialize, Serialize};

use crate::models::RunAverages;
use crate::policies::Policy;

/// One policy's averages within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonEntry {
    /// Policy name (see [`Policy::name`]).
    pub policy: String,
    /// The run's averages.
    pub averages: RunAverages,
}

/// Averages collected across policy runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    entries: Vec<ComparisonEntry>,
}

impl PolicyComparison {
    /// Creates an empty comparison.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a run's averages under the policy's name.
    ///
    /// Any prior entry for the same policy is removed; the refreshed
    /// entry joins the back of the list.
    pub fn record(&mut self, policy: &Policy, averages: RunAverages) {
        self.entries.retain(|e| e.policy != policy.name());
        self.entries.push(ComparisonEntry {
            policy: policy.name().to_string(),
            averages,
        });
    }

    /// The entries, oldest first.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Finds the entry for a policy name.
    pub fn entry_for(&self, policy_name: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.policy == policy_name)
    }

    /// Number of recorded policies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no runs have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
