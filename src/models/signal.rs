use serde::{Deserialize, Serialize};

use super::enums::Severity;
use super::field::Evidence;

/// A risk signal produced by deterministic rules.
///
/// Always carries at least one evidence entry; when the finding is an
/// absence, the evidence is a synthetic note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub signal_id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
}

impl Signal {
    pub fn is_high(&self) -> bool {
        self.severity == Severity::High
    }
}
