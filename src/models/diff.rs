use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ChangeType;
use super::field::{Evidence, FieldValue};
use super::signal::Signal;

/// One field-level difference between two analyses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffChange {
    pub field: String,
    pub change_type: ChangeType,
    pub old_value: Option<FieldValue>,
    pub new_value: Option<FieldValue>,
    pub evidence_a: Vec<Evidence>,
    pub evidence_b: Vec<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub diff_id: Uuid,
    pub receipt_a_id: Option<Uuid>,
    pub receipt_b_id: Option<Uuid>,
    /// Sorted by field name.
    pub changes: Vec<DiffChange>,
    pub new_signals: Vec<Signal>,
    pub resolved_signals: Vec<Signal>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.new_signals.is_empty() && self.resolved_signals.is_empty()
    }
}
