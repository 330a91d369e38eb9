//! Field-level and signal-level comparison of two analyses.

use std::collections::{BTreeSet, HashSet};

use uuid::Uuid;

use crate::models::{ChangeType, DiffChange, DiffResult, FieldMap, Signal};

/// Compare side A against side B.
///
/// Changes follow the sorted union of field names. List values compare as
/// multisets, scalars as strings. Signals compare by `signal_id` only.
pub fn diff_extract_results(
    fields_a: &FieldMap,
    fields_b: &FieldMap,
    signals_a: &[Signal],
    signals_b: &[Signal],
    receipt_a_id: Option<Uuid>,
    receipt_b_id: Option<Uuid>,
) -> DiffResult {
    let names: BTreeSet<&str> = fields_a.keys().chain(fields_b.keys()).collect();

    let changes: Vec<DiffChange> = names
        .into_iter()
        .filter_map(|name| match (fields_a.get(name), fields_b.get(name)) {
            (Some(a), None) => Some(DiffChange {
                field: name.to_string(),
                change_type: ChangeType::Removed,
                old_value: Some(a.value.clone()),
                new_value: None,
                evidence_a: a.evidence.clone(),
                evidence_b: Vec::new(),
            }),
            (None, Some(b)) => Some(DiffChange {
                field: name.to_string(),
                change_type: ChangeType::Added,
                old_value: None,
                new_value: Some(b.value.clone()),
                evidence_a: Vec::new(),
                evidence_b: b.evidence.clone(),
            }),
            (Some(a), Some(b)) if !a.value.equivalent(&b.value) => Some(DiffChange {
                field: name.to_string(),
                change_type: ChangeType::Modified,
                old_value: Some(a.value.clone()),
                new_value: Some(b.value.clone()),
                evidence_a: a.evidence.clone(),
                evidence_b: b.evidence.clone(),
            }),
            _ => None,
        })
        .collect();

    let ids_a: HashSet<&str> = signals_a.iter().map(|s| s.signal_id.as_str()).collect();
    let ids_b: HashSet<&str> = signals_b.iter().map(|s| s.signal_id.as_str()).collect();

    let new_signals: Vec<Signal> = signals_b
        .iter()
        .filter(|s| !ids_a.contains(s.signal_id.as_str()))
        .cloned()
        .collect();
    let resolved_signals: Vec<Signal> = signals_a
        .iter()
        .filter(|s| !ids_b.contains(s.signal_id.as_str()))
        .cloned()
        .collect();

    let result = DiffResult {
        diff_id: Uuid::new_v4(),
        receipt_a_id,
        receipt_b_id,
        changes,
        new_signals,
        resolved_signals,
    };

    tracing::debug!(
        diff_id = %result.diff_id,
        changes = result.changes.len(),
        new_signals = result.new_signals.len(),
        resolved_signals = result.resolved_signals.len(),
        "Diff computed"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Evidence, ExtractedField, FieldValue, Severity};

    fn list(items: &[&str]) -> ExtractedField {
        ExtractedField::new(
            FieldValue::List(items.iter().map(|s| s.to_string()).collect()),
            vec![Evidence::at_line("list quote", 1)],
        )
    }

    fn scalar(value: &str) -> ExtractedField {
        ExtractedField::new(
            FieldValue::Scalar(value.into()),
            vec![Evidence::at_line(value, 2)],
        )
    }

    fn signal(id: &str) -> Signal {
        Signal {
            signal_id: id.into(),
            severity: Severity::High,
            title: id.into(),
            description: String::new(),
            evidence: vec![Evidence::at_line("q", 1)],
        }
    }

    fn map(entries: Vec<(&str, ExtractedField)>) -> FieldMap {
        entries.into_iter().collect()
    }

    fn diff(a: &FieldMap, b: &FieldMap) -> DiffResult {
        diff_extract_results(a, b, &[], &[], None, None)
    }

    #[test]
    fn identical_sides_no_changes() {
        let fields = map(vec![
            ("data_collected", list(&["이름", "이메일"])),
            ("retention", scalar("1년")),
        ]);
        let signals = vec![signal("revoke_path_missing")];
        let result = diff_extract_results(&fields, &fields, &signals, &signals, None, None);
        assert!(result.changes.is_empty());
        assert!(result.new_signals.is_empty());
        assert!(result.resolved_signals.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn added_field() {
        let a = map(vec![("retention", scalar("1년"))]);
        let b = map(vec![
            ("retention", scalar("1년")),
            ("overseas_transfer", scalar("미국 AWS")),
        ]);
        let result = diff(&a, &b);
        assert_eq!(result.changes.len(), 1);
        let change = &result.changes[0];
        assert_eq!(change.field, "overseas_transfer");
        assert_eq!(change.change_type, ChangeType::Added);
        assert_eq!(change.old_value, None);
        assert_eq!(change.new_value, Some(FieldValue::Scalar("미국 AWS".into())));
        assert!(change.evidence_a.is_empty());
        assert_eq!(change.evidence_b.len(), 1);
    }

    #[test]
    fn removed_field() {
        let a = map(vec![("revoke_path", scalar("고객센터"))]);
        let result = diff(&a, &FieldMap::new());
        let change = &result.changes[0];
        assert_eq!(change.change_type, ChangeType::Removed);
        assert_eq!(change.old_value, Some(FieldValue::Scalar("고객센터".into())));
        assert_eq!(change.new_value, None);
        assert!(change.evidence_b.is_empty());
    }

    #[test]
    fn modified_field_carries_both_evidence() {
        let a = map(vec![("retention", scalar("1년"))]);
        let b = map(vec![("retention", scalar("5년"))]);
        let result = diff(&a, &b);
        let change = &result.changes[0];
        assert_eq!(change.change_type, ChangeType::Modified);
        assert_eq!(change.evidence_a[0].quote, "1년");
        assert_eq!(change.evidence_b[0].quote, "5년");
    }

    #[test]
    fn list_permutation_unchanged() {
        let a = map(vec![("purposes", list(&["a", "b"]))]);
        let b = map(vec![("purposes", list(&["b", "a"]))]);
        assert!(diff(&a, &b).changes.is_empty());
    }

    #[test]
    fn list_multiset_difference_is_modified() {
        let a = map(vec![("purposes", list(&["a", "a", "b"]))]);
        let b = map(vec![("purposes", list(&["a", "b", "b"]))]);
        assert_eq!(diff(&a, &b).changes.len(), 1);
    }

    #[test]
    fn changes_sorted_by_field_name() {
        let a = map(vec![("third_party", list(&["A사"])), ("purposes", list(&["x1"]))]);
        let b = map(vec![("data_collected", list(&["이름"]))]);
        let fields: Vec<_> = diff(&a, &b)
            .changes
            .iter()
            .map(|c| c.field.clone())
            .collect();
        assert_eq!(fields, vec!["data_collected", "purposes", "third_party"]);
    }

    #[test]
    fn signal_deltas_by_id() {
        let a = vec![signal("revoke_path_missing"), signal("retention_missing")];
        let b = vec![signal("retention_missing"), signal("third_party_present")];
        let result =
            diff_extract_results(&FieldMap::new(), &FieldMap::new(), &a, &b, None, None);
        assert_eq!(result.new_signals.len(), 1);
        assert_eq!(result.new_signals[0].signal_id, "third_party_present");
        assert_eq!(result.resolved_signals.len(), 1);
        assert_eq!(result.resolved_signals[0].signal_id, "revoke_path_missing");
    }

    #[test]
    fn receipt_ids_carried_through() {
        let id = Uuid::new_v4();
        let result = diff_extract_results(
            &FieldMap::new(),
            &FieldMap::new(),
            &[],
            &[],
            Some(id),
            None,
        );
        assert_eq!(result.receipt_a_id, Some(id));
        assert_eq!(result.receipt_b_id, None);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["receipt_b_id"].is_null());
    }
}
