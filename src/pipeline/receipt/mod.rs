//! Receipt builder.
//!
//! Turns extracted fields and detected signals into the user-facing receipt:
//! seven-line summary, suggested actions, over-collection flag, and transfer
//! records.

pub mod actions;
pub mod entity;
pub mod hash;
pub mod summary;
pub mod transfers;

pub use actions::suggest_actions;
pub use entity::detect_entity;
pub use hash::content_hash;
pub use summary::{build_seven_lines, field_summary, risk_summary};
pub use transfers::{assemble_data_items, build_transfers};

use chrono::Utc;
use uuid::Uuid;

use crate::models::{DocumentType, FieldMap, Receipt, Signal};
use crate::pipeline::signals::signal_ids;
use crate::pipeline::structuring::field_names;
use crate::pipeline_config::AnalysisConfig;

/// Assemble a receipt with a fresh id and the current UTC time.
pub fn build_receipt(
    raw_text: &str,
    source_type: &str,
    document_type: DocumentType,
    fields: &FieldMap,
    signals: &[Signal],
    config: &AnalysisConfig,
) -> Receipt {
    let data_items = assemble_data_items(fields);
    let transfers = build_transfers(fields, &data_items);

    let over_collection_reasons: Vec<String> = signals
        .iter()
        .filter(|s| s.signal_id == signal_ids::OVER_COLLECTION_RISK)
        .map(|s| s.title.clone())
        .collect();

    let receipt = Receipt {
        receipt_id: Uuid::new_v4(),
        created_at: Utc::now(),
        source_type: source_type.to_string(),
        document_type,
        seven_lines: build_seven_lines(fields, signals, raw_text, config),
        signals: signals.to_vec(),
        fields: fields.clone(),
        content_hash: content_hash(raw_text),
        actions: suggest_actions(signals),
        required_items: fields.items_of(field_names::REQUIRED_ITEMS),
        optional_items: fields.items_of(field_names::OPTIONAL_ITEMS),
        over_collection: !over_collection_reasons.is_empty(),
        over_collection_reasons,
        transfers,
    };

    tracing::debug!(
        receipt_id = %receipt.receipt_id,
        actions = receipt.actions.len(),
        transfers = receipt.transfers.len(),
        over_collection = receipt.over_collection,
        "Receipt built"
    );

    receipt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionType, Evidence, ExtractedField, FieldValue, Severity};

    fn list(items: &[&str]) -> ExtractedField {
        ExtractedField::new(
            FieldValue::List(items.iter().map(|s| s.to_string()).collect()),
            vec![Evidence::at_line("q", 1)],
        )
    }

    fn over_collection_signal() -> Signal {
        Signal {
            signal_id: "over_collection_risk".into(),
            severity: Severity::High,
            title: "과잉 수집 의심".into(),
            description: String::new(),
            evidence: vec![Evidence::at_line("q", 1)],
        }
    }

    fn build(fields: &FieldMap, signals: &[Signal]) -> Receipt {
        build_receipt(
            "raw",
            "email",
            DocumentType::Consent,
            fields,
            signals,
            &AnalysisConfig::default(),
        )
    }

    #[test]
    fn receipt_carries_inputs_verbatim() {
        let fields: FieldMap = vec![("data_collected", list(&["이름"]))].into_iter().collect();
        let receipt = build(&fields, &[]);
        assert_eq!(receipt.source_type, "email");
        assert_eq!(receipt.document_type, DocumentType::Consent);
        assert_eq!(receipt.fields, fields);
        assert!(receipt.signals.is_empty());
        assert_eq!(receipt.content_hash, content_hash("raw"));
    }

    #[test]
    fn over_collection_follows_signal() {
        let receipt = build(&FieldMap::new(), &[over_collection_signal()]);
        assert!(receipt.over_collection);
        assert_eq!(receipt.over_collection_reasons, vec!["과잉 수집 의심".to_string()]);

        let receipt = build(&FieldMap::new(), &[]);
        assert!(!receipt.over_collection);
        assert!(receipt.over_collection_reasons.is_empty());
    }

    #[test]
    fn required_and_optional_items_copied() {
        let fields: FieldMap = vec![
            ("required_items", list(&["이름"])),
            ("optional_items", list(&["주소"])),
            ("third_party", list(&["A사"])),
        ]
        .into_iter()
        .collect();
        let receipt = build(&fields, &[]);
        assert_eq!(receipt.required_items, vec!["이름".to_string()]);
        assert_eq!(receipt.optional_items, vec!["주소".to_string()]);
        assert_eq!(
            receipt.transfers[0].data_items,
            vec!["이름".to_string(), "(선택) 주소".to_string()]
        );
    }

    #[test]
    fn base_actions_present() {
        let receipt = build(&FieldMap::new(), &[]);
        let types: Vec<_> = receipt.actions.iter().map(|a| a.action_type).collect();
        assert_eq!(types, vec![ActionType::WithdrawConsent, ActionType::DeleteData]);
    }

    #[test]
    fn identical_input_distinct_ids_same_hash() {
        let a = build(&FieldMap::new(), &[]);
        let b = build(&FieldMap::new(), &[]);
        assert_ne!(a.receipt_id, b.receipt_id);
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn receipt_wire_shape() {
        let receipt = build(&FieldMap::new(), &[]);
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["document_type"], "consent");
        assert!(json["seven_lines"]["where"].is_string());
        assert!(json["receipt_id"].is_string());
        assert!(json["fields"].is_object());
    }
}
