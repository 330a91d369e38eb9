//! Risk signal detector.
//!
//! Runs a fixed, ordered list of checks over the extracted fields (and, for
//! one fallback, the raw text). Each check emits at most one signal.

pub mod checks;
pub mod keywords;

pub use checks::signal_ids;

use crate::models::{FieldMap, Signal};
use crate::pipeline_config::AnalysisConfig;

/// One detector rule. Returns `None` when the rule does not apply.
pub type SignalCheck = fn(&FieldMap, &str, &AnalysisConfig) -> Option<Signal>;

/// Checks in emission order.
pub const SIGNAL_CHECKS: &[(&str, SignalCheck)] = &[
    ("revoke_path", checks::check_revoke_path_missing),
    ("third_party", checks::check_third_party_present),
    ("retention", checks::check_retention),
    ("purpose_marketing", checks::check_purpose_marketing),
    ("vague_third_party", checks::check_vague_third_party),
    ("over_collection", checks::check_over_collection),
];

/// Run every check in order and collect the signals that fire.
pub fn detect_signals(fields: &FieldMap, text: &str, config: &AnalysisConfig) -> Vec<Signal> {
    let signals: Vec<Signal> = SIGNAL_CHECKS
        .iter()
        .filter_map(|(name, check)| {
            let signal = check(fields, text, config)?;
            tracing::debug!(check = *name, signal_id = %signal.signal_id, "Signal raised");
            Some(signal)
        })
        .collect();

    tracing::debug!(
        count = signals.len(),
        high = signals.iter().filter(|s| s.is_high()).count(),
        "Signal detection complete"
    );

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::structuring::extract_fields;

    fn detect(text: &str) -> Vec<Signal> {
        let config = AnalysisConfig::default();
        let fields = extract_fields(text, &config);
        detect_signals(&fields, text, &config)
    }

    fn ids(signals: &[Signal]) -> Vec<&str> {
        signals.iter().map(|s| s.signal_id.as_str()).collect()
    }

    #[test]
    fn high_risk_document_emits_in_check_order() {
        let text = "개인정보 수집 동의\n\
                    수집항목: 주민등록번호, 계좌번호\n\
                    이용 목적: 금융서비스, 마케팅\n\
                    보유기간: 영구 보관\n\
                    제3자 제공: 관계사 등 제3자에게 제공\n";
        let signals = detect(text);
        assert_eq!(
            ids(&signals),
            vec![
                "revoke_path_missing",
                "third_party_present",
                "retention_long",
                "purpose_expanded_to_marketing",
                "vague_third_party_language",
                "over_collection_risk",
            ]
        );
    }

    #[test]
    fn clean_document_has_no_signals() {
        let text = "수집항목: 이름, 이메일\n\
                    이용 목적: 서비스 제공\n\
                    보유기간: 1년\n\
                    동의 철회: 고객센터 1588-0000\n";
        assert!(detect(text).is_empty());
    }

    #[test]
    fn empty_fields_raise_missing_signals_only() {
        let signals = detect("");
        assert_eq!(ids(&signals), vec!["revoke_path_missing", "retention_missing"]);
    }

    #[test]
    fn every_signal_carries_evidence() {
        let text = "제3자 제공: 제휴 업체\n보유기간: 목적 달성 시 파기\n";
        for signal in detect(text) {
            assert!(!signal.evidence.is_empty(), "{} has no evidence", signal.signal_id);
            assert!(signal.evidence.len() <= 2);
        }
    }

    #[test]
    fn signal_ids_unique_per_run() {
        let text = "제3자 제공: 관계사\n보유기간: 5년\n";
        let signals = detect(text);
        let mut seen = std::collections::HashSet::new();
        assert!(signals.iter().all(|s| seen.insert(s.signal_id.clone())));
    }
}
