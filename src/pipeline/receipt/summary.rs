use crate::models::{FieldMap, SevenLines, Severity, Signal};
use crate::pipeline::messages::MessageTemplates;
use crate::pipeline::structuring::field_names;
use crate::pipeline_config::AnalysisConfig;

use super::entity::detect_entity;

/// Join up to `max_items` non-empty values with ", ", appending " 외 N개"
/// for the rest. Falls back when nothing is left.
pub fn field_summary(values: &[String], fallback: &str, max_items: usize) -> String {
    let values: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .collect();
    if values.is_empty() {
        return fallback.to_string();
    }
    let mut summary = values
        .iter()
        .take(max_items)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if values.len() > max_items {
        summary.push_str(&MessageTemplates::more_items(values.len() - max_items));
    }
    summary
}

/// Severity counts plus the first few signal titles.
pub fn risk_summary(signals: &[Signal], max_titles: usize) -> String {
    if signals.is_empty() {
        return MessageTemplates::NO_RISK.to_string();
    }
    let high = signals.iter().filter(|s| s.severity == Severity::High).count();
    let medium = signals
        .iter()
        .filter(|s| s.severity == Severity::Medium)
        .count();
    let titles: Vec<&str> = signals
        .iter()
        .take(max_titles)
        .map(|s| s.title.as_str())
        .collect();
    MessageTemplates::risk_summary(high, medium, &titles)
}

/// Items for the "what" slot: required, else collected, else optional.
pub fn summary_data_items(fields: &FieldMap) -> Vec<String> {
    [
        field_names::REQUIRED_ITEMS,
        field_names::DATA_COLLECTED,
        field_names::OPTIONAL_ITEMS,
    ]
    .iter()
    .map(|name| fields.items_of(name))
    .find(|items| !items.is_empty())
    .unwrap_or_default()
}

pub fn build_seven_lines(
    fields: &FieldMap,
    signals: &[Signal],
    raw_text: &str,
    config: &AnalysisConfig,
) -> SevenLines {
    let max = config.summary_max_items;

    let mut destinations = fields.items_of(field_names::THIRD_PARTY);
    destinations.extend(fields.items_of(field_names::OVERSEAS_TRANSFER));

    SevenLines {
        who: detect_entity(raw_text, config.entity_max_chars),
        what: field_summary(
            &summary_data_items(fields),
            MessageTemplates::WHAT_FALLBACK,
            max,
        ),
        why: field_summary(
            &fields.items_of(field_names::PURPOSES),
            MessageTemplates::WHY_FALLBACK,
            max,
        ),
        when: field_summary(
            &fields.items_of(field_names::RETENTION),
            MessageTemplates::WHEN_FALLBACK,
            max,
        ),
        where_: field_summary(
            &destinations,
            MessageTemplates::WHERE_FALLBACK,
            config.where_max_items,
        ),
        how_to_revoke: field_summary(
            &fields.items_of(field_names::REVOKE_PATH),
            MessageTemplates::REVOKE_FALLBACK,
            max,
        ),
        risk_summary: risk_summary(signals, config.risk_summary_titles),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Evidence, ExtractedField, FieldValue};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn list(items: &[&str]) -> ExtractedField {
        ExtractedField::new(
            FieldValue::List(strings(items)),
            vec![Evidence::at_line("q", 1)],
        )
    }

    fn scalar(value: &str) -> ExtractedField {
        ExtractedField::new(FieldValue::Scalar(value.into()), vec![Evidence::at_line("q", 1)])
    }

    fn signal(id: &str, severity: Severity, title: &str) -> Signal {
        Signal {
            signal_id: id.into(),
            severity,
            title: title.into(),
            description: String::new(),
            evidence: vec![Evidence::at_line("q", 1)],
        }
    }

    #[test]
    fn summary_joins_items() {
        assert_eq!(field_summary(&strings(&["이름", "이메일"]), "x", 5), "이름, 이메일");
    }

    #[test]
    fn summary_truncates_with_suffix() {
        let items = strings(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
        assert_eq!(field_summary(&items, "x", 5), "a1, a2, a3, a4, a5 외 2개");
    }

    #[test]
    fn summary_fallback_on_empty() {
        assert_eq!(field_summary(&[], "목적 미기재", 5), "목적 미기재");
        assert_eq!(field_summary(&strings(&[""]), "목적 미기재", 5), "목적 미기재");
    }

    #[test]
    fn risk_summary_without_signals() {
        assert_eq!(risk_summary(&[], 3), "추가 위험 신호 없음");
    }

    #[test]
    fn risk_summary_counts_and_caps_titles() {
        let signals = vec![
            signal("a", Severity::High, "A"),
            signal("b", Severity::Medium, "B"),
            signal("c", Severity::High, "C"),
            signal("d", Severity::Medium, "D"),
        ];
        assert_eq!(
            risk_summary(&signals, 3),
            "위험 신호 고위험 2건, 중위험 2건: A; B; C"
        );
    }

    #[test]
    fn what_prefers_required_items() {
        let fields: FieldMap = vec![
            ("data_collected", list(&["이름", "이메일"])),
            ("required_items", list(&["휴대폰번호"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(summary_data_items(&fields), strings(&["휴대폰번호"]));
    }

    #[test]
    fn what_falls_back_to_optional_items() {
        let fields: FieldMap = vec![("optional_items", list(&["주소"]))].into_iter().collect();
        assert_eq!(summary_data_items(&fields), strings(&["주소"]));
    }

    #[test]
    fn seven_lines_for_complete_document() {
        let fields: FieldMap = vec![
            ("data_collected", list(&["이름", "이메일"])),
            ("purposes", list(&["서비스 제공"])),
            ("retention", scalar("1년")),
            ("third_party", list(&["A사", "B사", "C사"])),
            ("overseas_transfer", scalar("미국 AWS")),
            ("revoke_path", scalar("고객센터 1588-0000")),
        ]
        .into_iter()
        .collect();
        let lines = build_seven_lines(
            &fields,
            &[],
            "주식회사 한빛은 개인정보를 수집합니다.",
            &AnalysisConfig::default(),
        );
        assert_eq!(lines.who, "주식회사 한빛");
        assert_eq!(lines.what, "이름, 이메일");
        assert_eq!(lines.why, "서비스 제공");
        assert_eq!(lines.when, "1년");
        assert_eq!(lines.where_, "A사, B사, C사 외 1개");
        assert_eq!(lines.how_to_revoke, "고객센터 1588-0000");
        assert_eq!(lines.risk_summary, "추가 위험 신호 없음");
    }

    #[test]
    fn seven_lines_fallbacks() {
        let lines = build_seven_lines(&FieldMap::new(), &[], "", &AnalysisConfig::default());
        assert_eq!(lines.who, "발급 기관 미기재");
        assert_eq!(lines.what, "수집 항목 미기재");
        assert_eq!(lines.why, "목적 미기재");
        assert_eq!(lines.when, "보유기간 미기재");
        assert_eq!(lines.where_, "제3자/이전 없음");
        assert_eq!(lines.how_to_revoke, "철회 경로 미기재");
    }
}
