use crate::models::{Evidence, ExtractedField, FieldMap, Severity, Signal};
use crate::pipeline::messages::MessageTemplates;
use crate::pipeline::structuring::{field_names, truncate_chars};
use crate::pipeline_config::AnalysisConfig;

use super::keywords::{
    MARKETING_KEYWORDS, PERMANENT_RETENTION, PURPOSE_TOKEN, RETENTION_MONTHS, RETENTION_YEARS,
    SENSITIVE_KEYWORDS, VAGUE_RETENTION, VAGUE_THIRD_PARTY,
};

/// Stable signal identifiers.
pub mod signal_ids {
    pub const REVOKE_PATH_MISSING: &str = "revoke_path_missing";
    pub const THIRD_PARTY_PRESENT: &str = "third_party_present";
    pub const RETENTION_MISSING: &str = "retention_missing";
    pub const RETENTION_LONG: &str = "retention_long";
    pub const RETENTION_VAGUE: &str = "retention_vague";
    pub const PURPOSE_EXPANDED_TO_MARKETING: &str = "purpose_expanded_to_marketing";
    pub const VAGUE_THIRD_PARTY_LANGUAGE: &str = "vague_third_party_language";
    pub const OVER_COLLECTION_RISK: &str = "over_collection_risk";
}

fn signal(
    signal_id: &str,
    severity: Severity,
    title: impl Into<String>,
    description: impl Into<String>,
    evidence: Vec<Evidence>,
) -> Signal {
    Signal {
        signal_id: signal_id.to_string(),
        severity,
        title: title.into(),
        description: description.into(),
        evidence,
    }
}

/// Up to `signal_max_evidence` entries of the field's evidence. A field
/// without evidence is quoted from its own value instead.
fn field_evidence(name: &str, field: &ExtractedField, config: &AnalysisConfig) -> Vec<Evidence> {
    let evidence: Vec<Evidence> = field
        .evidence
        .iter()
        .take(config.signal_max_evidence)
        .cloned()
        .collect();
    if !evidence.is_empty() {
        return evidence;
    }
    vec![Evidence::new(
        truncate_chars(field.text().trim(), config.quote_max_chars),
        MessageTemplates::field_location(name),
    )]
}

/// The field if present with non-blank text.
fn non_empty<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a ExtractedField> {
    fields.get(name).filter(|f| !f.text().trim().is_empty())
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// HIGH: no revocation / deletion / correction path anywhere.
pub fn check_revoke_path_missing(
    fields: &FieldMap,
    _text: &str,
    _config: &AnalysisConfig,
) -> Option<Signal> {
    if non_empty(fields, field_names::REVOKE_PATH).is_some() {
        return None;
    }
    Some(signal(
        signal_ids::REVOKE_PATH_MISSING,
        Severity::High,
        MessageTemplates::REVOKE_PATH_MISSING_TITLE,
        MessageTemplates::REVOKE_PATH_MISSING_DESCRIPTION,
        vec![Evidence::new(
            MessageTemplates::REVOKE_PATH_MISSING_NOTE,
            MessageTemplates::WHOLE_DOCUMENT,
        )],
    ))
}

/// MEDIUM: data is shared with third parties.
pub fn check_third_party_present(
    fields: &FieldMap,
    _text: &str,
    config: &AnalysisConfig,
) -> Option<Signal> {
    let tp = non_empty(fields, field_names::THIRD_PARTY)?;
    Some(signal(
        signal_ids::THIRD_PARTY_PRESENT,
        Severity::Medium,
        MessageTemplates::THIRD_PARTY_TITLE,
        MessageTemplates::THIRD_PARTY_DESCRIPTION,
        field_evidence(field_names::THIRD_PARTY, tp, config),
    ))
}

/// HIGH: retention missing, permanent, vague, or numerically long.
///
/// Branches are tried in that order; the first that applies wins.
pub fn check_retention(fields: &FieldMap, _text: &str, config: &AnalysisConfig) -> Option<Signal> {
    let Some(ret) = non_empty(fields, field_names::RETENTION) else {
        return Some(signal(
            signal_ids::RETENTION_MISSING,
            Severity::High,
            MessageTemplates::RETENTION_MISSING_TITLE,
            MessageTemplates::RETENTION_MISSING_DESCRIPTION,
            vec![Evidence::new(
                MessageTemplates::RETENTION_MISSING_NOTE,
                MessageTemplates::WHOLE_DOCUMENT,
            )],
        ));
    };
    let ret_text = ret.text();
    let evidence = || field_evidence(field_names::RETENTION, ret, config);

    if PERMANENT_RETENTION.is_match(&ret_text) {
        return Some(signal(
            signal_ids::RETENTION_LONG,
            Severity::High,
            MessageTemplates::RETENTION_PERMANENT_TITLE,
            MessageTemplates::RETENTION_PERMANENT_DESCRIPTION,
            evidence(),
        ));
    }

    if VAGUE_RETENTION.is_match(&ret_text) {
        return Some(signal(
            signal_ids::RETENTION_VAGUE,
            Severity::High,
            MessageTemplates::RETENTION_VAGUE_TITLE,
            MessageTemplates::RETENTION_VAGUE_DESCRIPTION,
            evidence(),
        ));
    }

    if let Some(years) = first_number(&RETENTION_YEARS, &ret_text) {
        if parse_count(years) >= config.retention_long_years {
            let (title, description) = MessageTemplates::retention_years(years);
            return Some(signal(
                signal_ids::RETENTION_LONG,
                Severity::High,
                title,
                description,
                evidence(),
            ));
        }
    }

    if let Some(months) = first_number(&RETENTION_MONTHS, &ret_text) {
        if parse_count(months) >= config.retention_long_months {
            let (title, description) = MessageTemplates::retention_months(months);
            return Some(signal(
                signal_ids::RETENTION_LONG,
                Severity::High,
                title,
                description,
                evidence(),
            ));
        }
    }

    None
}

fn first_number<'t>(re: &regex::Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Digit runs too long for u64 are still durations, and very long ones.
fn parse_count(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// MEDIUM: purposes include marketing or advertising.
///
/// Without a purposes field, a raw line mentioning both a marketing keyword
/// and 목적 is used instead.
pub fn check_purpose_marketing(
    fields: &FieldMap,
    text: &str,
    config: &AnalysisConfig,
) -> Option<Signal> {
    match fields.get(field_names::PURPOSES) {
        Some(purposes) => {
            let purposes_text = purposes.text();
            let found: Vec<&str> = MARKETING_KEYWORDS
                .iter()
                .copied()
                .filter(|kw| purposes_text.contains(kw))
                .collect();
            if found.is_empty() {
                return None;
            }
            Some(signal(
                signal_ids::PURPOSE_EXPANDED_TO_MARKETING,
                Severity::Medium,
                MessageTemplates::MARKETING_TITLE,
                MessageTemplates::marketing(&found),
                field_evidence(field_names::PURPOSES, purposes, config),
            ))
        }
        None => {
            let (line_num, line) = text.split('\n').enumerate().find(|(_, line)| {
                line.contains(PURPOSE_TOKEN) && MARKETING_KEYWORDS.iter().any(|kw| line.contains(kw))
            })?;
            Some(signal(
                signal_ids::PURPOSE_EXPANDED_TO_MARKETING,
                Severity::Medium,
                MessageTemplates::MARKETING_TITLE,
                MessageTemplates::marketing(&[]),
                vec![Evidence::at_line(line.trim(), line_num + 1)],
            ))
        }
    }
}

/// MEDIUM: third-party wording is catch-all ("관계사", "등 제3자", ...).
pub fn check_vague_third_party(
    fields: &FieldMap,
    _text: &str,
    config: &AnalysisConfig,
) -> Option<Signal> {
    let tp = non_empty(fields, field_names::THIRD_PARTY)?;
    let tp_text = tp.text();

    let mut found: Vec<String> = Vec::new();
    for pattern in VAGUE_THIRD_PARTY.iter() {
        if let Some(m) = pattern.find(&tp_text) {
            let phrase = m.as_str().to_string();
            if !found.contains(&phrase) {
                found.push(phrase);
            }
        }
    }
    if found.is_empty() {
        return None;
    }

    Some(signal(
        signal_ids::VAGUE_THIRD_PARTY_LANGUAGE,
        Severity::Medium,
        MessageTemplates::VAGUE_THIRD_PARTY_TITLE,
        MessageTemplates::vague_third_party(&found),
        field_evidence(field_names::THIRD_PARTY, tp, config),
    ))
}

/// HIGH: collected items include sensitive or unique identifiers.
pub fn check_over_collection(
    fields: &FieldMap,
    _text: &str,
    config: &AnalysisConfig,
) -> Option<Signal> {
    let sources = [
        field_names::REQUIRED_ITEMS,
        field_names::OPTIONAL_ITEMS,
        field_names::DATA_COLLECTED,
    ];
    let blob = sources
        .iter()
        .map(|name| fields.text_of(name))
        .collect::<Vec<_>>()
        .join(" ");

    let hits: Vec<&str> = SENSITIVE_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| blob.contains(kw))
        .collect();
    if hits.is_empty() {
        return None;
    }

    // A hit implies at least one source has text.
    let (name, source) = sources
        .iter()
        .find_map(|name| non_empty(fields, name).map(|f| (*name, f)))?;

    Some(signal(
        signal_ids::OVER_COLLECTION_RISK,
        Severity::High,
        MessageTemplates::OVER_COLLECTION_TITLE,
        MessageTemplates::over_collection(&hits),
        field_evidence(name, source, config),
    ))
}
