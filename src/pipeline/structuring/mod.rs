//! Rule-based field extractor.
//!
//! Locates the standard sections of a Korean privacy/consent document and
//! shapes each into a canonical field with evidence spans.

pub mod registry;
pub mod sections;
pub mod values;

pub use registry::{field_names, FieldSpec, ValueShape, FIELD_REGISTRY};
pub use sections::{find_sections, Section};
pub use values::{extract_list_items, section_evidence, truncate_chars};

use crate::models::{ExtractedField, FieldMap, FieldValue};
use crate::pipeline_config::AnalysisConfig;

/// Extract all canonical fields from `text`.
///
/// A field with no section is absent from the map, never present-but-empty.
pub fn extract_fields(text: &str, config: &AnalysisConfig) -> FieldMap {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut fields = FieldMap::new();

    for spec in FIELD_REGISTRY.iter() {
        let sections = find_sections(&lines, spec, config.section_max_blank_lines);
        if sections.is_empty() {
            continue;
        }

        let merged = sections
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let value = match spec.shape {
            ValueShape::List => FieldValue::List(extract_list_items(&merged)),
            ValueShape::Scalar => FieldValue::Scalar(merged.trim().to_string()),
        };

        let evidence = sections
            .iter()
            .take(config.field_max_evidence)
            .map(|s| section_evidence(s, config.quote_max_lines, config.quote_max_chars))
            .collect();

        tracing::debug!(
            field = spec.name,
            sections = sections.len(),
            "Field extracted"
        );

        fields.insert(spec.name, ExtractedField::new(value, evidence));
    }

    fields
}
