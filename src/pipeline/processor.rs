//! Analysis orchestrator.
//!
//! Single entry point that drives the full pipeline:
//! classify + structure → detect signals → build receipt.
//!
//! Every stage is a pure function of the raw text, so the processor holds
//! nothing but configuration and is safe to share across threads.

use uuid::Uuid;

use crate::models::{DiffResult, ExtractResult, FieldMap, Receipt, Signal};
use crate::pipeline::classify::classify;
use crate::pipeline::diff::diff_extract_results;
use crate::pipeline::receipt::build_receipt;
use crate::pipeline::signals::detect_signals;
use crate::pipeline::structuring::extract_fields;
use crate::pipeline_config::AnalysisConfig;

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Runs the analysis stages with one configuration.
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalyzer {
    config: AnalysisConfig,
}

impl DocumentAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Full analysis of one document.
    ///
    /// The caller rejects blank text before calling; blank text here simply
    /// yields an `unknown` document with the missing-information signals.
    pub fn analyze(&self, raw_text: &str, source_type: &str) -> (Receipt, ExtractResult) {
        let span = tracing::info_span!(
            "analyze",
            source_type,
            text_length = raw_text.chars().count()
        );
        let _guard = span.enter();

        let (document_type, document_type_evidence) = classify(raw_text, &self.config);
        let fields = extract_fields(raw_text, &self.config);
        let signals = detect_signals(&fields, raw_text, &self.config);

        let receipt = build_receipt(
            raw_text,
            source_type,
            document_type,
            &fields,
            &signals,
            &self.config,
        );

        tracing::info!(
            receipt_id = %receipt.receipt_id,
            document_type = document_type.as_str(),
            fields = fields.len(),
            signals = signals.len(),
            content_hash = %receipt.content_hash,
            "Analysis complete"
        );

        let extract_result = ExtractResult {
            document_type,
            document_type_evidence,
            fields,
            signals,
        };

        (receipt, extract_result)
    }

    /// Compare two (fields, signals) pairs, A being the older side.
    pub fn diff(
        &self,
        fields_a: &FieldMap,
        fields_b: &FieldMap,
        signals_a: &[Signal],
        signals_b: &[Signal],
        receipt_a_id: Option<Uuid>,
        receipt_b_id: Option<Uuid>,
    ) -> DiffResult {
        let result = diff_extract_results(
            fields_a,
            fields_b,
            signals_a,
            signals_b,
            receipt_a_id,
            receipt_b_id,
        );
        tracing::info!(
            diff_id = %result.diff_id,
            changes = result.changes.len(),
            "Diff complete"
        );
        result
    }
}

/// [`DocumentAnalyzer::analyze`] with the default configuration.
pub fn analyze(raw_text: &str, source_type: &str) -> (Receipt, ExtractResult) {
    DocumentAnalyzer::default().analyze(raw_text, source_type)
}

/// [`DocumentAnalyzer::diff`] with the default configuration.
pub fn diff(
    fields_a: &FieldMap,
    fields_b: &FieldMap,
    signals_a: &[Signal],
    signals_b: &[Signal],
    receipt_a_id: Option<Uuid>,
    receipt_b_id: Option<Uuid>,
) -> DiffResult {
    DocumentAnalyzer::default().diff(
        fields_a,
        fields_b,
        signals_a,
        signals_b,
        receipt_a_id,
        receipt_b_id,
    )
}
