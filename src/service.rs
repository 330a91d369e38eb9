//! Service boundary over the analysis pipeline.
//!
//! Validates requests, runs the pipeline, and persists results through a
//! `ReceiptStore`. Transport layers (HTTP, CLI, IPC) call into this module
//! and never reach the pipeline directly.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DiffResult, ExtractResult, Receipt};
use crate::pipeline::DocumentAnalyzer;
use crate::store::{ReceiptStore, StoreError, StoredReceipt};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// One side of a diff request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffSide {
    A,
    B,
}

impl fmt::Display for DiffSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("raw_text must not be empty")]
    EmptyRawText,

    #[error("Provide receipt_id_{s} or raw_text_{s}", s = side_suffix(.side))]
    MissingDiffSource { side: DiffSide },

    #[error("Receipt not found: {0}")]
    ReceiptNotFound(Uuid),

    #[error("Receipt {side} not found: {id}")]
    DiffSourceNotFound { side: DiffSide, id: Uuid },

    #[error("Stored receipt {id} is malformed: {reason}")]
    DataIntegrity { id: Uuid, reason: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

fn side_suffix(side: &DiffSide) -> &'static str {
    match side {
        DiffSide::A => "a",
        DiffSide::B => "b",
    }
}

// ---------------------------------------------------------------------------
// Request / response envelopes
// ---------------------------------------------------------------------------

fn default_source_type() -> String {
    "other".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestRequest {
    pub raw_text: String,
    #[serde(default = "default_source_type")]
    pub source_type: String,
    /// Caller-supplied context. Carried for the transport layer, unused by analysis.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl IngestRequest {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            source_type: default_source_type(),
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub receipt: Receipt,
    pub extract_result: ExtractResult,
}

/// Each side is taken from a stored receipt by id, else analyzed from raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffRequest {
    #[serde(default)]
    pub receipt_id_a: Option<Uuid>,
    #[serde(default)]
    pub raw_text_a: Option<String>,
    #[serde(default)]
    pub receipt_id_b: Option<Uuid>,
    #[serde(default)]
    pub raw_text_b: Option<String>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct ReceiptService<S: ReceiptStore> {
    analyzer: DocumentAnalyzer,
    store: S,
}

impl<S: ReceiptStore> ReceiptService<S> {
    pub fn new(analyzer: DocumentAnalyzer, store: S) -> Self {
        Self { analyzer, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze a document and persist the result.
    pub fn ingest(&self, req: &IngestRequest) -> Result<IngestResponse, ServiceError> {
        if req.raw_text.trim().is_empty() {
            return Err(ServiceError::EmptyRawText);
        }

        tracing::info!(
            source_type = %req.source_type,
            text_length = req.raw_text.chars().count(),
            "Ingest"
        );

        let (receipt, extract_result) = self.analyzer.analyze(&req.raw_text, &req.source_type);
        let record = StoredReceipt::from_analysis(&req.raw_text, &receipt, &extract_result)?;
        self.store.insert(record)?;

        tracing::info!(receipt_id = %receipt.receipt_id, "Stored receipt");

        Ok(IngestResponse {
            receipt,
            extract_result,
        })
    }

    /// Stored receipts, newest first.
    pub fn list_receipts(&self) -> Result<Vec<Receipt>, ServiceError> {
        let records = self.store.list()?;
        tracing::info!(count = records.len(), "Listed receipts");
        records.iter().map(decode_receipt).collect()
    }

    pub fn get_receipt(&self, receipt_id: &Uuid) -> Result<Receipt, ServiceError> {
        match self.store.get(receipt_id)? {
            Some(record) => decode_receipt(&record),
            None => {
                tracing::warn!(receipt_id = %receipt_id, "Receipt not found");
                Err(ServiceError::ReceiptNotFound(*receipt_id))
            }
        }
    }

    pub fn delete_receipt(&self, receipt_id: &Uuid) -> Result<(), ServiceError> {
        if !self.store.delete(receipt_id)? {
            return Err(ServiceError::ReceiptNotFound(*receipt_id));
        }
        tracing::info!(receipt_id = %receipt_id, "Deleted receipt");
        Ok(())
    }

    /// Resolve both sides, then compare them.
    pub fn diff(&self, req: &DiffRequest) -> Result<DiffResult, ServiceError> {
        let (result_a, id_a) =
            self.resolve_side(DiffSide::A, req.receipt_id_a, req.raw_text_a.as_deref())?;
        let (result_b, id_b) =
            self.resolve_side(DiffSide::B, req.receipt_id_b, req.raw_text_b.as_deref())?;

        Ok(self.analyzer.diff(
            &result_a.fields,
            &result_b.fields,
            &result_a.signals,
            &result_b.signals,
            id_a,
            id_b,
        ))
    }

    /// An id wins over raw text; a text-sourced side carries no receipt id.
    fn resolve_side(
        &self,
        side: DiffSide,
        receipt_id: Option<Uuid>,
        raw_text: Option<&str>,
    ) -> Result<(ExtractResult, Option<Uuid>), ServiceError> {
        if let Some(id) = receipt_id {
            let record = self
                .store
                .get(&id)?
                .ok_or(ServiceError::DiffSourceNotFound { side, id })?;
            return Ok((decode_extract_result(&record)?, Some(id)));
        }

        match raw_text.filter(|t| !t.trim().is_empty()) {
            Some(text) => {
                let (_, result) = self.analyzer.analyze(text, &default_source_type());
                Ok((result, None))
            }
            None => Err(ServiceError::MissingDiffSource { side }),
        }
    }
}

fn decode_receipt(record: &StoredReceipt) -> Result<Receipt, ServiceError> {
    serde_json::from_str(&record.receipt_json).map_err(|e| integrity_error(record, e))
}

fn decode_extract_result(record: &StoredReceipt) -> Result<ExtractResult, ServiceError> {
    serde_json::from_str(&record.extract_result_json).map_err(|e| integrity_error(record, e))
}

fn integrity_error(record: &StoredReceipt, e: serde_json::Error) -> ServiceError {
    tracing::warn!(receipt_id = %record.receipt_id, error = %e, "Stored receipt is malformed");
    ServiceError::DataIntegrity {
        id: record.receipt_id,
        reason: e.to_string(),
    }
}
