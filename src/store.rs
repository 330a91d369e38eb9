//! Receipt persistence.
//!
//! The pipeline never touches storage; the service layer persists each
//! analysis through a `ReceiptStore`. Records hold the raw text, the content
//! hash and the serialized ExtractResult and Receipt, exactly as produced.

use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{DocumentType, ExtractResult, Receipt};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store lock poisoned")]
    LockFailed,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One persisted analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReceipt {
    pub receipt_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source_type: String,
    pub document_type: DocumentType,
    pub raw_text: String,
    pub content_hash: String,
    /// Serialized `ExtractResult`.
    pub extract_result_json: String,
    /// Serialized `Receipt`.
    pub receipt_json: String,
}

impl StoredReceipt {
    /// Snapshot an analysis for storage.
    pub fn from_analysis(
        raw_text: &str,
        receipt: &Receipt,
        extract_result: &ExtractResult,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            receipt_id: receipt.receipt_id,
            created_at: receipt.created_at,
            source_type: receipt.source_type.clone(),
            document_type: receipt.document_type,
            raw_text: raw_text.to_string(),
            content_hash: receipt.content_hash.clone(),
            extract_result_json: serde_json::to_string(extract_result)?,
            receipt_json: serde_json::to_string(receipt)?,
        })
    }
}

/// Persistence collaborator for the service layer.
pub trait ReceiptStore: Send + Sync {
    fn insert(&self, record: StoredReceipt) -> Result<(), StoreError>;

    fn get(&self, receipt_id: &Uuid) -> Result<Option<StoredReceipt>, StoreError>;

    /// All records, newest first.
    fn list(&self) -> Result<Vec<StoredReceipt>, StoreError>;

    /// Returns false when no record had this id.
    fn delete(&self, receipt_id: &Uuid) -> Result<bool, StoreError>;
}

/// In-memory store backed by RwLock.
#[derive(Default)]
pub struct MemoryReceiptStore {
    records: RwLock<Vec<StoredReceipt>>,
}

impl MemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn insert(&self, record: StoredReceipt) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockFailed)?;
        tracing::debug!(receipt_id = %record.receipt_id, "Receipt stored");
        records.push(record);
        Ok(())
    }

    fn get(&self, receipt_id: &Uuid) -> Result<Option<StoredReceipt>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockFailed)?;
        Ok(records.iter().find(|r| &r.receipt_id == receipt_id).cloned())
    }

    fn list(&self) -> Result<Vec<StoredReceipt>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockFailed)?;
        let mut result = records.clone();
        // Reversed first so records with equal timestamps list the later insert first.
        result.reverse();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    fn delete(&self, receipt_id: &Uuid) -> Result<bool, StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockFailed)?;
        let before = records.len();
        records.retain(|r| &r.receipt_id != receipt_id);
        let removed = records.len() < before;
        if removed {
            tracing::debug!(receipt_id = %receipt_id, "Receipt deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(age_minutes: i64) -> StoredReceipt {
        StoredReceipt {
            receipt_id: Uuid::new_v4(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
            source_type: "other".into(),
            document_type: DocumentType::Unknown,
            raw_text: "text".into(),
            content_hash: "hash".into(),
            extract_result_json: "{}".into(),
            receipt_json: "{}".into(),
        }
    }

    #[test]
    fn insert_and_get() {
        let store = MemoryReceiptStore::new();
        let rec = record(0);
        let id = rec.receipt_id;
        store.insert(rec.clone()).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(rec));
        assert_eq!(store.get(&Uuid::new_v4()).unwrap(), None);
    }

    #[test]
    fn list_newest_first() {
        let store = MemoryReceiptStore::new();
        let old = record(10);
        let new = record(1);
        store.insert(old.clone()).unwrap();
        store.insert(new.clone()).unwrap();
        let ids: Vec<_> = store.list().unwrap().iter().map(|r| r.receipt_id).collect();
        assert_eq!(ids, vec![new.receipt_id, old.receipt_id]);
    }

    #[test]
    fn delete_reports_presence() {
        let store = MemoryReceiptStore::new();
        let rec = record(0);
        let id = rec.receipt_id;
        store.insert(rec).unwrap();
        assert!(store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());
        assert!(store.list().unwrap().is_empty());
    }
}
