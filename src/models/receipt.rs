use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ActionType, DocumentType, TransferType};
use super::field::{Evidence, FieldMap};
use super::signal::Signal;

/// Pipeline output before the receipt is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Serialized as its snake_case string. A stored value naming a type this
    /// build does not know fails to decode rather than passing through.
    pub document_type: DocumentType,
    #[serde(default)]
    pub document_type_evidence: Vec<Evidence>,
    #[serde(default)]
    pub fields: FieldMap,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

/// Seven-line summary card, one line per key dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SevenLines {
    pub who: String,
    pub what: String,
    pub why: String,
    pub when: String,
    #[serde(rename = "where")]
    pub where_: String,
    pub how_to_revoke: String,
    pub risk_summary: String,
}

/// A suggested next step the user can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub action_type: ActionType,
    pub label: String,
    pub description: String,
}

/// One destination the document says personal data flows to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    #[serde(rename = "type")]
    pub transfer_type: TransferType,
    pub destination: String,
    pub is_overseas: bool,
    pub data_items: Vec<String>,
}

/// Complete analysis artifact for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source_type: String,
    pub document_type: DocumentType,
    pub seven_lines: SevenLines,
    pub signals: Vec<Signal>,
    pub fields: FieldMap,
    /// SHA-256 hex digest of the raw text. A fingerprint, not a dedup key.
    pub content_hash: String,
    pub actions: Vec<Action>,
    pub required_items: Vec<String>,
    pub optional_items: Vec<String>,
    pub over_collection: bool,
    pub over_collection_reasons: Vec<String>,
    pub transfers: Vec<Transfer>,
}
