//! Core data types for cap-table transaction ordering

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::traits::Transaction;

/// A timestamp field as it arrives off the wire: either a number that is
/// already epoch milliseconds, or a date / date-time string. A record whose
/// timestamp is absent or JSON `null` carries `None` instead of a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampValue {
    /// Epoch milliseconds, taken at face value.
    Millis(i64),
    /// A textual date such as `"2023-06-15"` or `"2023-06-15T10:30:00Z"`.
    Text(String),
}

impl From<i64> for TimestampValue {
    fn from(millis: i64) -> Self {
        TimestampValue::Millis(millis)
    }
}

impl From<&str> for TimestampValue {
    fn from(text: &str) -> Self {
        TimestampValue::Text(text.to_string())
    }
}

impl From<String> for TimestampValue {
    fn from(text: String) -> Self {
        TimestampValue::Text(text)
    }
}

impl fmt::Display for TimestampValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampValue::Millis(millis) => write!(f, "{}", millis),
            TimestampValue::Text(text) => write!(f, "{:?}", text),
        }
    }
}

/// Blake3 digest identifying an ordered transaction sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceDigest(pub [u8; 32]);

impl fmt::Display for SequenceDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// One capitalization-table transaction as decoded from a ledger payload.
///
/// Only the fields the ordering core inspects are named; everything else the
/// ledger attached rides along in `extra` and is re-serialized untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Identifier unique within the transaction collection.
    pub id: String,
    /// Effective date of the transaction. The wire shape cannot promise it,
    /// but sorting fails without it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<TimestampValue>,
    /// Semantic kind tag (`TX_STOCK_ISSUANCE`, ...). Unrecognized or absent
    /// tags fall back to the default weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    /// The security the transaction affects. Entity-level transactions such
    /// as authorized-share adjustments have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_id: Option<String>,
    /// System creation time, camelCase spelling. Takes precedence over the
    /// snake_case spelling when both resolve.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestampValue>,
    /// System creation time, snake_case spelling kept for older payloads.
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at_compat: Option<TimestampValue>,
    /// Every other field of the record, carried through the sort untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TransactionRecord {
    /// Create a record with only an identifier set.
    pub fn new(id: String) -> Self {
        TransactionRecord {
            id,
            date: None,
            object_type: None,
            security_id: None,
            created_at: None,
            created_at_compat: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_date(mut self, date: TimestampValue) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_object_type(mut self, object_type: String) -> Self {
        self.object_type = Some(object_type);
        self
    }

    pub fn with_security_id(mut self, security_id: String) -> Self {
        self.security_id = Some(security_id);
        self
    }

    pub fn with_created_at(mut self, created_at: TimestampValue) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_created_at_compat(mut self, created_at: TimestampValue) -> Self {
        self.created_at_compat = Some(created_at);
        self
    }
}

impl Transaction for TransactionRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn date(&self) -> Option<&TimestampValue> {
        self.date.as_ref()
    }

    fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    fn security_id(&self) -> Option<&str> {
        self.security_id.as_deref()
    }

    fn created_at(&self) -> Option<&TimestampValue> {
        self.created_at.as_ref()
    }

    fn created_at_compat(&self) -> Option<&TimestampValue> {
        self.created_at_compat.as_ref()
    }
}
