//! JSON interchange for ledger payloads

use crate::error::SerializationError;
use crate::manifest::CapTableManifest;
use crate::types::TransactionRecord;

/// JSON codec for transaction collections and manifests.
///
/// Decoding is strict about the fields the ordering core inspects (`date`
/// must be a string, a number, null, or absent) and indifferent to every
/// other field, which is preserved byte-for-byte on re-encoding modulo
/// JSON formatting.
#[derive(Debug, Clone)]
pub struct JsonCodec {
    pretty: bool,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Codec that pretty-prints on encoding.
    pub fn new_pretty() -> Self {
        Self { pretty: true }
    }

    /// Decode a JSON array of transaction records.
    pub fn transactions_from_json(
        &self,
        json: &str,
    ) -> Result<Vec<TransactionRecord>, SerializationError> {
        serde_json::from_str(json).map_err(|e| SerializationError::DeserializationFailed {
            reason: format!("transaction payload decoding failed: {}", e),
        })
    }

    /// Encode transaction records as a JSON array.
    pub fn transactions_to_json(
        &self,
        records: &[TransactionRecord],
    ) -> Result<String, SerializationError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        };
        result.map_err(|e| SerializationError::SerializationFailed {
            reason: format!("transaction payload encoding failed: {}", e),
        })
    }

    /// Decode a manifest document.
    pub fn manifest_from_json(&self, json: &str) -> Result<CapTableManifest, SerializationError> {
        serde_json::from_str(json).map_err(|e| SerializationError::DeserializationFailed {
            reason: format!("manifest decoding failed: {}", e),
        })
    }

    /// Encode a manifest document.
    pub fn manifest_to_json(&self, manifest: &CapTableManifest) -> Result<String, SerializationError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(manifest)
        } else {
            serde_json::to_string(manifest)
        };
        result.map_err(|e| SerializationError::SerializationFailed {
            reason: format!("manifest encoding failed: {}", e),
        })
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new()
    }
}
