//! Cap-table manifests and completeness counting

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A reconstructed snapshot of a cap table's constituent objects.
///
/// Collections hold raw JSON values rather than typed records: the counter
/// must stay total over every manifest shape a ledger can produce, and a
/// malformed entry inside a collection still counts as one object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapTableManifest {
    /// The root entity. JSON `null` and an absent field both mean none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stakeholders: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_classes: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_plans: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_terms: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuations: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_legend_templates: Option<Vec<Value>>,
    /// Fields outside the counted set, kept intact for re-serialization.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Counts the objects a manifest contains, for completeness checks against
/// the source ledger.
///
/// The count is 1 for a present non-null issuer plus the length of each
/// typed collection, with absent collections contributing 0. The counter
/// is total: no manifest shape makes it fail.
pub struct ManifestObjectCounter;

impl ManifestObjectCounter {
    pub fn new() -> Self {
        Self
    }

    /// Total object count of one manifest.
    pub fn count(&self, manifest: &CapTableManifest) -> usize {
        let issuer = match &manifest.issuer {
            Some(value) if !value.is_null() => 1,
            _ => 0,
        };
        issuer
            + Self::collection_len(&manifest.stakeholders)
            + Self::collection_len(&manifest.stock_classes)
            + Self::collection_len(&manifest.stock_plans)
            + Self::collection_len(&manifest.vesting_terms)
            + Self::collection_len(&manifest.transactions)
            + Self::collection_len(&manifest.valuations)
            + Self::collection_len(&manifest.documents)
            + Self::collection_len(&manifest.stock_legend_templates)
    }

    fn collection_len(collection: &Option<Vec<Value>>) -> usize {
        collection.as_ref().map_or(0, Vec::len)
    }
}

impl Default for ManifestObjectCounter {
    fn default() -> Self {
        Self::new()
    }
}
