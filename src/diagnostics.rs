//! Fallback diagnostics collected while building sort keys
//!
//! Sorting substitutes documented placeholders instead of failing when
//! optional fields are absent. The substitutions are silent by default;
//! callers that want to audit them collect an [`OrderingDiagnostics`]
//! alongside the sorted output. Collection is a pure value, so two runs
//! over the same input produce the same report.

use serde::{Deserialize, Serialize};

/// Which placeholder substitution fired while building a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallbackKind {
    /// Type tag absent or unrecognized; the default weight was used.
    DefaultWeight,
    /// Security id absent or empty; the placeholder group was used.
    NoSecurityGroup,
    /// Neither creation-time spelling resolved; the far-future placeholder
    /// was used.
    FarFutureCreated,
}

/// One recorded substitution, tied to the record that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackEvent {
    /// Id of the record the substitution applied to.
    pub transaction_id: String,
    /// Which placeholder fired.
    pub kind: FallbackKind,
    /// Short cause, such as the unrecognized tag itself.
    pub detail: String,
}

impl FallbackEvent {
    pub fn new(transaction_id: String, kind: FallbackKind, detail: String) -> Self {
        Self {
            transaction_id,
            kind,
            detail,
        }
    }
}

/// Collects fallback events across one sort call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderingDiagnostics {
    events: Vec<FallbackEvent>,
}

impl OrderingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one substitution.
    pub fn record(&mut self, event: FallbackEvent) {
        self.events.push(event);
    }

    /// All recorded events, in the order the input was scanned.
    pub fn events(&self) -> &[FallbackEvent] {
        &self.events
    }

    /// How many substitutions of one kind fired.
    pub fn count(&self, kind: FallbackKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Events recorded for a specific record.
    pub fn events_for(&self, transaction_id: &str) -> Vec<&FallbackEvent> {
        self.events
            .iter()
            .filter(|e| e.transaction_id == transaction_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
