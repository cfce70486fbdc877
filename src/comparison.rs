//! Comparison of independently ordered transaction sequences

use serde::{Deserialize, Serialize};

use crate::error::OrderingError;
use crate::hasher::SequenceHasher;
use crate::traits::Transaction;
use crate::types::SequenceDigest;

/// Outcome of comparing two ordered sequences position by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceComparison {
    pub baseline_count: usize,
    pub comparison_count: usize,
    pub baseline_digest: SequenceDigest,
    pub comparison_digest: SequenceDigest,
    /// Positions whose record ids disagree, including overhang where one
    /// sequence ran out. Empty when the id streams match.
    pub divergences: Vec<SequenceDivergence>,
}

/// One position where the sequences disagree. A `None` id means that side
/// had no record at the position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceDivergence {
    pub position: usize,
    pub baseline_id: Option<String>,
    pub comparison_id: Option<String>,
}

impl SequenceComparison {
    /// True when counts, digests, and the id streams all agree.
    pub fn are_identical(&self) -> bool {
        self.baseline_count == self.comparison_count
            && self.baseline_digest == self.comparison_digest
            && self.divergences.is_empty()
    }

    /// The earliest disagreeing position, if any.
    pub fn first_divergence(&self) -> Option<&SequenceDivergence> {
        self.divergences.first()
    }

    /// One-line report suitable for logs.
    pub fn summary(&self) -> String {
        if self.are_identical() {
            return "Sequences are identical".to_string();
        }
        let mut parts = Vec::new();
        if self.baseline_count != self.comparison_count {
            parts.push(format!(
                "counts differ ({} vs {})",
                self.baseline_count, self.comparison_count
            ));
        }
        if self.baseline_digest != self.comparison_digest {
            parts.push("digests differ".to_string());
        }
        if !self.divergences.is_empty() {
            parts.push(format!("{} positions diverge", self.divergences.len()));
        }
        format!("Sequences differ: {}", parts.join(", "))
    }
}

/// Compares two reconstructions of the same history.
///
/// The digest catches any difference at all; the positional walk pins down
/// where the id streams first drift apart. Ids can agree while digests
/// differ, which means the records matched up but a key-relevant field
/// changed underneath one of them.
pub struct SequenceComparator {
    hasher: SequenceHasher,
}

impl SequenceComparator {
    pub fn new() -> Self {
        SequenceComparator {
            hasher: SequenceHasher::new(),
        }
    }

    /// Compare two ordered sequences.
    pub fn compare<T: Transaction>(
        &self,
        baseline: &[T],
        comparison: &[T],
    ) -> Result<SequenceComparison, OrderingError> {
        let mut divergences = Vec::new();
        let max_len = baseline.len().max(comparison.len());

        for position in 0..max_len {
            let baseline_id = baseline.get(position).map(|t| t.id().to_string());
            let comparison_id = comparison.get(position).map(|t| t.id().to_string());
            if baseline_id != comparison_id {
                divergences.push(SequenceDivergence {
                    position,
                    baseline_id,
                    comparison_id,
                });
            }
        }

        Ok(SequenceComparison {
            baseline_count: baseline.len(),
            comparison_count: comparison.len(),
            baseline_digest: self.hasher.digest(baseline)?,
            comparison_digest: self.hasher.digest(comparison)?,
            divergences,
        })
    }
}

impl Default for SequenceComparator {
    fn default() -> Self {
        Self::new()
    }
}
