//! Order-sensitive digests of transaction sequences using Blake3

use blake3::Hasher as Blake3Hasher;

use crate::error::OrderingError;
use crate::sort_key::SortKeyBuilder;
use crate::traits::Transaction;
use crate::types::SequenceDigest;

/// Computes digests that identify an ordered transaction sequence.
///
/// Two independently reconstructed histories can be checked against each
/// other without shipping the records: equal object counts plus equal
/// digests mean equal sequences. Each record contributes its id and its
/// canonical sort-key rendering, length-prefixed so adjacent records can
/// never blur together.
pub struct SequenceHasher {
    key_builder: SortKeyBuilder,
}

impl SequenceHasher {
    pub fn new() -> Self {
        SequenceHasher {
            key_builder: SortKeyBuilder::new(),
        }
    }

    /// Digest of one ordered sequence.
    ///
    /// Fails like sorting does when a record's date cannot be resolved,
    /// since the canonical key is part of the digested material.
    pub fn digest<T: Transaction>(
        &self,
        transactions: &[T],
    ) -> Result<SequenceDigest, OrderingError> {
        let mut hasher = Blake3Hasher::new();
        self.absorb(&mut hasher, transactions)?;
        Ok(SequenceDigest(*hasher.finalize().as_bytes()))
    }

    /// Fold another ordered batch into an existing digest.
    ///
    /// Ledgers are consumed in pages; this chains a page onto the digest of
    /// everything before it. Both sides of a comparison must fold the same
    /// page boundaries: the digest of pages `[a]`, `[b]` differs from the
    /// digest of the single page `[a, b]`.
    pub fn extend<T: Transaction>(
        &self,
        previous: &SequenceDigest,
        transactions: &[T],
    ) -> Result<SequenceDigest, OrderingError> {
        let mut hasher = Blake3Hasher::new();
        hasher.update(&previous.0);
        self.absorb(&mut hasher, transactions)?;
        Ok(SequenceDigest(*hasher.finalize().as_bytes()))
    }

    fn absorb<T: Transaction>(
        &self,
        hasher: &mut Blake3Hasher,
        transactions: &[T],
    ) -> Result<(), OrderingError> {
        for transaction in transactions {
            let id = transaction.id().as_bytes();
            hasher.update(&(id.len() as u64).to_le_bytes());
            hasher.update(id);

            let rendered = self.key_builder.build(transaction)?.to_string();
            hasher.update(&(rendered.len() as u64).to_le_bytes());
            hasher.update(rendered.as_bytes());
        }
        Ok(())
    }
}

impl Default for SequenceHasher {
    fn default() -> Self {
        Self::new()
    }
}
