//! Total-order sorting of cap-table transactions

use rayon::prelude::*;

use crate::diagnostics::OrderingDiagnostics;
use crate::error::OrderingError;
use crate::sort_key::{SortKey, SortKeyBuilder};
use crate::traits::Transaction;

/// Sorts transaction collections into deterministic replay order.
///
/// The input is never mutated; every entry point returns a freshly ordered
/// vector. All entry points share one comparator, so the sequential and
/// parallel paths always agree on the result.
pub struct TransactionSorter {
    key_builder: SortKeyBuilder,
}

impl TransactionSorter {
    pub fn new() -> Self {
        TransactionSorter {
            key_builder: SortKeyBuilder::new(),
        }
    }

    /// Sort a collection into replay order.
    ///
    /// Inputs shorter than two records come back as a plain copy without
    /// key validation, since there is nothing to order.
    pub fn sort<T: Transaction>(&self, transactions: &[T]) -> Result<Vec<T>, OrderingError> {
        if transactions.len() < 2 {
            return Ok(transactions.to_vec());
        }
        let mut keys = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            keys.push(self.key_builder.build(transaction)?);
        }
        Ok(Self::apply_order(transactions, &keys))
    }

    /// Sort with keys computed across worker threads.
    ///
    /// Key building dominates the cost on large collections and is
    /// independent per record. The comparison pass is identical to
    /// [`sort`](Self::sort), so the result is too. When several records
    /// have invalid dates, the error reported is the one from the earliest
    /// input position.
    pub fn sort_parallel<T: Transaction + Send + Sync>(
        &self,
        transactions: &[T],
    ) -> Result<Vec<T>, OrderingError> {
        if transactions.len() < 2 {
            return Ok(transactions.to_vec());
        }
        // Collect per-record results and surface the first failure in input
        // order, so the reported error never depends on thread scheduling.
        let built: Vec<Result<SortKey, OrderingError>> = transactions
            .par_iter()
            .map(|transaction| self.key_builder.build(transaction))
            .collect();
        let mut keys = Vec::with_capacity(built.len());
        for key in built {
            keys.push(key?);
        }
        Ok(Self::apply_order(transactions, &keys))
    }

    /// Sort and report every placeholder substitution that fired.
    ///
    /// Substitutions are reported in input order. Short inputs skip key
    /// building entirely, so their report is empty.
    pub fn sort_with_diagnostics<T: Transaction>(
        &self,
        transactions: &[T],
    ) -> Result<(Vec<T>, OrderingDiagnostics), OrderingError> {
        let mut diagnostics = OrderingDiagnostics::new();
        if transactions.len() < 2 {
            return Ok((transactions.to_vec(), diagnostics));
        }
        let mut keys = Vec::with_capacity(transactions.len());
        for transaction in transactions {
            keys.push(
                self.key_builder
                    .build_with_diagnostics(transaction, &mut diagnostics)?,
            );
        }
        Ok((Self::apply_order(transactions, &keys), diagnostics))
    }

    /// Clone the records in key order. The index sort is stable, which
    /// keeps duplicate-id records in their arrival order.
    fn apply_order<T: Transaction>(transactions: &[T], keys: &[SortKey]) -> Vec<T> {
        let mut order: Vec<usize> = (0..transactions.len()).collect();
        order.sort_by(|&left, &right| keys[left].cmp(&keys[right]));
        order
            .into_iter()
            .map(|index| transactions[index].clone())
            .collect()
    }
}

impl Default for TransactionSorter {
    fn default() -> Self {
        Self::new()
    }
}
