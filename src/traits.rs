//! Core traits for cap-table transaction ordering

use crate::types::TimestampValue;

/// Trait for transaction events that can be ordered into replay sequence.
///
/// `TransactionRecord` is the crate's own implementation for JSON payloads;
/// callers with richer domain types implement this directly and feed them to
/// the sorter without converting through an intermediate representation.
pub trait Transaction: Clone {
    /// Unique identifier for this transaction.
    fn id(&self) -> &str;

    /// The effective date field, exactly as received. Sorting fails when this
    /// is absent or unresolvable.
    fn date(&self) -> Option<&TimestampValue>;

    /// Semantic kind tag, when the record carries one.
    fn object_type(&self) -> Option<&str> {
        None
    }

    /// The affected security, when the record carries one.
    fn security_id(&self) -> Option<&str> {
        None
    }

    /// System creation time, camelCase spelling.
    fn created_at(&self) -> Option<&TimestampValue> {
        None
    }

    /// System creation time, snake_case spelling.
    fn created_at_compat(&self) -> Option<&TimestampValue> {
        None
    }
}
