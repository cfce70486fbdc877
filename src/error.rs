//! Error types for cap-table event ordering

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CapReplayError {
    #[error("Ordering error: {0}")]
    Ordering(#[from] OrderingError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// The single error the ordering core raises. Every other irregularity
/// (unknown object type, absent security id, absent creation timestamp)
/// degrades to a documented fallback instead of failing.
#[derive(Debug, Error)]
pub enum OrderingError {
    /// The record's `date` is absent or does not parse to a valid point in
    /// time. Fatal to the whole sort call: dropping or guessing the place
    /// of one event would corrupt the reconstructed history.
    #[error("Transaction date missing or invalid: {id} ({object_type}) - date was {date}")]
    InvalidTransactionDate {
        /// Identifier of the offending record.
        id: String,
        /// The record's type tag, or `none` when absent.
        object_type: String,
        /// The literal date value as received, or `none` when absent.
        date: String,
    },
}

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Serialization failed: {reason}")]
    SerializationFailed { reason: String },

    #[error("Deserialization failed: {reason}")]
    DeserializationFailed { reason: String },
}
