//! Deterministic ordering of capitalization-table transactions
//!
//! Transactions pulled from a ledger arrive with partial and conflicting
//! timestamp information: effective dates in several formats, two spellings
//! of the system creation time, and fields that may simply be missing.
//! This crate turns such collections into one total replay order that is
//! independent of arrival order and host environment.
//!
//! Records sort by calendar day, then a fixed per-type weight, then the
//! affected security, then creation time, then id. Companion utilities
//! digest and compare ordered sequences, and a manifest counter totals
//! the objects in a reconstructed snapshot.

pub mod comparison;
pub mod diagnostics;
pub mod error;
pub mod hasher;
pub mod manifest;
pub mod serialization;
pub mod sort_key;
pub mod sorter;
pub mod timestamp;
pub mod traits;
pub mod types;
pub mod weight;

// Re-export core types and traits
pub use comparison::{SequenceComparator, SequenceComparison, SequenceDivergence};
pub use diagnostics::{FallbackEvent, FallbackKind, OrderingDiagnostics};
pub use error::{CapReplayError, OrderingError, SerializationError};
pub use hasher::SequenceHasher;
pub use manifest::{CapTableManifest, ManifestObjectCounter};
pub use serialization::JsonCodec;
pub use sort_key::{SortKey, SortKeyBuilder, NO_SECURITY_GROUP};
pub use sorter::TransactionSorter;
pub use timestamp::TimestampResolver;
pub use traits::Transaction;
pub use types::{SequenceDigest, TimestampValue, TransactionRecord};
pub use weight::{Weight, WeightTable, DEFAULT_WEIGHT};
