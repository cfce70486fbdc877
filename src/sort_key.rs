//! Composite sort keys for deterministic transaction ordering

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::diagnostics::{FallbackEvent, FallbackKind, OrderingDiagnostics};
use crate::error::OrderingError;
use crate::timestamp::TimestampResolver;
use crate::traits::Transaction;
use crate::types::TimestampValue;
use crate::weight::{Weight, WeightTable, DEFAULT_WEIGHT};

/// Group placeholder for records that carry no security id. All such
/// records share one stable group so they stay clustered within their
/// weight band.
pub const NO_SECURITY_GROUP: &str = "_no_security_";

/// Creation-time placeholder, 9999-12-31T23:59:59.999Z as epoch millis.
/// Records without a system creation time sort after records that have one.
const FALLBACK_CREATED_MILLIS: i64 = 253_402_300_799_999;

fn fallback_created() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(FALLBACK_CREATED_MILLIS).unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// The composite key a transaction sorts by.
///
/// Field order is comparison order: the derived `Ord` compares day, then
/// weight, then security group, then creation time, then id. Every
/// component is total, so two keys never tie unless the records share an
/// id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SortKey {
    /// Calendar day, `YYYY-MM-DD`. For textual dates this is the literal
    /// text before the `T` marker, not a timezone-shifted rendering.
    pub day: String,
    /// Type weight within the day.
    pub weight: Weight,
    /// Security id, or [`NO_SECURITY_GROUP`] when the record has none.
    pub group: String,
    /// System creation time, or the far-future placeholder when absent.
    pub created: DateTime<Utc>,
    /// Record id, the final unconditional tie breaker.
    pub id: String,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}",
            self.day,
            self.weight,
            self.group,
            self.created.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.id
        )
    }
}

/// Derives a [`SortKey`] from any [`Transaction`] implementation.
///
/// Building a key is the only place ordering can fail: a record whose
/// `date` is absent or unresolvable has no position on the timeline, and
/// guessing one would corrupt the replayed history. Every other missing
/// field degrades to a documented placeholder.
pub struct SortKeyBuilder {
    resolver: TimestampResolver,
    weights: WeightTable,
}

impl SortKeyBuilder {
    pub fn new() -> Self {
        SortKeyBuilder {
            resolver: TimestampResolver::new(),
            weights: WeightTable::new(),
        }
    }

    /// Build the sort key for one transaction.
    pub fn build<T: Transaction>(&self, transaction: &T) -> Result<SortKey, OrderingError> {
        self.build_with_diagnostics(transaction, &mut OrderingDiagnostics::new())
    }

    /// Build the sort key, recording every placeholder substitution.
    pub fn build_with_diagnostics<T: Transaction>(
        &self,
        transaction: &T,
        diagnostics: &mut OrderingDiagnostics,
    ) -> Result<SortKey, OrderingError> {
        let date = transaction.date();
        let instant = match self.resolver.resolve_datetime(date) {
            Some(instant) => instant,
            None => {
                return Err(OrderingError::InvalidTransactionDate {
                    id: transaction.id().to_string(),
                    object_type: transaction.object_type().unwrap_or("none").to_string(),
                    date: match date {
                        Some(value) => value.to_string(),
                        None => "none".to_string(),
                    },
                });
            }
        };

        let day = match date {
            Some(TimestampValue::Text(text)) => match text.split_once('T') {
                Some((day, _)) => day.to_string(),
                None => text.clone(),
            },
            _ => instant.format("%Y-%m-%d").to_string(),
        };

        let weight = match transaction.object_type() {
            Some(tag) if !tag.is_empty() => match self.weights.lookup(tag) {
                Some(weight) => weight,
                None => {
                    diagnostics.record(FallbackEvent::new(
                        transaction.id().to_string(),
                        FallbackKind::DefaultWeight,
                        format!("unrecognized type {}", tag),
                    ));
                    DEFAULT_WEIGHT
                }
            },
            _ => {
                diagnostics.record(FallbackEvent::new(
                    transaction.id().to_string(),
                    FallbackKind::DefaultWeight,
                    "type tag absent".to_string(),
                ));
                DEFAULT_WEIGHT
            }
        };

        let group = match transaction.security_id() {
            Some(security_id) if !security_id.is_empty() => security_id.to_string(),
            _ => {
                diagnostics.record(FallbackEvent::new(
                    transaction.id().to_string(),
                    FallbackKind::NoSecurityGroup,
                    "security id absent".to_string(),
                ));
                NO_SECURITY_GROUP.to_string()
            }
        };

        let created = match self
            .resolver
            .resolve_datetime(transaction.created_at())
            .or_else(|| self.resolver.resolve_datetime(transaction.created_at_compat()))
        {
            Some(created) => created,
            None => {
                diagnostics.record(FallbackEvent::new(
                    transaction.id().to_string(),
                    FallbackKind::FarFutureCreated,
                    "no resolvable creation time".to_string(),
                ));
                fallback_created()
            }
        };

        Ok(SortKey {
            day,
            weight,
            group,
            created,
            id: transaction.id().to_string(),
        })
    }
}

impl Default for SortKeyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
