//! Transaction type weights for same-day ordering

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight applied to records whose type tag is absent or unrecognized.
/// It sits above every known band, so unclassified records replay after
/// the events the table understands but still within their own day.
pub const DEFAULT_WEIGHT: Weight = Weight(50);

/// Ordering priority of a transaction kind. Lower weights sort earlier
/// within the same calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(u16);

impl Weight {
    pub const fn new(value: u16) -> Self {
        Weight(value)
    }

    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Fixed mapping from transaction type tags to weights.
///
/// The bands encode cap-table phase order within a day: capacity
/// adjustments, then issuances and acceptances, then lifecycle moves
/// (splits, retractions, transfers, releases, exercises, conversions),
/// then terminal events, then stakeholder changes. Matching is exact and
/// case sensitive; anything else gets [`DEFAULT_WEIGHT`].
pub struct WeightTable;

impl WeightTable {
    pub fn new() -> Self {
        Self
    }

    /// Weight for a record's type tag, or the default when the tag is
    /// absent or unknown.
    pub fn weight_for(&self, object_type: Option<&str>) -> Weight {
        object_type
            .and_then(Self::tagged_weight)
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Weight for a known tag, `None` when the tag is not in the table.
    pub fn lookup(&self, tag: &str) -> Option<Weight> {
        Self::tagged_weight(tag)
    }

    fn tagged_weight(tag: &str) -> Option<Weight> {
        let value = match tag {
            "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT"
            | "TX_STOCK_CLASS_AUTHORIZED_SHARES_ADJUSTMENT"
            | "TX_STOCK_PLAN_POOL_ADJUSTMENT"
            | "TX_STOCK_PLAN_RETURN_TO_POOL_ADJUSTMENT" => 5,

            "TX_STOCK_ISSUANCE"
            | "TX_EQUITY_COMPENSATION_ISSUANCE"
            | "TX_PLAN_SECURITY_ISSUANCE"
            | "TX_CONVERTIBLE_ISSUANCE"
            | "TX_WARRANT_ISSUANCE" => 10,

            "TX_STOCK_ACCEPTANCE"
            | "TX_EQUITY_COMPENSATION_ACCEPTANCE"
            | "TX_PLAN_SECURITY_ACCEPTANCE" => 11,

            "TX_STOCK_CLASS_SPLIT" => 15,

            "TX_STOCK_RETRACTION"
            | "TX_CONVERTIBLE_RETRACTION"
            | "TX_WARRANT_RETRACTION"
            | "TX_EQUITY_COMPENSATION_RETRACTION" => 16,

            "TX_STOCK_TRANSFER"
            | "TX_EQUITY_COMPENSATION_TRANSFER"
            | "TX_PLAN_SECURITY_TRANSFER" => 20,

            "TX_EQUITY_COMPENSATION_RELEASE" => 25,

            "TX_EQUITY_COMPENSATION_EXERCISE"
            | "TX_PLAN_SECURITY_EXERCISE"
            | "TX_WARRANT_EXERCISE" => 30,

            "TX_CONVERTIBLE_CONVERSION" | "TX_STOCK_CONVERSION" => 35,

            "TX_STOCK_REPURCHASE"
            | "TX_STOCK_CANCELLATION"
            | "TX_EQUITY_COMPENSATION_CANCELLATION"
            | "TX_PLAN_SECURITY_CANCELLATION"
            | "TX_WARRANT_CANCELLATION"
            | "TX_CONVERTIBLE_CANCELLATION" => 40,

            "TX_STAKEHOLDER_RELATIONSHIP_CHANGE_EVENT"
            | "TX_STAKEHOLDER_STATUS_CHANGE_EVENT" => 45,

            _ => return None,
        };
        Some(Weight(value))
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::new()
    }
}
