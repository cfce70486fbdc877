use capreplay::{SortKeyBuilder, TimestampValue, TransactionRecord, TransactionSorter};
use proptest::prelude::*;

// Tags drawn across every weight band, plus room for unknowns
const KNOWN_TAGS: &[&str] = &[
    "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT",
    "TX_STOCK_PLAN_POOL_ADJUSTMENT",
    "TX_STOCK_ISSUANCE",
    "TX_CONVERTIBLE_ISSUANCE",
    "TX_STOCK_ACCEPTANCE",
    "TX_STOCK_CLASS_SPLIT",
    "TX_STOCK_RETRACTION",
    "TX_STOCK_TRANSFER",
    "TX_EQUITY_COMPENSATION_RELEASE",
    "TX_WARRANT_EXERCISE",
    "TX_STOCK_CONVERSION",
    "TX_STOCK_CANCELLATION",
    "TX_STAKEHOLDER_STATUS_CHANGE_EVENT",
];

fn arb_day() -> impl Strategy<Value = String> {
    (2020i32..2025, 1u32..13, 1u32..29)
        .prop_map(|(year, month, day)| format!("{:04}-{:02}-{:02}", year, month, day))
}

fn arb_date_value() -> impl Strategy<Value = TimestampValue> {
    prop_oneof![
        arb_day().prop_map(TimestampValue::from),
        (arb_day(), 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
            TimestampValue::from(format!("{}T{:02}:{:02}:00Z", day, hour, minute))
        }),
        (arb_day(), 0u32..24, 0u32..60).prop_map(|(day, hour, minute)| {
            TimestampValue::from(format!("{}T{:02}:{:02}:00", day, hour, minute))
        }),
        (1_500_000_000_000i64..1_700_000_000_000i64).prop_map(TimestampValue::Millis),
    ]
}

fn arb_object_type() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(KNOWN_TAGS).prop_map(str::to_string),
        1 => Just("TX_UNRECOGNIZED_EVENT".to_string()),
    ]
}

fn arb_records() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(
        (
            arb_date_value(),
            prop::option::of(arb_object_type()),
            prop::option::of("sec-[a-d]"),
            prop::option::of(arb_date_value()),
        ),
        1..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (date, object_type, security_id, created_at))| {
                let mut record =
                    TransactionRecord::new(format!("tx-{:03}", index)).with_date(date);
                if let Some(object_type) = object_type {
                    record = record.with_object_type(object_type);
                }
                if let Some(security_id) = security_id {
                    record = record.with_security_id(security_id);
                }
                if let Some(created_at) = created_at {
                    record = record.with_created_at(created_at);
                }
                record
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sorting the same collection twice, or sorting its own output,
    /// always lands on the same sequence.
    #[test]
    fn property_sort_is_deterministic_and_idempotent(records in arb_records()) {
        let sorter = TransactionSorter::new();

        let first = sorter.sort(&records).unwrap();
        let second = sorter.sort(&records).unwrap();
        prop_assert_eq!(&first, &second, "repeated sorts should agree");

        let resorted = sorter.sort(&first).unwrap();
        prop_assert_eq!(&first, &resorted, "sorting sorted output should be a no-op");
    }

    /// Arrival order carries no information: any permutation of the input
    /// sorts to the identical sequence.
    #[test]
    fn property_arrival_order_never_changes_the_result(
        (records, scrambled) in arb_records().prop_flat_map(|records| {
            let scrambled = Just(records.clone()).prop_shuffle();
            (Just(records), scrambled)
        })
    ) {
        let sorter = TransactionSorter::new();
        prop_assert_eq!(
            sorter.sort(&records).unwrap(),
            sorter.sort(&scrambled).unwrap()
        );
    }

    /// The output is a permutation of the input: nothing dropped, nothing
    /// invented, nothing altered.
    #[test]
    fn property_output_is_a_permutation_of_input(records in arb_records()) {
        let sorted = TransactionSorter::new().sort(&records).unwrap();
        prop_assert_eq!(sorted.len(), records.len());

        let mut input_ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        let mut output_ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        input_ids.sort_unstable();
        output_ids.sort_unstable();
        prop_assert_eq!(input_ids, output_ids);
    }

    /// Keys of the sorted output never decrease.
    #[test]
    fn property_output_keys_are_non_decreasing(records in arb_records()) {
        let sorted = TransactionSorter::new().sort(&records).unwrap();
        let builder = SortKeyBuilder::new();
        let keys: Vec<_> = sorted
            .iter()
            .map(|record| builder.build(record).unwrap())
            .collect();
        for pair in keys.windows(2) {
            prop_assert!(pair[0] <= pair[1], "key order violated: {} > {}", pair[0], pair[1]);
        }
    }

    /// The parallel path is an optimization, never a different ordering.
    #[test]
    fn property_parallel_sort_equals_sequential_sort(records in arb_records()) {
        let sorter = TransactionSorter::new();
        prop_assert_eq!(
            sorter.sort(&records).unwrap(),
            sorter.sort_parallel(&records).unwrap()
        );
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn record(id: &str, date: &str) -> TransactionRecord {
        TransactionRecord::new(id.to_string()).with_date(date.into())
    }

    // An exercise entered into the system before the matching grant was
    // backfilled: type weight must outrank creation time within the day.
    #[test]
    fn test_same_day_issuance_precedes_earlier_created_exercise() {
        let input = vec![
            record("ex-1", "2023-06-15")
                .with_object_type("TX_EQUITY_COMPENSATION_EXERCISE".to_string())
                .with_security_id("sec-a".to_string())
                .with_created_at("2023-06-15T09:00:00Z".into()),
            record("is-1", "2023-06-15")
                .with_object_type("TX_EQUITY_COMPENSATION_ISSUANCE".to_string())
                .with_security_id("sec-a".to_string())
                .with_created_at("2023-06-15T10:00:00Z".into()),
        ];

        let sorted = TransactionSorter::new().sort(&input).unwrap();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["is-1", "ex-1"]);
    }

    #[test]
    fn test_same_day_same_weight_groups_by_security() {
        let input = vec![
            record("b-1", "2023-06-15")
                .with_object_type("TX_STOCK_ISSUANCE".to_string())
                .with_security_id("sec-b".to_string())
                .with_created_at("2023-06-15T08:00:00Z".into()),
            record("a-2", "2023-06-15")
                .with_object_type("TX_STOCK_ISSUANCE".to_string())
                .with_security_id("sec-a".to_string())
                .with_created_at("2023-06-15T11:00:00Z".into()),
            record("a-1", "2023-06-15")
                .with_object_type("TX_STOCK_ISSUANCE".to_string())
                .with_security_id("sec-a".to_string())
                .with_created_at("2023-06-15T09:00:00Z".into()),
        ];

        let sorted = TransactionSorter::new().sort(&input).unwrap();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        // sec-a stays together even though sec-b was created first
        assert_eq!(ids, vec!["a-1", "a-2", "b-1"]);
    }

    #[test]
    fn test_adjustments_lead_their_day() {
        let input = vec![
            record("issue", "2023-06-15")
                .with_object_type("TX_STOCK_ISSUANCE".to_string()),
            record("adjust", "2023-06-15")
                .with_object_type("TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT".to_string()),
        ];

        let sorted = TransactionSorter::new().sort(&input).unwrap();
        assert_eq!(sorted[0].id, "adjust");
    }

    #[test]
    fn test_mixed_date_formats_share_one_timeline() {
        // epoch millis and a zone-less date-time both land on June 14
        let input = vec![
            record("c", "2023-06-16"),
            TransactionRecord::new("a".to_string()).with_date(1686700800000.into()),
            record("b", "2023-06-14T23:00:00"),
        ];

        let sorted = TransactionSorter::new().sort(&input).unwrap();
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }
}
