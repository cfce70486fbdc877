use capreplay::{JsonCodec, TimestampValue, TransactionSorter};
use serde_json::json;

// A payload shaped like a real ledger response: camelCase and snake_case
// creation times side by side, mixed date formats, passthrough fields.
const LEDGER_PAGE: &str = r#"[
    {
        "id": "tx-issue-1",
        "object_type": "TX_STOCK_ISSUANCE",
        "date": "2023-06-15",
        "security_id": "sec-common-1",
        "createdAt": "2023-06-15T10:30:00Z",
        "quantity": "10000",
        "share_price": { "amount": "1.25", "currency": "USD" }
    },
    {
        "id": "tx-adjust-1",
        "object_type": "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT",
        "date": 1686787200000,
        "created_at": "2023-06-15T09:00:00",
        "new_shares_authorized": "5000000"
    },
    {
        "id": "tx-exercise-1",
        "object_type": "TX_WARRANT_EXERCISE",
        "date": "2023-06-15T16:45:00-07:00",
        "security_id": "sec-warrant-9",
        "resulting_security_ids": ["sec-common-2"]
    }
]"#;

#[test]
fn test_ledger_page_decodes_with_fields_in_place() {
    let records = JsonCodec::new().transactions_from_json(LEDGER_PAGE).unwrap();
    assert_eq!(records.len(), 3);

    let issuance = &records[0];
    assert_eq!(issuance.id, "tx-issue-1");
    assert_eq!(issuance.object_type.as_deref(), Some("TX_STOCK_ISSUANCE"));
    assert_eq!(issuance.security_id.as_deref(), Some("sec-common-1"));
    assert_eq!(
        issuance.created_at,
        Some(TimestampValue::from("2023-06-15T10:30:00Z"))
    );
    assert_eq!(issuance.created_at_compat, None);
    assert_eq!(issuance.extra.get("quantity"), Some(&json!("10000")));

    let adjustment = &records[1];
    assert_eq!(adjustment.date, Some(TimestampValue::Millis(1686787200000)));
    assert_eq!(
        adjustment.created_at_compat,
        Some(TimestampValue::from("2023-06-15T09:00:00"))
    );
    assert_eq!(adjustment.created_at, None);
}

#[test]
fn test_decoded_page_sorts_directly() {
    let records = JsonCodec::new().transactions_from_json(LEDGER_PAGE).unwrap();
    let sorted = TransactionSorter::new().sort(&records).unwrap();
    let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
    // all same day: adjustment (5), issuance (10), exercise (30)
    assert_eq!(ids, vec!["tx-adjust-1", "tx-issue-1", "tx-exercise-1"]);
}

#[test]
fn test_round_trip_preserves_payload_fields() {
    let codec = JsonCodec::new();
    let records = codec.transactions_from_json(LEDGER_PAGE).unwrap();
    let encoded = codec.transactions_to_json(&records).unwrap();
    let decoded = codec.transactions_from_json(&encoded).unwrap();

    assert_eq!(records, decoded);
    assert_eq!(
        decoded[2].extra.get("resulting_security_ids"),
        Some(&json!(["sec-common-2"]))
    );
}

#[test]
fn test_absent_optional_fields_are_not_emitted() {
    let codec = JsonCodec::new();
    let records = codec
        .transactions_from_json(r#"[{ "id": "tx-1", "date": "2023-06-15" }]"#)
        .unwrap();
    let encoded = codec.transactions_to_json(&records).unwrap();

    assert!(!encoded.contains("object_type"));
    assert!(!encoded.contains("security_id"));
    assert!(!encoded.contains("createdAt"));
    assert!(!encoded.contains("created_at"));
}

#[test]
fn test_record_without_id_is_rejected_at_decode_time() {
    let err = JsonCodec::new()
        .transactions_from_json(r#"[{ "date": "2023-06-15" }]"#)
        .unwrap_err();
    assert!(err.to_string().contains("id"));
}

#[test]
fn test_structured_date_is_rejected_at_decode_time() {
    // wire contract for `date` is string, number, null, or absent
    let err = JsonCodec::new()
        .transactions_from_json(r#"[{ "id": "tx-1", "date": { "year": 2023 } }]"#)
        .unwrap_err();
    assert!(err.to_string().contains("decoding failed"));
}

#[test]
fn test_manifest_decoding_tolerates_unknown_fields() {
    let codec = JsonCodec::new();
    let manifest = codec
        .manifest_from_json(
            r#"{
                "issuer": { "id": "issuer-1" },
                "stockClasses": [{}, {}],
                "generated_by": "ledger-export 2.3"
            }"#,
        )
        .unwrap();

    assert_eq!(manifest.stock_classes.as_ref().map(Vec::len), Some(2));
    assert_eq!(
        manifest.extra.get("generated_by"),
        Some(&json!("ledger-export 2.3"))
    );

    let encoded = codec.manifest_to_json(&manifest).unwrap();
    assert!(encoded.contains("generated_by"));
    assert!(!encoded.contains("stockPlans"));
}
