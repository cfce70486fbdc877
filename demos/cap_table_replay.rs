//! Cap Table Replay Example
//!
//! This example demonstrates ordering a cap table transaction ledger:
//! - Decoding a JSON ledger page with mixed timestamp formats
//! - Sorting it into its canonical replay order
//! - Inspecting the sort keys and the ordering diagnostics
//! - Pinning the replay order with a sequence digest
//! - Counting the objects in a cap table manifest

use capreplay::{
    JsonCodec, ManifestObjectCounter, OrderingDiagnostics, SequenceComparator, SequenceHasher,
    SortKeyBuilder, TransactionSorter,
};

const LEDGER_PAGE: &str = r#"[
    {
        "id": "exe-opt-1",
        "object_type": "TX_EQUITY_COMPENSATION_EXERCISE",
        "date": "2023-06-15",
        "security_id": "sec-opt-1",
        "createdAt": "2023-06-15T09:00:00Z"
    },
    {
        "id": "iss-found-1",
        "object_type": "TX_STOCK_ISSUANCE",
        "date": 1682899200000,
        "security_id": "sec-found-1",
        "createdAt": "2023-05-01T11:00:00Z"
    },
    {
        "id": "adj-issuer-1",
        "object_type": "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT",
        "date": "2023-05-01",
        "createdAt": "2023-05-01T09:00:00Z"
    },
    {
        "id": "iss-opt-1",
        "object_type": "TX_EQUITY_COMPENSATION_ISSUANCE",
        "date": "2023-06-15T08:00:00-07:00",
        "security_id": "sec-opt-1",
        "created_at": "2023-06-15T10:00:00"
    },
    {
        "id": "misc-1",
        "object_type": "TX_SPECIAL_GRANT",
        "date": "2023-06-15"
    }
]"#;

const MANIFEST: &str = r#"{
    "issuer": { "id": "issuer-1", "legal_name": "Acme, Inc." },
    "stakeholders": [{ "id": "sh-1" }, { "id": "sh-2" }],
    "stockClasses": [{ "id": "class-common" }],
    "transactions": [{ "id": "exe-opt-1" }, { "id": "iss-found-1" }]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Cap Table Replay Example ===\n");

    // Decode the ledger page
    let codec = JsonCodec::new();
    let ledger = codec.transactions_from_json(LEDGER_PAGE)?;

    println!("Arrival Order:");
    for record in &ledger {
        println!(
            "  {} ({})",
            record.id,
            record.object_type.as_deref().unwrap_or("unclassified"),
        );
    }
    println!();

    // Sort it into the canonical replay order
    let sorter = TransactionSorter::new();
    let mut diagnostics = OrderingDiagnostics::default();
    let key_builder = SortKeyBuilder::new();

    let replay = sorter.sort(&ledger)?;

    println!("Replay Order (day | weight | group | created | id):");
    for record in &replay {
        let key = key_builder.build_with_diagnostics(record, &mut diagnostics)?;
        println!("  {}", key);
    }
    println!();

    // Every placeholder the keys fell back to
    println!("Ordering Diagnostics:");
    if diagnostics.is_empty() {
        println!("  none");
    }
    for event in diagnostics.events() {
        println!("  {}: {:?} ({})", event.transaction_id, event.kind, event.detail);
    }
    println!();

    // Pin the order with a digest and verify determinism
    println!("=== Determinism Verification ===");
    let hasher = SequenceHasher::new();
    let digest = hasher.digest(&replay)?;

    let mut reversed = ledger.clone();
    reversed.reverse();
    let reconstruction = sorter.sort(&reversed)?;
    let reconstruction_digest = hasher.digest(&reconstruction)?;

    println!("  First digest:  {}", digest);
    println!("  Second digest: {}", reconstruction_digest);
    println!("  Digests match: {}", digest == reconstruction_digest);

    let comparison = SequenceComparator::new().compare(&replay, &reconstruction)?;
    println!("  Comparison: {}\n", comparison.summary());

    // Count the objects a manifest carries
    println!("=== Manifest Object Count ===");
    let manifest = codec.manifest_from_json(MANIFEST)?;
    let count = ManifestObjectCounter::new().count(&manifest);
    println!("  Objects in manifest: {}", count);

    Ok(())
}
