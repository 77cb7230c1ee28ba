//! Save/load behavior against real files.

use std::fs;
use std::sync::Arc;

use proptest::prelude::*;
use stockroom_core::Quantity;
use stockroom_events::{InMemorySink, Severity};
use stockroom_inventory::{InventoryStore, LoadOutcome, PersistError};
use tempfile::TempDir;

fn test_store() -> (InventoryStore<Arc<InMemorySink>>, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    (InventoryStore::with_sink(Arc::clone(&sink)), sink)
}

#[test]
fn save_then_load_reproduces_mapping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let (mut store, sink) = test_store();
    store.add("apple", 7, None).unwrap();
    store.add("banana", 12, None).unwrap();
    store.add("flour", 2.5, None).unwrap();
    store.save(&path).unwrap();

    let (mut reloaded, _) = test_store();
    assert_eq!(reloaded.load(&path).unwrap(), LoadOutcome::Loaded { items: 3 });

    assert_eq!(reloaded.snapshot(), store.snapshot());
    assert!(matches!(reloaded.quantity("apple"), Quantity::Whole(7)));
    assert!(matches!(reloaded.quantity("flour"), Quantity::Fractional(_)));
    assert!(
        sink.messages_at(Severity::Info)
            .iter()
            .any(|m| m.starts_with("Data saved successfully to "))
    );
}

#[test]
fn load_replaces_existing_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"pear": 4}"#).unwrap();

    let (mut store, _) = test_store();
    store.add("apple", 10, None).unwrap();
    store.load(&path).unwrap();

    assert!(!store.contains("apple"));
    assert_eq!(store.quantity("pear"), Quantity::from(4));
    assert_eq!(store.len(), 1);
}

#[test]
fn saved_file_is_pretty_printed_with_four_spaces() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");

    let (mut store, _) = test_store();
    store.add("apple", 7, None).unwrap();
    store.add("banana", 12, None).unwrap();
    store.save(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "{\n    \"apple\": 7,\n    \"banana\": 12\n}");

    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, serde_json::json!({"apple": 7, "banana": 12}));
}

#[test]
fn load_missing_file_warns_and_keeps_store_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let (mut store, sink) = test_store();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Missing);

    assert!(store.is_empty());
    let warnings = sink.messages_at(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("not found. Starting with empty inventory."));
    assert!(sink.messages_at(Severity::Error).is_empty());
}

#[test]
fn load_invalid_json_preserves_prior_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"apple\": 3,").unwrap();

    let (mut store, sink) = test_store();
    store.add("apple", 10, None).unwrap();
    store.add("banana", 1, None).unwrap();
    let before = store.snapshot();

    match store.load(&path).unwrap_err() {
        PersistError::Malformed { path: p, .. } => assert_eq!(p, path),
        other => panic!("Expected Malformed error, got {other:?}"),
    }
    assert_eq!(store.snapshot(), before);
    assert!(sink.messages_at(Severity::Error)[0].starts_with("Invalid JSON format in "));
}

#[test]
fn load_wrong_shape_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, r#"["apple", "banana"]"#).unwrap();

    let (mut store, _) = test_store();
    store.add("apple", 1, None).unwrap();

    assert!(matches!(store.load(&path), Err(PersistError::Malformed { .. })));
    assert_eq!(store.quantity("apple"), Quantity::from(1));
}

#[test]
fn load_skips_entries_that_break_the_invariant() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(
        &path,
        r#"{"apple": 3, "ghost": 0, "debt": -4, "": 2, "pear": 1.5, "apple": 9}"#,
    )
    .unwrap();

    let (mut store, sink) = test_store();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { items: 2 });

    let entries: Vec<(String, Quantity)> = store
        .iter()
        .map(|(name, qty)| (name.to_string(), qty))
        .collect();
    assert_eq!(
        entries,
        vec![
            ("apple".to_string(), Quantity::from(9)),
            ("pear".to_string(), Quantity::from(1.5)),
        ]
    );
    assert_eq!(sink.messages_at(Severity::Warning).len(), 3);
}

#[test]
fn duplicate_key_is_judged_by_its_last_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"apple": 3, "pear": 2, "apple": -1}"#).unwrap();

    let (mut store, sink) = test_store();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { items: 1 });

    assert!(!store.contains("apple"));
    assert_eq!(store.quantity("apple"), Quantity::ZERO);
    assert_eq!(store.quantity("pear"), Quantity::from(2));
    let warnings = sink.messages_at(Severity::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("Skipping invalid entry 'apple'"));
}

#[test]
fn whitespace_names_survive_a_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"  ": 2, "apple": 1}"#).unwrap();

    let (mut store, sink) = test_store();
    assert_eq!(store.load(&path).unwrap(), LoadOutcome::Loaded { items: 2 });
    assert_eq!(store.quantity("  "), Quantity::from(2));
    assert!(sink.messages_at(Severity::Warning).is_empty());
}

#[test]
fn load_keeps_file_order_for_low_stock() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inventory.json");
    fs::write(&path, r#"{"zucchini": 1, "banana": 10, "apple": 3}"#).unwrap();

    let (mut store, _) = test_store();
    store.load(&path).unwrap();

    assert_eq!(store.low_stock_items(5), vec!["zucchini", "apple"]);
}

#[test]
fn save_to_unwritable_path_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("inventory.json");

    let (mut store, sink) = test_store();
    store.add("apple", 1, None).unwrap();

    assert!(matches!(store.save(&path), Err(PersistError::Io { .. })));
    let errors = sink.messages_at(Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Error saving data to "));
    assert_eq!(store.quantity("apple"), Quantity::from(1));
}

#[test]
fn load_from_directory_is_an_io_error() {
    let dir = TempDir::new().unwrap();

    let (mut store, sink) = test_store();
    store.add("apple", 2, None).unwrap();

    assert!(matches!(store.load(dir.path()), Err(PersistError::Io { .. })));
    assert_eq!(store.quantity("apple"), Quantity::from(2));
    assert_eq!(sink.messages_at(Severity::Error).len(), 1);
}

fn quantity_strategy() -> impl Strategy<Value = Quantity> {
    prop_oneof![
        (1i64..1_000_000).prop_map(Quantity::from),
        (0.001f64..100_000.0).prop_map(Quantity::from),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    /// Property: saving then loading reproduces every name, value and representation.
    #[test]
    fn save_then_load_is_identity(
        entries in prop::collection::vec(("[a-z ]{1,8}", quantity_strategy()), 0..12),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inventory.json");

        let (mut store, _) = test_store();
        for (name, qty) in &entries {
            store.add(name, *qty, None).unwrap();
        }
        store.save(&path).unwrap();

        let (mut reloaded, _) = test_store();
        prop_assert_eq!(reloaded.load(&path).unwrap(), LoadOutcome::Loaded { items: store.len() });

        let original: Vec<_> = store.iter().map(|(n, q)| (n.to_string(), q)).collect();
        let restored: Vec<_> = reloaded.iter().map(|(n, q)| (n.to_string(), q)).collect();
        prop_assert_eq!(&restored, &original);
        for ((_, a), (_, b)) in original.iter().zip(&restored) {
            prop_assert_eq!(std::mem::discriminant(a), std::mem::discriminant(b));
        }
    }
}
