//! Tests for the Record Store
//!
//! These tests verify:
//! - Open/create in read-write and read-only modes
//! - Append monotonicity (count +1, length +240)
//! - Scan completeness, order, and restartability
//! - Trailing partial record policies
//! - Close idempotence and closed-store errors

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use productstore::{
    Config, OpenMode, Product, RecordStore, StoreError, SyncStrategy, TrailingDataPolicy,
    RECORD_SIZE,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("products.dat");
    (temp_dir, path)
}

fn numbered_product(i: usize) -> Product {
    Product::new(
        format!("P{:05}", i),
        format!("Product {}", i),
        format!("Description {}", i),
        i as f64 * 1.25,
    )
    .unwrap()
}

fn file_len(path: &Path) -> u64 {
    fs::metadata(path).unwrap().len()
}

fn append_garbage(path: &Path, bytes: usize) {
    let mut file = OpenOptions::new().append(true).open(path).unwrap();
    file.write_all(&vec![0xAB; bytes]).unwrap();
}

fn store_with_records(path: &Path, count: usize) -> RecordStore {
    let mut store = RecordStore::open(path, OpenMode::ReadWrite).unwrap();
    for i in 0..count {
        store.append(&numbered_product(i)).unwrap();
    }
    store
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_creates_missing_file() {
    let (_temp, path) = setup_temp_store();
    assert!(!path.exists());

    let store = RecordStore::open(&path, OpenMode::ReadWrite).unwrap();

    assert!(path.exists());
    assert!(store.is_open());
    assert_eq!(store.record_count(), 0);
    assert_eq!(file_len(&path), 0);
}

#[test]
fn test_open_read_only_missing_file_fails() {
    let (_temp, path) = setup_temp_store();

    let result = RecordStore::open(&path, OpenMode::ReadOnly);

    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(!path.exists());
}

#[test]
fn test_open_counts_existing_records() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 7).close().unwrap();

    let store = RecordStore::open(&path, OpenMode::ReadWrite).unwrap();
    assert_eq!(store.record_count(), 7);

    let reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    assert_eq!(reader.record_count(), 7);
}

#[test]
fn test_open_with_config() {
    let (_temp, path) = setup_temp_store();

    let config = Config::builder()
        .data_file(&path)
        .sync_strategy(SyncStrategy::OnClose)
        .build();
    let store = RecordStore::open_with(config).unwrap();

    assert_eq!(store.path(), path.as_path());
    assert_eq!(store.mode(), OpenMode::ReadWrite);
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.data_file, PathBuf::from("products.dat"));
    assert_eq!(config.mode, OpenMode::ReadWrite);
    assert_eq!(config.sync_strategy, SyncStrategy::EveryWrite);
    assert_eq!(config.trailing_data, TrailingDataPolicy::Reject);
}

// =============================================================================
// Append Tests
// =============================================================================

#[test]
fn test_append_grows_file_by_one_record() {
    let (_temp, path) = setup_temp_store();
    let mut store = RecordStore::open(&path, OpenMode::ReadWrite).unwrap();

    for i in 0..5 {
        let before_count = store.record_count();
        let before_len = file_len(&path);

        let index = store.append(&numbered_product(i)).unwrap();

        assert_eq!(index, before_count);
        assert_eq!(store.record_count(), before_count + 1);
        assert_eq!(file_len(&path), before_len + RECORD_SIZE as u64);
    }
}

#[test]
fn test_second_record_starts_at_record_size() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 2).close().unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 2 * 240);

    // id of record 1 ("P00001") begins at byte 240, not 232
    let id_units: Vec<u16> = bytes[240..252]
        .chunks(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(String::from_utf16(&id_units).unwrap(), "P00001");
}

#[test]
fn test_append_after_reopen_continues() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 3).close().unwrap();

    let mut store = RecordStore::open(&path, OpenMode::ReadWrite).unwrap();
    let index = store.append(&numbered_product(3)).unwrap();

    assert_eq!(index, 3);
    assert_eq!(store.scan_all().unwrap().len(), 4);
}

#[test]
fn test_append_invalid_product_does_not_touch_file() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 2);
    let len_before = file_len(&path);

    let too_long = Product::new("LONG01", "n".repeat(36), "desc", 1.0).unwrap();
    let result = store.append(&too_long);

    assert!(matches!(result, Err(StoreError::Validation(_))));
    assert_eq!(store.record_count(), 2);
    assert_eq!(file_len(&path), len_before);
}

#[test]
fn test_append_read_only_fails() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 1).close().unwrap();

    let mut reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    let result = reader.append(&numbered_product(9));

    assert!(matches!(result, Err(StoreError::ReadOnly)));
    assert_eq!(file_len(&path), RECORD_SIZE as u64);
}

#[test]
fn test_append_sync_on_close() {
    let (_temp, path) = setup_temp_store();
    let config = Config::builder()
        .data_file(&path)
        .sync_strategy(SyncStrategy::OnClose)
        .build();

    let mut store = RecordStore::open_with(config).unwrap();
    for i in 0..10 {
        store.append(&numbered_product(i)).unwrap();
    }
    store.close().unwrap();

    let mut reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    assert_eq!(reader.scan_all().unwrap().len(), 10);
}

// =============================================================================
// Scan Tests
// =============================================================================

#[test]
fn test_scan_empty_store() {
    let (_temp, path) = setup_temp_store();
    let mut store = RecordStore::open(&path, OpenMode::ReadWrite).unwrap();

    assert_eq!(store.scan().unwrap().count(), 0);
}

#[test]
fn test_scan_returns_all_in_order() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 50);

    let products = store.scan_all().unwrap();

    assert_eq!(products.len(), 50);
    for (i, p) in products.iter().enumerate() {
        assert_eq!(p, &numbered_product(i));
    }
}

#[test]
fn test_scan_is_restartable() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 3);

    let first: Vec<Product> = store.scan().unwrap().take(2).map(|r| r.unwrap()).collect();
    let second = store.scan_all().unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 3);
    assert_eq!(first[0], second[0]);
}

#[test]
fn test_scan_is_lazy_and_bounded() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 4);

    let mut iter = store.scan().unwrap();
    assert_eq!(iter.size_hint(), (0, Some(4)));

    iter.next().unwrap().unwrap();
    assert_eq!(iter.size_hint(), (0, Some(3)));
}

#[test]
fn test_scan_sees_records_from_other_handle() {
    let (_temp, path) = setup_temp_store();
    let mut writer = store_with_records(&path, 2);
    let mut reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    assert_eq!(reader.record_count(), 2);

    writer.append(&numbered_product(2)).unwrap();

    let products = reader.scan_all().unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(reader.record_count(), 3);
}

#[test]
fn test_scan_stops_after_decode_error() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 3).close().unwrap();

    // Overwrite record 1's name with a lone surrogate
    let mut bytes = fs::read(&path).unwrap();
    let name_start = RECORD_SIZE + 12;
    bytes[name_start] = 0xDC;
    bytes[name_start + 1] = 0x00;
    fs::write(&path, &bytes).unwrap();

    let mut store = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    let results: Vec<_> = store.scan().unwrap().collect();

    // Record 0 ok, record 1 fails, iteration ends
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    match &results[1] {
        Err(StoreError::Corruption(msg)) => assert!(msg.contains("record 1")),
        other => panic!("expected corruption, got {:?}", other),
    }

    // Collecting gives the error, never a partial list
    assert!(store.scan_all().is_err());
}

// =============================================================================
// Random Access Tests
// =============================================================================

#[test]
fn test_read_at() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 10);

    assert_eq!(store.read_at(0).unwrap(), numbered_product(0));
    assert_eq!(store.read_at(7).unwrap(), numbered_product(7));
    assert_eq!(store.read_at(9).unwrap(), numbered_product(9));
}

#[test]
fn test_read_at_out_of_range() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 2);

    let result = store.read_at(2);
    assert!(matches!(
        result,
        Err(StoreError::RecordOutOfRange { index: 2, count: 2 })
    ));
}

// =============================================================================
// Trailing Partial Record Tests
// =============================================================================

#[test]
fn test_partial_record_rejected_by_default() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 2).close().unwrap();
    append_garbage(&path, 100);

    let rw = RecordStore::open(&path, OpenMode::ReadWrite);
    assert!(matches!(rw, Err(StoreError::Corruption(_))));

    let ro = RecordStore::open(&path, OpenMode::ReadOnly);
    assert!(matches!(ro, Err(StoreError::Corruption(_))));
}

#[test]
fn test_partial_record_ignored_for_read_only() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 2).close().unwrap();
    append_garbage(&path, 100);

    let config = Config::builder()
        .data_file(&path)
        .read_only()
        .trailing_data(TrailingDataPolicy::Ignore)
        .build();
    let mut store = RecordStore::open_with(config).unwrap();

    assert_eq!(store.record_count(), 2);
    assert_eq!(store.scan_all().unwrap().len(), 2);
}

#[test]
fn test_partial_record_never_ignored_for_read_write() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 1).close().unwrap();
    append_garbage(&path, 5);

    let config = Config::builder()
        .data_file(&path)
        .trailing_data(TrailingDataPolicy::Ignore)
        .build();

    assert!(matches!(
        RecordStore::open_with(config),
        Err(StoreError::Corruption(_))
    ));
}

#[test]
fn test_partial_record_detected_at_scan_time() {
    let (_temp, path) = setup_temp_store();
    store_with_records(&path, 2).close().unwrap();

    let mut reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    append_garbage(&path, 10);

    assert!(matches!(reader.scan(), Err(StoreError::Corruption(_))));
}

#[test]
fn test_append_refuses_misaligned_end() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 1);
    append_garbage(&path, 3);

    let result = store.append(&numbered_product(1));

    assert!(matches!(result, Err(StoreError::Corruption(_))));
    assert_eq!(file_len(&path), RECORD_SIZE as u64 + 3);
}

// =============================================================================
// Close Tests
// =============================================================================

#[test]
fn test_close_is_idempotent() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 1);

    store.close().unwrap();
    store.close().unwrap();

    assert!(!store.is_open());
}

#[test]
fn test_operations_after_close_fail() {
    let (_temp, path) = setup_temp_store();
    let mut store = store_with_records(&path, 1);
    store.close().unwrap();

    assert!(matches!(store.append(&numbered_product(1)), Err(StoreError::Closed)));
    assert!(matches!(store.scan(), Err(StoreError::Closed)));
    assert!(matches!(store.read_at(0), Err(StoreError::Closed)));
    assert!(matches!(store.refresh(), Err(StoreError::Closed)));
}

#[test]
fn test_drop_releases_handle() {
    let (_temp, path) = setup_temp_store();
    {
        let config = Config::builder()
            .data_file(&path)
            .sync_strategy(SyncStrategy::OnClose)
            .build();
        let mut store = RecordStore::open_with(config).unwrap();
        store.append(&numbered_product(0)).unwrap();
        // Dropped without close()
    }

    let mut reader = RecordStore::open(&path, OpenMode::ReadOnly).unwrap();
    assert_eq!(reader.scan_all().unwrap(), vec![numbered_product(0)]);
}
