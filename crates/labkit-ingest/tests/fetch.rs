//! Tests for column fetching against the bundled dataset and temp fixtures.

use std::fs;
use std::io::Write;

use labkit_ingest::{
    ColumnValue, DEFAULT_DATASET_PATH, DatasetCache, IngestError, fetch_column,
    fetch_default_column, global_cache,
};
use tempfile::NamedTempFile;

const BUNDLED_ROWS: usize = 24;

fn bundled_row_count() -> usize {
    let content = fs::read_to_string(DEFAULT_DATASET_PATH).unwrap();
    content.lines().skip(1).filter(|l| !l.trim().is_empty()).count()
}

#[test]
fn every_key_returns_one_value_per_row() {
    assert_eq!(bundled_row_count(), BUNDLED_ROWS);

    for key in ["state", "county", "aqi"] {
        let values = fetch_default_column(key).unwrap();
        assert_eq!(values.len(), BUNDLED_ROWS, "key {key}");
    }
}

#[test]
fn columns_keep_source_order_and_types() {
    let states = fetch_default_column("state").unwrap();
    let counties = fetch_default_column("county").unwrap();
    let aqi = fetch_default_column("aqi").unwrap();

    assert_eq!(states[0], ColumnValue::Text("Arizona".to_string()));
    assert_eq!(counties[0], ColumnValue::Text("Maricopa".to_string()));
    assert_eq!(aqi[0], ColumnValue::Number(7.0));
    assert_eq!(states[BUNDLED_ROWS - 1].as_text(), Some("Texas"));
    assert!(aqi.iter().all(|v| v.as_number().is_some()));
}

#[test]
fn repeated_fetches_return_equal_contents() {
    let first = fetch_column(" STATE ", DEFAULT_DATASET_PATH).unwrap();
    let second = fetch_column("state", DEFAULT_DATASET_PATH).unwrap();

    assert_eq!(first, second);
    assert!(global_cache().contains(DEFAULT_DATASET_PATH));
}

#[test]
fn caller_mutation_does_not_touch_cache() {
    let cache = DatasetCache::new();
    let mut states = cache.fetch_column("state", DEFAULT_DATASET_PATH).unwrap();
    states.clear();
    states.push(ColumnValue::Text("Nowhere".to_string()));

    let again = cache.fetch_column("state", DEFAULT_DATASET_PATH).unwrap();
    assert_eq!(again.len(), BUNDLED_ROWS);
    assert_eq!(again[0].as_text(), Some("Arizona"));
}

#[test]
fn unknown_key_enumerates_valid_keys() {
    let err = fetch_default_column("unknown").unwrap_err();

    assert!(matches!(err, IngestError::UnknownKey { .. }));
    let message = err.to_string();
    for key in ["state", "county", "aqi"] {
        assert!(message.contains(key), "{message}");
    }
}

#[test]
fn missing_file_reports_resolved_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");

    let err = fetch_column("aqi", &missing).unwrap_err();
    match err {
        IngestError::FileNotFound { path } => {
            assert!(path.is_absolute());
            assert!(path.ends_with("absent.csv"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn empty_file_is_data_error() {
    let file = NamedTempFile::new().unwrap();

    let err = DatasetCache::new().fetch_column("aqi", file.path()).unwrap_err();
    assert!(err.is_data_error(), "unexpected error: {err:?}");
}

#[test]
fn distinct_paths_get_distinct_entries() {
    let mut a = NamedTempFile::new().unwrap();
    write!(a, "state_name,county_name,aqi\nOhio,Belmont,5\n").unwrap();
    let mut b = NamedTempFile::new().unwrap();
    write!(b, "state_name,county_name,aqi\nTexas,Harris,7\nIowa,Polk,3\n").unwrap();

    let cache = DatasetCache::new();
    assert_eq!(cache.fetch_column("county", a.path()).unwrap().len(), 1);
    assert_eq!(cache.fetch_column("county", b.path()).unwrap().len(), 2);
    assert_eq!(cache.len(), 2);
}
