//! Path-keyed cache of parsed air-quality tables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

use crate::error::{IngestError, Result};
use crate::key::{ColumnValue, DatasetKey};
use crate::table::{AirQualityTable, read_air_quality_table};

/// Dataset shipped with this crate.
pub const DEFAULT_DATASET_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/c2_epa_air_quality.csv");

/// Read-through cache holding one parsed table per resolved dataset path.
///
/// Loading happens under the lock, so concurrent first requests for the same
/// path read the file once.
#[derive(Debug, Default)]
pub struct DatasetCache {
    tables: Mutex<HashMap<PathBuf, Arc<AirQualityTable>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values of `key` from the dataset at `path`.
    ///
    /// `key` is trimmed and lower-cased before lookup. The returned vector is
    /// a fresh copy; the cached table is never handed out mutably.
    pub fn fetch_column(&self, key: &str, path: impl AsRef<Path>) -> Result<Vec<ColumnValue>> {
        let key: DatasetKey = key.parse()?;
        let table = self.table(path)?;
        Ok(table.column_values(key))
    }

    /// Returns the cached table for `path`, loading it on first use.
    pub fn table(&self, path: impl AsRef<Path>) -> Result<Arc<AirQualityTable>> {
        let resolved = resolve_dataset_path(path.as_ref())?;
        let mut tables = self
            .tables
            .lock()
            .map_err(|_| IngestError::CachePoisoned)?;

        if let Some(table) = tables.get(&resolved) {
            tracing::debug!(path = %resolved.display(), "dataset cache hit");
            return Ok(Arc::clone(table));
        }

        let start = Instant::now();
        let table = Arc::new(read_air_quality_table(&resolved)?);
        tracing::info!(
            path = %resolved.display(),
            rows = table.height(),
            elapsed = ?start.elapsed(),
            "loaded air-quality dataset"
        );
        tables.insert(resolved, Arc::clone(&table));
        Ok(table)
    }

    /// Returns true if the table for `path` is already cached.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        let Ok(resolved) = resolve_dataset_path(path.as_ref()) else {
            return false;
        };
        self.entries().contains_key(&resolved)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table.
    pub fn clear(&self) -> Result<()> {
        self.tables
            .lock()
            .map_err(|_| IngestError::CachePoisoned)?
            .clear();
        Ok(())
    }

    /// Read-only view of the map; a poisoned lock still holds valid entries.
    fn entries(&self) -> MutexGuard<'_, HashMap<PathBuf, Arc<AirQualityTable>>> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

static GLOBAL_CACHE: OnceLock<DatasetCache> = OnceLock::new();

/// Returns the process-wide cache used by [`fetch_column`].
pub fn global_cache() -> &'static DatasetCache {
    GLOBAL_CACHE.get_or_init(DatasetCache::new)
}

/// Fetches a column through the process-wide cache.
///
/// # Example
///
/// ```ignore
/// use labkit_ingest::{DEFAULT_DATASET_PATH, fetch_column};
///
/// let states = fetch_column("state", DEFAULT_DATASET_PATH)?;
/// ```
pub fn fetch_column(key: &str, path: impl AsRef<Path>) -> Result<Vec<ColumnValue>> {
    global_cache().fetch_column(key, path)
}

/// Fetches a column of the bundled dataset through the process-wide cache.
pub fn fetch_default_column(key: &str) -> Result<Vec<ColumnValue>> {
    fetch_column(key, DEFAULT_DATASET_PATH)
}

/// Resolves `path` to an absolute path of an existing file.
///
/// A leading `~/` expands to `$HOME`; relative paths resolve against the
/// current directory.
pub fn resolve_dataset_path(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .map_err(|e| IngestError::FileRead {
                path: expanded.clone(),
                source: e,
            })?
            .join(expanded)
    };

    match std::fs::canonicalize(&absolute) {
        Ok(resolved) if resolved.is_file() => Ok(resolved),
        Ok(resolved) => Err(IngestError::FileNotFound { path: resolved }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(IngestError::FileNotFound { path: absolute })
        }
        Err(e) => Err(IngestError::FileRead {
            path: absolute,
            source: e,
        }),
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}
