//! EPA air-quality dataset ingestion.
//!
//! This crate loads the course's air-quality CSV into memory once per path
//! and hands out column lists by logical key.
//!
//! # Features
//!
//! - **Keyed lookup**: `state`, `county` and `aqi` map to the `state_name`,
//!   `county_name` and `aqi` columns; keys are trimmed and case-insensitive
//! - **Projected reads**: only those three columns are parsed, AQI as `f32`
//! - **Interned strings**: state and county names are dictionary-encoded
//! - **Read-through cache**: [`DatasetCache`] keeps one table per resolved
//!   path; [`global_cache`] is the process-wide instance
//!
//! # Example
//!
//! ```ignore
//! use labkit_ingest::{DatasetCache, fetch_default_column};
//!
//! let aqi = fetch_default_column("aqi")?;
//!
//! // Or inject a dedicated cache
//! let cache = DatasetCache::new();
//! let counties = cache.fetch_column("County", "data/epa.csv")?;
//! ```

mod cache;
mod error;
mod key;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Keys and Values ===
pub use key::{ColumnValue, DatasetKey};

// === Table ===
pub use table::{AirQualityTable, CategoricalColumn, read_air_quality_table};

// === Cache ===
pub use cache::{
    DEFAULT_DATASET_PATH, DatasetCache, fetch_column, fetch_default_column, global_cache,
    resolve_dataset_path,
};
