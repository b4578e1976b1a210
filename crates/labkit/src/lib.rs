//! Course-lab utilities: EPA air-quality columns and seeded synthetic data.
//!
//! This crate re-exports the public surface of the workspace:
//!
//! - **Dataset access** ([`labkit_ingest`]): [`fetch_column`] and
//!   [`fetch_default_column`] read `state`, `county` or `aqi` through a
//!   path-keyed [`DatasetCache`]
//! - **Synthetic data** ([`labkit_synth`]): [`generate_ids`],
//!   [`partition_ids`] and [`generate_sales`]
//! - **Logging**: [`logging::init_logging`] installs a `tracing` subscriber
//!
//! # Example
//!
//! ```ignore
//! use labkit::{fetch_default_column, generate_sales, partition_ids};
//!
//! let states = fetch_default_column("state")?;
//! let (verified, feedback) = partition_ids(5, 100, 20, 30, Some(42))?.into_pair();
//! let sales = generate_sales(100, Some(1))?;
//! ```

pub mod logging;

pub use labkit_ingest::{
    AirQualityTable, CategoricalColumn, ColumnValue, DEFAULT_DATASET_PATH, DatasetCache,
    DatasetKey, IngestError, fetch_column, fetch_default_column, global_cache,
};
pub use labkit_synth::{
    DEFAULT_CHARACTERS, DEFAULT_ID_LENGTH, IdOptions, LOGNORMAL_LOCATION, LOGNORMAL_SCALE,
    MAX_PURCHASES_PER_CUSTOMER, PartitionedIds, SalesProfile, SeedSource, SynthError,
    generate_ids, generate_sales, partition_ids,
};

/// Any error raised by the lab utilities.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Synth(#[from] SynthError),
}

pub type Result<T> = std::result::Result<T, Error>;
