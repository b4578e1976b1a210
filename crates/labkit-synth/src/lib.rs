//! Seeded synthetic data for course labs.
//!
//! This crate generates reproducible fake data: short random IDs, verified
//! and feedback ID lists sampled from a generated pool, and per-customer
//! purchase histories with log-normally distributed amounts.
//!
//! # Determinism
//!
//! All generators take `seed: Option<u64>`. With `Some(seed)`, element `i`
//! of every output is drawn from its own ChaCha8 stream keyed by
//! `(seed, i)` (see [`SeedSource`]), so outputs are reproducible and a
//! shorter request is always a prefix of a longer one. `None` uses OS
//! entropy.
//!
//! # Example
//!
//! ```ignore
//! use labkit_synth::{generate_ids, generate_sales, partition_ids};
//!
//! let ids = generate_ids(5, 10, Some(42), None)?;
//! let lists = partition_ids(5, 100, 20, 30, Some(42))?;
//! let sales = generate_sales(100, Some(1))?;
//! ```

mod error;
mod ids;
mod options;
mod partition;
mod rng;
mod sales;

// === Error Types ===
pub use error::{Result, SynthError};

// === Options ===
pub use options::{
    DEFAULT_CHARACTERS, DEFAULT_ID_LENGTH, IdOptions, LOGNORMAL_LOCATION, LOGNORMAL_SCALE,
    MAX_PURCHASES_PER_CUSTOMER, SalesProfile,
};

// === Random Streams ===
pub use rng::SeedSource;

// === Generators ===
pub use ids::generate_ids;
pub use partition::{PartitionedIds, partition_ids};
pub use sales::generate_sales;
