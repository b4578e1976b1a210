//! Sampling "verified" and "feedback" ID lists from a shared pool.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};
use crate::ids::generate_ids;
use crate::rng::SeedSource;

/// Stream id of the sampler; pool IDs use streams `0..pool_size`.
const SAMPLING_STREAM: u64 = u64::MAX;

/// Two ID lists drawn independently from one pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartitionedIds {
    pub verified: Vec<String>,
    pub feedback: Vec<String>,
}

impl PartitionedIds {
    /// Returns `(verified, feedback)`.
    pub fn into_pair(self) -> (Vec<String>, Vec<String>) {
        (self.verified, self.feedback)
    }

    /// Verified IDs that also appear in the feedback list, in verified order.
    pub fn overlap(&self) -> Vec<&str> {
        let feedback: HashSet<&str> = self.feedback.iter().map(String::as_str).collect();
        self.verified
            .iter()
            .map(String::as_str)
            .filter(|id| feedback.contains(id))
            .collect()
    }
}

/// Generates a pool of `pool_size` IDs and samples both lists from it.
///
/// Each list is drawn without replacement and in random order; the two draws
/// are independent, so they may share IDs. The pool uses the same keyed
/// streams as [`generate_ids`], and `seed = None` makes both the pool and the
/// samples non-deterministic.
pub fn partition_ids(
    id_length: usize,
    pool_size: usize,
    n_feedback: usize,
    n_verified: usize,
    seed: Option<u64>,
) -> Result<PartitionedIds> {
    ensure_fits("n_feedback", n_feedback, pool_size)?;
    ensure_fits("n_verified", n_verified, pool_size)?;

    let pool = generate_ids(id_length, pool_size, seed, None)?;
    let mut rng = SeedSource::from(seed).stream(SAMPLING_STREAM);

    let verified = sample(&mut rng, &pool, n_verified);
    let feedback = sample(&mut rng, &pool, n_feedback);

    tracing::debug!(
        pool_size,
        verified = verified.len(),
        feedback = feedback.len(),
        "partitioned id pool"
    );
    Ok(PartitionedIds { verified, feedback })
}

fn ensure_fits(name: &'static str, requested: usize, pool_size: usize) -> Result<()> {
    if requested > pool_size {
        return Err(SynthError::SampleExceedsPool {
            name,
            requested,
            pool_size,
        });
    }
    Ok(())
}

fn sample<R: Rng + ?Sized>(rng: &mut R, pool: &[String], amount: usize) -> Vec<String> {
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}
