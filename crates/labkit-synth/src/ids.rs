//! Synthetic ID generation.

use rand::Rng;

use crate::error::{Result, SynthError};
use crate::options::{DEFAULT_CHARACTERS, IdOptions};
use crate::rng::SeedSource;

/// Generates `count` IDs of `id_length` characters.
///
/// ID `i` is drawn from its own stream keyed by `(seed, i)`, so a longer
/// request extends a shorter one without changing it. `seed = None` uses OS
/// entropy; `characters = None` uses [`DEFAULT_CHARACTERS`]. Characters are
/// drawn with replacement and IDs may repeat.
///
/// # Example
///
/// ```ignore
/// use labkit_synth::generate_ids;
///
/// let ids = generate_ids(5, 3, Some(42), None)?;
/// assert_eq!(ids, generate_ids(5, 3, Some(42), None)?);
/// ```
pub fn generate_ids(
    id_length: usize,
    count: usize,
    seed: Option<u64>,
    characters: Option<&[char]>,
) -> Result<Vec<String>> {
    if id_length < 1 {
        return Err(SynthError::OutOfRange {
            name: "id_length",
            minimum: 1,
            value: id_length,
        });
    }
    let pool = match characters {
        Some([]) => return Err(SynthError::EmptyCharacterPool),
        Some(pool) => pool,
        None => DEFAULT_CHARACTERS.as_slice(),
    };

    let source = SeedSource::from(seed);
    let ids = (0..count as u64)
        .map(|index| {
            let mut rng = source.stream(index);
            (0..id_length)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .collect::<String>()
        })
        .collect::<Vec<_>>();

    tracing::trace!(count, id_length, seeded = source.is_fixed(), "generated ids");
    Ok(ids)
}

impl IdOptions {
    /// Generates `count` IDs with these options.
    pub fn generate(&self, count: usize) -> Result<Vec<String>> {
        generate_ids(self.length, count, self.seed, Some(&self.characters))
    }
}
