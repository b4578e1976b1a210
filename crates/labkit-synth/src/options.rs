//! Configuration options for synthetic data generation.

use serde::{Deserialize, Serialize};

/// Default number of characters per generated ID.
pub const DEFAULT_ID_LENGTH: usize = 5;

/// Default ID alphabet: lowercase ASCII letters, then ASCII digits.
pub const DEFAULT_CHARACTERS: [char; 36] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// Location (mean of the underlying normal) of the purchase-amount distribution.
pub const LOGNORMAL_LOCATION: f64 = 2.5;

/// Scale (standard deviation of the underlying normal) of the purchase-amount distribution.
pub const LOGNORMAL_SCALE: f64 = 1.5;

/// Upper bound on purchases drawn per customer.
pub const MAX_PURCHASES_PER_CUSTOMER: usize = 6;

/// Options for ID generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdOptions {
    /// Characters per ID. Must be at least 1.
    pub length: usize,

    /// Alphabet each character is drawn from.
    pub characters: Vec<char>,

    /// Base seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for IdOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_ID_LENGTH,
            characters: DEFAULT_CHARACTERS.to_vec(),
            seed: Some(0),
        }
    }
}

impl IdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    #[must_use]
    pub fn with_characters(mut self, characters: impl IntoIterator<Item = char>) -> Self {
        self.characters = characters.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// Shape of the synthetic purchase histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesProfile {
    /// Log-normal location.
    pub location: f64,

    /// Log-normal scale. Must be finite and non-negative.
    pub scale: f64,

    /// Purchases per customer are drawn uniformly from `0..=max_purchases`.
    pub max_purchases: usize,

    /// Round amounts to cents (never below 0.01).
    pub round_to_cents: bool,
}

impl Default for SalesProfile {
    fn default() -> Self {
        Self {
            location: LOGNORMAL_LOCATION,
            scale: LOGNORMAL_SCALE,
            max_purchases: MAX_PURCHASES_PER_CUSTOMER,
            round_to_cents: true,
        }
    }
}

impl SalesProfile {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_distribution(mut self, location: f64, scale: f64) -> Self {
        self.location = location;
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_max_purchases(mut self, max_purchases: usize) -> Self {
        self.max_purchases = max_purchases;
        self
    }

    #[must_use]
    pub fn with_round_to_cents(mut self, enable: bool) -> Self {
        self.round_to_cents = enable;
        self
    }
}
