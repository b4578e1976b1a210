//! Synthetic per-customer purchase histories.

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

use crate::error::{Result, SynthError};
use crate::options::SalesProfile;
use crate::rng::SeedSource;

/// Smallest amount kept after rounding to cents.
const MIN_ROUNDED_AMOUNT: f64 = 0.01;

/// Generates purchase histories for `n_customers` with the default profile.
///
/// Every customer gets 0 to 6 purchases; amounts follow a log-normal
/// distribution (location 2.5, scale 1.5) rounded to cents.
pub fn generate_sales(n_customers: usize, seed: Option<u64>) -> Result<Vec<Vec<f64>>> {
    SalesProfile::default().generate(n_customers, seed)
}

impl SalesProfile {
    /// Generates purchase histories for `n_customers`.
    ///
    /// Customer `i` draws from the stream keyed by `(seed, i)`.
    pub fn generate(&self, n_customers: usize, seed: Option<u64>) -> Result<Vec<Vec<f64>>> {
        let distribution = self.distribution()?;
        let source = SeedSource::from(seed);

        let histories: Vec<Vec<f64>> = (0..n_customers as u64)
            .map(|customer| {
                let mut rng = source.stream(customer);
                let purchases = rng.random_range(0..=self.max_purchases);
                (0..purchases)
                    .map(|_| self.finish_amount(distribution.sample(&mut rng)))
                    .collect()
            })
            .collect();

        tracing::debug!(
            customers = n_customers,
            purchases = histories.iter().map(Vec::len).sum::<usize>(),
            seeded = source.is_fixed(),
            "generated sales data"
        );
        Ok(histories)
    }

    fn distribution(&self) -> Result<LogNormal<f64>> {
        if !self.location.is_finite() {
            return Err(SynthError::InvalidDistribution {
                message: format!("location must be finite, received {}", self.location),
            });
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(SynthError::InvalidDistribution {
                message: format!(
                    "scale must be finite and non-negative, received {}",
                    self.scale
                ),
            });
        }
        LogNormal::new(self.location, self.scale).map_err(|e| SynthError::InvalidDistribution {
            message: e.to_string(),
        })
    }

    fn finish_amount(&self, amount: f64) -> f64 {
        if self.round_to_cents {
            ((amount * 100.0).round() / 100.0).max(MIN_ROUNDED_AMOUNT)
        } else {
            amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_customers_is_empty() {
        assert!(generate_sales(0, Some(1)).unwrap().is_empty());
        assert!(generate_sales(0, None).unwrap().is_empty());
    }

    #[test]
    fn amounts_are_cents() {
        let sales = generate_sales(50, Some(8)).unwrap();
        for amount in sales.iter().flatten() {
            let cents = amount * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{amount}");
            assert!(*amount >= MIN_ROUNDED_AMOUNT);
        }
    }

    #[test]
    fn unrounded_amounts_are_positive() {
        let profile = SalesProfile::new().with_round_to_cents(false);
        let sales = profile.generate(50, Some(8)).unwrap();
        assert!(sales.iter().flatten().all(|a| *a > 0.0));
    }

    #[test]
    fn zero_scale_is_constant() {
        let profile = SalesProfile::new()
            .with_distribution(0.0, 0.0)
            .with_round_to_cents(false);
        let sales = profile.generate(20, Some(2)).unwrap();
        assert!(sales.iter().flatten().all(|a| (*a - 1.0).abs() < 1e-12));
    }

    #[test]
    fn max_purchases_caps_counts() {
        let profile = SalesProfile::new().with_max_purchases(0);
        let sales = profile.generate(10, Some(4)).unwrap();
        assert!(sales.iter().all(Vec::is_empty));
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let profile = SalesProfile::new().with_distribution(2.5, -1.0);
        let err = profile.generate(1, Some(0)).unwrap_err();
        assert!(matches!(err, SynthError::InvalidDistribution { .. }));

        let profile = SalesProfile::new().with_distribution(f64::NAN, 1.0);
        assert!(profile.generate(1, Some(0)).is_err());
    }
}
