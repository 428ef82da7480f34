//! Adapter for generators from the `rand` ecosystem.

use ::rand::{CryptoRng, Rng};

use super::RandomSource;
use crate::Result;

/// Wraps any [`CryptoRng`] as a [`RandomSource`].
///
/// The `CryptoRng` bound keeps statistical-only generators out. Seeded
/// instances are meant for reproducible tests, not for real credentials.
#[derive(Debug, Clone)]
pub struct CryptoRngSource<R>(R);

impl<R: CryptoRng> CryptoRngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: CryptoRng> RandomSource for CryptoRngSource<R> {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(crate::Error::EmptyRange);
        }
        Ok(self.0.random_range(0..bound))
    }

    fn name(&self) -> &'static str {
        "rand CryptoRng"
    }
}

#[cfg(test)]
mod tests {
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    use super::*;

    #[test]
    fn same_seed_same_draws() {
        let mut a = CryptoRngSource::new(StdRng::seed_from_u64(42));
        let mut b = CryptoRngSource::new(StdRng::seed_from_u64(42));
        for _ in 0..32 {
            assert_eq!(a.uniform(58).unwrap(), b.uniform(58).unwrap());
        }
    }

    #[test]
    fn zero_bound_is_an_error() {
        let mut rng = CryptoRngSource::new(StdRng::seed_from_u64(1));
        assert!(matches!(rng.uniform(0), Err(crate::Error::EmptyRange)));
    }
}
