//! Random index generation for password assembly.
//!
//! Every draw made while building a value goes through [`RandomSource`].
//! The default source is [`OsEntropy`], which reads the operating system
//! CSPRNG on each call and keeps no state of its own.

mod adapter;
mod os;

pub use adapter::CryptoRngSource;
pub use os::OsEntropy;

use crate::Result;

// =============================================================================
// Capability
// =============================================================================

/// A source of uniformly distributed indices suitable for secret material.
pub trait RandomSource {
    /// Return an integer in `[0, bound)`.
    ///
    /// Fails with [`crate::Error::EmptyRange`] when `bound` is zero and
    /// with [`crate::Error::Entropy`] when the underlying generator does.
    fn uniform(&mut self, bound: usize) -> Result<usize>;

    /// Short human-readable name for status output.
    fn name(&self) -> &'static str;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        (**self).uniform(bound)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Pick one element of `items` uniformly.
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Result<&'a T> {
    let idx = rng.uniform(items.len())?;
    Ok(&items[idx])
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, items: &mut [T]) -> Result<()> {
    for i in (1..items.len()).rev() {
        let j = rng.uniform(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    use super::*;

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = CryptoRngSource::new(StdRng::seed_from_u64(11));
        let mut items: Vec<u32> = (0..64).collect();
        shuffle(&mut rng, &mut items).unwrap();

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_moves_elements() {
        let mut rng = OsEntropy;
        let original: Vec<u32> = (0..64).collect();
        let mut items = original.clone();
        shuffle(&mut rng, &mut items).unwrap();
        assert_ne!(items, original);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = OsEntropy;
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty).unwrap();
        let mut one = [7u8];
        shuffle(&mut rng, &mut one).unwrap();
        assert_eq!(one, [7]);
    }

    #[test]
    fn choose_rejects_empty_slice() {
        let mut rng = OsEntropy;
        let empty: [char; 0] = [];
        assert!(matches!(
            choose(&mut rng, &empty),
            Err(crate::Error::EmptyRange)
        ));
    }

    #[test]
    fn shuffle_positions_are_unbiased() {
        // Each element should land in each slot about 1/4 of the time.
        let mut rng = OsEntropy;
        let mut counts = [[0u32; 4]; 4];
        let trials = 8000;
        for _ in 0..trials {
            let mut items = [0usize, 1, 2, 3];
            shuffle(&mut rng, &mut items).unwrap();
            for (slot, &item) in items.iter().enumerate() {
                counts[item][slot] += 1;
            }
        }
        let expected = trials as f64 / 4.0;
        for row in counts {
            for n in row {
                assert!((n as f64 - expected).abs() < expected * 0.1, "{n}");
            }
        }
    }
}
