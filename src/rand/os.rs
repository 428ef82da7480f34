//! Operating system CSPRNG via `getrandom`.

use super::RandomSource;
use crate::Result;

/// Draws from the OS generator on every call.
///
/// Zero-sized and stateless, so it is safe to create per call and per
/// thread with nothing shared between outputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl OsEntropy {
    /// Confirm the OS source answers before any generation starts.
    pub fn probe() -> Result<Self> {
        getrandom::u64()?;
        Ok(Self)
    }
}

impl RandomSource for OsEntropy {
    #[inline]
    fn uniform(&mut self, bound: usize) -> Result<usize> {
        if bound == 0 {
            return Err(crate::Error::EmptyRange);
        }

        // Rejection sampling: only accept values below the largest multiple
        // of `bound` so the modulo stays uniform.
        let bound = bound as u64;
        let zone = u64::MAX - u64::MAX % bound;
        loop {
            let x = getrandom::u64()?;
            if x < zone {
                return Ok((x % bound) as usize);
            }
        }
    }

    fn name(&self) -> &'static str {
        "getrandom (OS CSPRNG)"
    }
}
