//! Uniform sampling over arbitrary-precision ranges.
//!
//! Draws exactly as many random bits as the span needs and rejects draws that
//! land past the span. The accepted fraction is always above one half, so the
//! expected number of draws stays below two.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;
use rand::{Rng, RngCore};

use crate::constraints::Constraint;

/// Draws values uniformly from a fixed range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniformRangeSampler {
    base: BigInt,
    span: BigUint,
    bits: u64,
}

/// A sampled value together with the number of draws it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// The value, inside the sampler's range
    pub value: BigInt,
    /// Draws taken from the random source, including the accepted one
    pub draws: usize,
}

impl UniformRangeSampler {
    /// Create a sampler for the given range
    pub fn new(range: &Constraint) -> Self {
        let span = range.span();
        Self {
            base: range.min().clone(),
            bits: span.bits(),
            span,
        }
    }

    /// Number of random bits consumed per draw
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Draw one value from the range
    pub fn sample(&self, rng: &mut dyn RngCore) -> BigInt {
        self.sample_counted(rng).value
    }

    /// Draw one value from the range, reporting how many draws were needed
    pub fn sample_counted(&self, rng: &mut dyn RngCore) -> Sample {
        if self.span.is_zero() {
            return Sample {
                value: self.base.clone(),
                draws: 0,
            };
        }

        let mut draws = 0;
        loop {
            draws += 1;
            let offset = random_biguint(rng, self.bits);
            if offset <= self.span {
                return Sample {
                    value: &self.base + BigInt::from(offset),
                    draws,
                };
            }
        }
    }
}

/// Uniformly generate a random [`BigUint`] in `[0, 2^bits)`
fn random_biguint(rng: &mut dyn RngCore, bits: u64) -> BigUint {
    let digits = bits / 32;
    let rem = bits % 32;
    let len = (digits + u64::from(rem > 0)) as usize;
    let mut data = vec![0u32; len];
    rng.fill(&mut data[..]);
    if rem > 0 {
        let last = data.len() - 1;
        data[last] >>= 32 - rem;
    }
    BigUint::new(data)
}
