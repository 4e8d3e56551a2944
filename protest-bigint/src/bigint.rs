//! Generators for arbitrary-precision integers.
//!
//! Four entry points configure the same [`BigIntGenerator`]:
//!
//! - [`big_int`] for signed values, unbounded unless told otherwise
//! - [`big_uint`] for non-negative values
//! - [`big_int_n`] for two's complement values of a given bit width
//! - [`big_uint_n`] for unsigned values of a given bit width
//!
//! Whatever the call shape, the range is resolved once at construction. Two
//! generators over the same range produce the same values and the same shrinks
//! for the same random state.

use num_bigint::BigInt;

use crate::config::GeneratorConfig;
use crate::constraints::{BigIntArgs, BigUintArgs, Constraint};
use crate::error::Result;
use crate::generator::Generator;
use crate::sampler::UniformRangeSampler;
use crate::shrink::ShrinkSequence;

/// Generator for big integers within a fixed range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigIntGenerator {
    range: Constraint,
    sampler: UniformRangeSampler,
}

impl BigIntGenerator {
    /// Create a generator over an already validated range
    pub fn new(range: Constraint) -> Self {
        let sampler = UniformRangeSampler::new(&range);
        Self { range, sampler }
    }

    /// The range every generated value falls in
    pub fn range(&self) -> &Constraint {
        &self.range
    }

    /// Shrink sequence of `value`, without boxing
    pub fn shrink_sequence(&self, value: &BigInt) -> ShrinkSequence {
        ShrinkSequence::new(value.clone(), &self.range)
    }

    fn from_range(kind: &str, range: Constraint, config: &GeneratorConfig) -> Self {
        if config.verbose {
            eprintln!(
                "{}: resolved range {} ({} bits per draw)",
                kind,
                range,
                range.span().bits()
            );
        }
        Self::new(range)
    }
}

impl Generator<BigInt> for BigIntGenerator {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> BigInt {
        let sample = self.sampler.sample_counted(rng);
        if config.verbose && sample.draws > 1 {
            eprintln!(
                "Rejected {} draws of {} bits before accepting a value in {}",
                sample.draws - 1,
                self.sampler.bits(),
                self.range
            );
        }
        sample.value
    }

    fn shrink(&self, value: &BigInt) -> Box<dyn Iterator<Item = BigInt>> {
        Box::new(self.shrink_sequence(value))
    }

    fn can_generate(&self, value: &BigInt) -> bool {
        self.range.contains(value)
    }
}

/// Signed big integers, unbounded by default
///
/// Accepts [`BigIntConstraints`](crate::BigIntConstraints) (`{min?, max?}`),
/// or the older positional `(min, max)` tuple.
pub fn big_int(args: impl Into<BigIntArgs>) -> Result<BigIntGenerator> {
    big_int_with_config(args, &GeneratorConfig::default())
}

/// Signed big integers, resolving missing bounds with `config`
pub fn big_int_with_config(
    args: impl Into<BigIntArgs>,
    config: &GeneratorConfig,
) -> Result<BigIntGenerator> {
    let range = args.into().normalize(config)?;
    Ok(BigIntGenerator::from_range("big_int", range, config))
}

/// Non-negative big integers, bounded by `2^256 - 1` by default
///
/// Accepts [`BigUintConstraints`](crate::BigUintConstraints) (`{max?}`), or
/// the older positional `max` as a bare `BigUint`.
pub fn big_uint(args: impl Into<BigUintArgs>) -> Result<BigIntGenerator> {
    big_uint_with_config(args, &GeneratorConfig::default())
}

/// Non-negative big integers, resolving a missing bound with `config`
pub fn big_uint_with_config(
    args: impl Into<BigUintArgs>,
    config: &GeneratorConfig,
) -> Result<BigIntGenerator> {
    let range = args.into().normalize(config)?;
    Ok(BigIntGenerator::from_range("big_uint", range, config))
}

/// Signed big integers in `[-2^(bits-1), 2^(bits-1) - 1]`
pub fn big_int_n(bits: u64) -> Result<BigIntGenerator> {
    let config = GeneratorConfig::default();
    let range = BigIntArgs::BitWidth(bits).normalize(&config)?;
    Ok(BigIntGenerator::from_range("big_int_n", range, &config))
}

/// Unsigned big integers in `[0, 2^bits - 1]`
pub fn big_uint_n(bits: u64) -> Result<BigIntGenerator> {
    let config = GeneratorConfig::default();
    let range = BigUintArgs::BitWidth(bits).normalize(&config)?;
    Ok(BigIntGenerator::from_range("big_uint_n", range, &config))
}
