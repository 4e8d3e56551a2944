//! Canonical `[min, max]` ranges and the call conventions that resolve to them.
//!
//! Callers describe a domain in one of several shapes: an object-style
//! constraint with optional bounds, the older positional bounds, or a bit
//! width. All of them are resolved here, once, into a [`Constraint`]. Legacy
//! shapes are rewritten into the object shape before resolution so both share
//! a single code path.

use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, Zero};

use crate::config::{GeneratorConfig, MAX_BIT_WIDTH};
use crate::error::{BigIntError, Result};

/// An inclusive, non-empty range of integers
///
/// `min <= max` holds for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawConstraint"))]
pub struct Constraint {
    min: BigInt,
    max: BigInt,
}

impl Constraint {
    /// Create a range, failing when it would be empty
    pub fn new(min: BigInt, max: BigInt) -> Result<Self> {
        if min > max {
            return Err(BigIntError::invalid_constraint(&min, &max));
        }
        Ok(Self { min, max })
    }

    /// Two's complement range of a signed integer with `bits` bits:
    /// `[-2^(bits-1), 2^(bits-1) - 1]`
    ///
    /// `bits` must be in `1..=MAX_BIT_WIDTH`.
    pub fn signed_bits(bits: u64) -> Result<Self> {
        check_bit_width(bits)?;
        let half = BigInt::one() << (bits - 1);
        let min = -&half;
        let max = half - 1u32;
        Ok(Self { min, max })
    }

    /// Range of an unsigned integer with `bits` bits: `[0, 2^bits - 1]`
    ///
    /// `bits` must be in `1..=MAX_BIT_WIDTH`.
    pub fn unsigned_bits(bits: u64) -> Result<Self> {
        check_bit_width(bits)?;
        let max = (BigInt::one() << bits) - 1u32;
        Ok(Self {
            min: BigInt::zero(),
            max,
        })
    }

    /// Lower bound, inclusive
    pub fn min(&self) -> &BigInt {
        &self.min
    }

    /// Upper bound, inclusive
    pub fn max(&self) -> &BigInt {
        &self.max
    }

    /// Whether `value` lies within the range
    pub fn contains(&self, value: &BigInt) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Distance between the bounds, `max - min`
    pub fn span(&self) -> BigUint {
        (&self.max - &self.min).magnitude().clone()
    }

    /// The value of the range with the smallest magnitude
    ///
    /// This is zero when the range admits it, otherwise the bound nearest zero.
    pub fn shrink_target(&self) -> BigInt {
        if self.min.is_positive() {
            self.min.clone()
        } else if self.max.is_negative() {
            self.max.clone()
        } else {
            BigInt::zero()
        }
    }
}

fn check_bit_width(bits: u64) -> Result<()> {
    if bits == 0 || bits > MAX_BIT_WIDTH {
        return Err(BigIntError::InvalidBitWidth { bits });
    }
    Ok(())
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConstraint {
    min: BigInt,
    max: BigInt,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConstraint> for Constraint {
    type Error = BigIntError;

    fn try_from(raw: RawConstraint) -> Result<Self> {
        Constraint::new(raw.min, raw.max)
    }
}

/// Object-style bounds for signed generators; either bound may be omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigIntConstraints {
    /// Lower bound, inclusive
    pub min: Option<BigInt>,
    /// Upper bound, inclusive
    pub max: Option<BigInt>,
}

impl BigIntConstraints {
    /// No bounds at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound
    pub fn with_min(mut self, min: impl Into<BigInt>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: impl Into<BigInt>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Both bounds at once
    pub fn between(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    fn resolve(self, config: &GeneratorConfig) -> Result<Constraint> {
        config.validate()?;
        let full = Constraint::signed_bits(config.unbounded_bits)?;

        // A lone bound beyond the default range widens the other side by its
        // square, so one-sided constraints always resolve to a non-empty range.
        let min = match (self.min, &self.max) {
            (Some(min), _) => min,
            (None, Some(max)) if max.is_negative() => full.min - max * max,
            (None, _) => full.min,
        };
        let max = match self.max {
            Some(max) => max,
            None if min.is_positive() => full.max + &min * &min,
            None => full.max,
        };
        Constraint::new(min, max)
    }
}

/// Object-style bounds for unsigned generators; the lower bound is always zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigUintConstraints {
    /// Upper bound, inclusive
    pub max: Option<BigUint>,
}

impl BigUintConstraints {
    /// No upper bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper bound
    pub fn with_max(mut self, max: impl Into<BigUint>) -> Self {
        self.max = Some(max.into());
        self
    }

    fn resolve(self, config: &GeneratorConfig) -> Result<Constraint> {
        config.validate()?;
        match self.max {
            Some(max) => Constraint::new(BigInt::zero(), BigInt::from(max)),
            None => Constraint::unsigned_bits(config.unbounded_bits),
        }
    }
}

/// Every call shape accepted by the signed entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigIntArgs {
    /// `{min?, max?}`
    Constraints(BigIntConstraints),
    /// Positional `(min, max)`
    Legacy { min: BigInt, max: BigInt },
    /// Two's complement range of the given width
    BitWidth(u64),
}

impl Default for BigIntArgs {
    fn default() -> Self {
        Self::Constraints(BigIntConstraints::default())
    }
}

impl From<BigIntConstraints> for BigIntArgs {
    fn from(constraints: BigIntConstraints) -> Self {
        Self::Constraints(constraints)
    }
}

impl From<(BigInt, BigInt)> for BigIntArgs {
    fn from((min, max): (BigInt, BigInt)) -> Self {
        Self::Legacy { min, max }
    }
}

impl BigIntArgs {
    /// Resolve this call shape into a canonical range
    pub fn normalize(self, config: &GeneratorConfig) -> Result<Constraint> {
        match self {
            Self::Constraints(constraints) => constraints.resolve(config),
            Self::Legacy { min, max } => BigIntConstraints::between(min, max).resolve(config),
            Self::BitWidth(bits) => Constraint::signed_bits(bits),
        }
    }
}

/// Every call shape accepted by the unsigned entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BigUintArgs {
    /// `{max?}`
    Constraints(BigUintConstraints),
    /// Positional `(max)`
    Legacy { max: BigUint },
    /// Range of an unsigned integer of the given width
    BitWidth(u64),
}

impl Default for BigUintArgs {
    fn default() -> Self {
        Self::Constraints(BigUintConstraints::default())
    }
}

impl From<BigUintConstraints> for BigUintArgs {
    fn from(constraints: BigUintConstraints) -> Self {
        Self::Constraints(constraints)
    }
}

impl From<BigUint> for BigUintArgs {
    fn from(max: BigUint) -> Self {
        Self::Legacy { max }
    }
}

impl BigUintArgs {
    /// Resolve this call shape into a canonical range
    pub fn normalize(self, config: &GeneratorConfig) -> Result<Constraint> {
        match self {
            Self::Constraints(constraints) => constraints.resolve(config),
            Self::Legacy { max } => BigUintConstraints::new().with_max(max).resolve(config),
            Self::BitWidth(bits) => Constraint::unsigned_bits(bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(value: i64) -> BigInt {
        BigInt::from(value)
    }

    fn pow2(bits: u64) -> BigInt {
        BigInt::one() << bits
    }

    #[test]
    fn test_constraint_rejects_empty_range() {
        let result = Constraint::new(big(10), big(5));
        assert_eq!(
            result,
            Err(BigIntError::InvalidConstraint {
                min: big(10),
                max: big(5)
            })
        );
    }

    #[test]
    fn test_constraint_accepts_single_value() {
        let constraint = Constraint::new(big(5), big(5)).unwrap();
        assert_eq!(constraint.span(), BigUint::zero());
        assert!(constraint.contains(&big(5)));
        assert!(!constraint.contains(&big(4)));
        assert!(!constraint.contains(&big(6)));
    }

    #[test]
    fn test_signed_bits() {
        let one = Constraint::signed_bits(1).unwrap();
        assert_eq!(one.min(), &big(-1));
        assert_eq!(one.max(), &big(0));

        let eight = Constraint::signed_bits(8).unwrap();
        assert_eq!(eight.min(), &big(-128));
        assert_eq!(eight.max(), &big(127));

        let wide = Constraint::signed_bits(200).unwrap();
        assert_eq!(wide.min(), &-pow2(199));
        assert_eq!(wide.max(), &(pow2(199) - 1));
    }

    #[test]
    fn test_unsigned_bits() {
        let one = Constraint::unsigned_bits(1).unwrap();
        assert_eq!(one.min(), &big(0));
        assert_eq!(one.max(), &big(1));

        let eight = Constraint::unsigned_bits(8).unwrap();
        assert_eq!(eight.max(), &big(255));
    }

    #[test]
    fn test_zero_bit_width_is_rejected() {
        assert_eq!(
            Constraint::signed_bits(0),
            Err(BigIntError::InvalidBitWidth { bits: 0 })
        );
        assert_eq!(
            Constraint::unsigned_bits(0),
            Err(BigIntError::InvalidBitWidth { bits: 0 })
        );
    }

    #[test]
    fn test_oversized_bit_width_is_rejected() {
        for bits in [MAX_BIT_WIDTH + 1, 1 << 40, u64::MAX] {
            assert_eq!(
                Constraint::signed_bits(bits),
                Err(BigIntError::InvalidBitWidth { bits })
            );
            assert_eq!(
                Constraint::unsigned_bits(bits),
                Err(BigIntError::InvalidBitWidth { bits })
            );
        }

        let widest = Constraint::unsigned_bits(MAX_BIT_WIDTH).unwrap();
        assert_eq!(widest.max().bits(), MAX_BIT_WIDTH);
    }

    #[test]
    fn test_shrink_target() {
        let spanning = Constraint::new(big(-5), big(100)).unwrap();
        assert_eq!(spanning.shrink_target(), big(0));

        let positive = Constraint::new(big(7), big(100)).unwrap();
        assert_eq!(positive.shrink_target(), big(7));

        let negative = Constraint::new(big(-100), big(-7)).unwrap();
        assert_eq!(negative.shrink_target(), big(-7));
    }

    #[test]
    fn test_display() {
        let constraint = Constraint::new(big(-3), big(9)).unwrap();
        assert_eq!(format!("{}", constraint), "[-3, 9]");
    }

    #[test]
    fn test_unconstrained_signed_uses_default_width() {
        let config = GeneratorConfig::default();
        let constraint = BigIntArgs::default().normalize(&config).unwrap();
        assert_eq!(constraint.min(), &-pow2(255));
        assert_eq!(constraint.max(), &(pow2(255) - 1));
    }

    #[test]
    fn test_unconstrained_unsigned_uses_default_width() {
        let config = GeneratorConfig::default();
        let constraint = BigUintArgs::default().normalize(&config).unwrap();
        assert_eq!(constraint.min(), &big(0));
        assert_eq!(constraint.max(), &(pow2(256) - 1));
    }

    #[test]
    fn test_unbounded_width_follows_config() {
        let config = GeneratorConfig::new(16, false).unwrap();
        let constraint = BigIntArgs::default().normalize(&config).unwrap();
        assert_eq!(constraint.min(), &big(-32768));
        assert_eq!(constraint.max(), &big(32767));
    }

    #[test]
    fn test_min_only() {
        let config = GeneratorConfig::default();
        let constraint = BigIntArgs::from(BigIntConstraints::new().with_min(-42))
            .normalize(&config)
            .unwrap();
        assert_eq!(constraint.min(), &big(-42));
        assert_eq!(constraint.max(), &(pow2(255) - 1));
    }

    #[test]
    fn test_max_only() {
        let config = GeneratorConfig::default();
        let constraint = BigIntArgs::from(BigIntConstraints::new().with_max(42))
            .normalize(&config)
            .unwrap();
        assert_eq!(constraint.min(), &-pow2(255));
        assert_eq!(constraint.max(), &big(42));
    }

    #[test]
    fn test_min_beyond_default_range_widens_max() {
        let config = GeneratorConfig::new(8, false).unwrap();
        let constraint = BigIntArgs::from(BigIntConstraints::new().with_min(1000))
            .normalize(&config)
            .unwrap();
        assert_eq!(constraint.min(), &big(1000));
        assert_eq!(constraint.max(), &big(127 + 1_000_000));
    }

    #[test]
    fn test_max_beyond_default_range_widens_min() {
        let config = GeneratorConfig::new(8, false).unwrap();
        let constraint = BigIntArgs::from(BigIntConstraints::new().with_max(-1000))
            .normalize(&config)
            .unwrap();
        assert_eq!(constraint.min(), &big(-128 - 1_000_000));
        assert_eq!(constraint.max(), &big(-1000));
    }

    #[test]
    fn test_legacy_matches_object_form() {
        let config = GeneratorConfig::default();
        let object = BigIntArgs::from(BigIntConstraints::between(-7, 300))
            .normalize(&config)
            .unwrap();
        let legacy = BigIntArgs::from((big(-7), big(300)))
            .normalize(&config)
            .unwrap();
        assert_eq!(object, legacy);

        let object = BigUintArgs::from(BigUintConstraints::new().with_max(99u32))
            .normalize(&config)
            .unwrap();
        let legacy = BigUintArgs::from(BigUint::from(99u32))
            .normalize(&config)
            .unwrap();
        assert_eq!(object, legacy);
    }

    #[test]
    fn test_inverted_bounds_fail_for_every_shape() {
        let config = GeneratorConfig::default();
        assert!(matches!(
            BigIntArgs::from(BigIntConstraints::between(10, 5)).normalize(&config),
            Err(BigIntError::InvalidConstraint { .. })
        ));
        assert!(matches!(
            BigIntArgs::from((big(10), big(5))).normalize(&config),
            Err(BigIntError::InvalidConstraint { .. })
        ));
    }

    #[test]
    fn test_bit_width_args() {
        let config = GeneratorConfig::default();
        assert_eq!(
            BigIntArgs::BitWidth(4).normalize(&config).unwrap(),
            Constraint::new(big(-8), big(7)).unwrap()
        );
        assert_eq!(
            BigUintArgs::BitWidth(4).normalize(&config).unwrap(),
            Constraint::new(big(0), big(15)).unwrap()
        );
        assert_eq!(
            BigUintArgs::BitWidth(0).normalize(&config),
            Err(BigIntError::InvalidBitWidth { bits: 0 })
        );
    }

    #[test]
    fn test_oversized_unbounded_bits_is_reported() {
        let config = GeneratorConfig {
            unbounded_bits: 1 << 40,
            verbose: false,
        };
        assert!(matches!(
            BigIntArgs::default().normalize(&config),
            Err(BigIntError::InvalidConfig {
                field: "unbounded_bits",
                ..
            })
        ));
        assert!(matches!(
            BigUintArgs::default().normalize(&config),
            Err(BigIntError::InvalidConfig {
                field: "unbounded_bits",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = GeneratorConfig {
            unbounded_bits: 0,
            verbose: false,
        };
        assert!(matches!(
            BigIntArgs::default().normalize(&config),
            Err(BigIntError::InvalidConfig { .. })
        ));
    }
}
