//! Shrinking functionality for minimizing failing big integer values.
//!
//! "Smaller" means smaller magnitude: `c` is a shrink of `v` when
//! `|c| < |v|`. The sequence for `v` starts at the value of the range with the
//! smallest magnitude (zero, or the bound nearest zero) and then bisects back
//! toward `v`, each midpoint truncated toward zero. It stops as soon as a
//! midpoint repeats the previous candidate, so its length is bounded by the
//! bit length of `|v - target|` plus one.

use std::iter::FusedIterator;

use num_bigint::BigInt;

use crate::constraints::Constraint;

/// Lazy, finite sequence of shrink candidates for one value
///
/// Cloning the sequence, or building a new one from the same value and range,
/// replays exactly the same candidates.
///
/// When the range admits zero, zero is the only target: the bound nearest
/// zero is not emitted, so `50` in `[-5, 100]` shrinks to
/// `0, 25, 37, 43, 46, 48, 49` without `-5`.
#[derive(Debug, Clone)]
pub struct ShrinkSequence {
    value: BigInt,
    phase: Phase,
}

#[derive(Debug, Clone)]
enum Phase {
    Target(BigInt),
    Bisect { last: BigInt },
    Done,
}

impl ShrinkSequence {
    /// Create the shrink sequence of `value` within `range`
    ///
    /// Values outside the range, and the range's own shrink target, have no
    /// shrinks.
    pub fn new(value: BigInt, range: &Constraint) -> Self {
        let target = range.shrink_target();
        let phase = if !range.contains(&value) || value == target {
            Phase::Done
        } else {
            Phase::Target(target)
        };
        Self { value, phase }
    }
}

impl Iterator for ShrinkSequence {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        match std::mem::replace(&mut self.phase, Phase::Done) {
            Phase::Target(target) => {
                self.phase = Phase::Bisect {
                    last: target.clone(),
                };
                Some(target)
            }
            Phase::Bisect { last } => {
                let mid: BigInt = (&last + &self.value) / 2;
                if mid == last || mid == self.value {
                    return None;
                }
                self.phase = Phase::Bisect { last: mid.clone() };
                Some(mid)
            }
            Phase::Done => None,
        }
    }
}

impl FusedIterator for ShrinkSequence {}

/// Whether `candidate` is strictly smaller than `value` by magnitude
pub fn is_strictly_smaller(candidate: &BigInt, value: &BigInt) -> bool {
    candidate.magnitude() < value.magnitude()
}
