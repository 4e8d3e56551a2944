//! # Protest BigInt - Arbitrary-precision integer generators
//!
//! Generators and shrinkers for unbounded integers, signed and unsigned, for
//! use with property-based testing. A domain is given as optional bounds, the
//! older positional bounds, or a bit width; it is resolved once into a
//! [`Constraint`], sampled uniformly with rejection sampling, and shrunk
//! toward the value of smallest magnitude the range admits.
//!
//! ## Quick Start
//!
//! ```rust
//! use protest_bigint::{BigIntConstraints, Generator, GeneratorConfig, big_int, create_seeded_rng};
//!
//! let generator = big_int(BigIntConstraints::between(-100, 100)).unwrap();
//! let mut rng = create_seeded_rng(42);
//! let config = GeneratorConfig::default();
//!
//! let value = generator.generate(&mut rng, &config);
//! assert!(generator.can_generate(&value));
//!
//! // Every shrink is strictly closer to zero
//! for candidate in generator.shrink(&value) {
//!     assert!(candidate.magnitude() < value.magnitude());
//! }
//! ```

// Public modules
pub mod bigint;
pub mod config;
pub mod constraints;
pub mod error;
pub mod generator;
pub mod parallel;
pub mod rng;
pub mod sampler;
pub mod shrink;

// Re-export the main public API
pub use bigint::{
    BigIntGenerator, big_int, big_int_n, big_int_with_config, big_uint, big_uint_n,
    big_uint_with_config,
};
pub use config::{DEFAULT_UNBOUNDED_BITS, GeneratorConfig, MAX_BIT_WIDTH, ParallelConfig};
pub use constraints::{BigIntArgs, BigIntConstraints, BigUintArgs, BigUintConstraints, Constraint};
pub use error::{BigIntError, Result};
pub use generator::{BoxedGenerator, Generator};
pub use parallel::generate_parallel;
pub use rng::{DefaultRngProvider, RngProvider, create_seeded_rng, derive_seed, generate_one_value};
pub use sampler::{Sample, UniformRangeSampler};
pub use shrink::{ShrinkSequence, is_strictly_smaller};
