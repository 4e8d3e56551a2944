//! RNG backend integration and seed replay helpers.
//!
//! Generators never own or look up a random source. Callers create one here
//! (or bring their own `RngCore`) and pass it to every `generate` call.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GeneratorConfig;
use crate::generator::Generator;

/// Trait for providing random number generators
pub trait RngProvider: Send + Sync {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore + Clone + Send;

    /// Create a new RNG instance, seeded from entropy when `seed` is `None`
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;
}

/// Default RNG provider using the standard library's StdRng
#[derive(Debug, Clone)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create a new RNG with a specific seed
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(Some(seed))
}

/// Generate a single value from a freshly seeded RNG
///
/// This is the replay primitive: the same seed and an equivalent generator
/// always give the same value.
pub fn generate_one_value<T, G>(seed: u64, generator: &G) -> T
where
    G: Generator<T> + ?Sized,
{
    let mut rng = create_seeded_rng(seed);
    generator.generate(&mut rng, &GeneratorConfig::default())
}

/// Derive the seed of an independent stream from a base seed
///
/// Uses the SplitMix64 finalizer so that neighbouring stream indices give
/// uncorrelated seeds.
pub fn derive_seed(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
