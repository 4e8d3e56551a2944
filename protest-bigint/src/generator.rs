//! Core generator infrastructure.

use crate::config::GeneratorConfig;

/// Core generator trait for creating random test data
///
/// A generator bundles the three operations a property runner needs: draw a
/// value, shrink a failing value, and tell whether a value is one it could
/// have produced.
pub trait Generator<T> {
    /// Generate a random value of type T using the provided RNG and configuration
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T;

    /// Create an iterator of shrunk values from the given value
    fn shrink(&self, value: &T) -> Box<dyn Iterator<Item = T>>;

    /// Whether `value` is within the domain of this generator
    fn can_generate(&self, value: &T) -> bool;
}

/// A wrapper that stores generators in a type-erased way
pub struct BoxedGenerator<T> {
    generator: Box<dyn Generator<T> + Send + Sync>,
}

impl<T> BoxedGenerator<T> {
    /// Create a new boxed generator
    pub fn new<G: Generator<T> + Send + Sync + 'static>(generator: G) -> Self {
        Self {
            generator: Box::new(generator),
        }
    }
}

impl<T> Generator<T> for BoxedGenerator<T> {
    fn generate(&self, rng: &mut dyn rand::RngCore, config: &GeneratorConfig) -> T {
        self.generator.generate(rng, config)
    }

    fn shrink(&self, value: &T) -> Box<dyn Iterator<Item = T>> {
        self.generator.shrink(value)
    }

    fn can_generate(&self, value: &T) -> bool {
        self.generator.can_generate(value)
    }
}

impl<T> std::fmt::Debug for BoxedGenerator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoxedGenerator").finish_non_exhaustive()
    }
}
