//! Configuration types for controlling generation and parallel sessions.

use crate::error::{BigIntError, Result};

/// Width of the range used when a caller gives no bound at all
pub const DEFAULT_UNBOUNDED_BITS: u64 = 256;

/// Largest bit width accepted for a range
///
/// A range this wide already needs 2 MiB per bound; wider requests are
/// rejected up front instead of failing inside the allocator.
pub const MAX_BIT_WIDTH: u64 = 1 << 24;

/// Configuration for generators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Bit width of the range used in place of a missing bound.
    /// Signed generators default to `[-2^(bits-1), 2^(bits-1) - 1]`,
    /// unsigned ones to `[0, 2^bits - 1]`.
    pub unbounded_bits: u64,
    /// Print construction and sampling diagnostics to stderr
    pub verbose: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            unbounded_bits: DEFAULT_UNBOUNDED_BITS,
            verbose: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator configuration with validation
    pub fn new(unbounded_bits: u64, verbose: bool) -> Result<Self> {
        let config = Self {
            unbounded_bits,
            verbose,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the generator configuration
    pub fn validate(&self) -> Result<()> {
        if self.unbounded_bits == 0 {
            return Err(BigIntError::invalid_config(
                "unbounded_bits",
                "must be > 0",
            ));
        }
        if self.unbounded_bits > MAX_BIT_WIDTH {
            return Err(BigIntError::invalid_config(
                "unbounded_bits",
                format!("must be at most {}", MAX_BIT_WIDTH),
            ));
        }
        Ok(())
    }

    /// Enable verbose output
    pub fn with_verbose(mut self) -> Self {
        self.verbose = true;
        self
    }
}

/// Configuration for generating across worker threads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Number of worker threads
    pub num_threads: usize,
    /// Below this many values, generation stays on the calling thread
    pub batch_size: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: num_cpus::get(),
            batch_size: 64,
        }
    }
}

impl ParallelConfig {
    /// Create a new parallel configuration with validation
    pub fn new(num_threads: usize, batch_size: usize) -> Result<Self> {
        let config = Self {
            num_threads,
            batch_size,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the parallel configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == 0 {
            return Err(BigIntError::invalid_config("num_threads", "must be > 0"));
        }
        if self.batch_size == 0 {
            return Err(BigIntError::invalid_config("batch_size", "must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.unbounded_bits, 256);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generator_config_rejects_zero_bits() {
        let result = GeneratorConfig::new(0, false);
        assert!(matches!(
            result,
            Err(BigIntError::InvalidConfig {
                field: "unbounded_bits",
                ..
            })
        ));
    }

    #[test]
    fn test_generator_config_rejects_oversized_bits() {
        assert!(GeneratorConfig::new(MAX_BIT_WIDTH, false).is_ok());

        let result = GeneratorConfig::new(MAX_BIT_WIDTH + 1, false);
        assert!(matches!(
            result,
            Err(BigIntError::InvalidConfig {
                field: "unbounded_bits",
                ..
            })
        ));

        let config = GeneratorConfig {
            unbounded_bits: 1 << 40,
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_generator_config_with_verbose() {
        let config = GeneratorConfig::new(64, false).unwrap().with_verbose();
        assert_eq!(config.unbounded_bits, 64);
        assert!(config.verbose);
    }

    #[test]
    fn test_parallel_config_defaults() {
        let config = ParallelConfig::default();
        assert!(config.num_threads >= 1);
        assert_eq!(config.batch_size, 64);
    }

    #[test]
    fn test_parallel_config_validation() {
        assert!(ParallelConfig::new(4, 16).is_ok());
        assert!(ParallelConfig::new(0, 16).is_err());
        assert!(ParallelConfig::new(4, 0).is_err());
    }
}
