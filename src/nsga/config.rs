//! NSGA-II configuration.
//!
//! [`NsgaConfig`] holds all parameters that control the generation loop.

use crate::error::ConfigError;

pub use crate::codec::MAX_BITS_PER_PARAMETER;

/// Configuration for the NSGA-II generation loop.
///
/// # Defaults
///
/// ```
/// use u_pareto::nsga::NsgaConfig;
///
/// let config = NsgaConfig::new(vec![(-10.0, 10.0)]);
/// assert_eq!(config.bits_per_parameter, 16);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.effective_mutation_rate(), 1.0 / 16.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::nsga::NsgaConfig;
///
/// let config = NsgaConfig::new(vec![(-1000.0, 1000.0)])
///     .with_population_size(50)
///     .with_max_generations(20)
///     .with_crossover_probability(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// `(min, max)` bounds, one pair per decision parameter.
    ///
    /// Both ends must be finite. The width `max - min` may exceed `f64::MAX`.
    pub search_space: Vec<(f64, f64)>,

    /// Bits used to encode one parameter. Controls quantization resolution.
    pub bits_per_parameter: usize,

    /// Number of individuals kept after environmental selection (N).
    ///
    /// An even value gives every parent a distinct mate during reproduction.
    pub population_size: usize,

    /// Number of generation steps.
    pub max_generations: usize,

    /// Probability that a child is produced by uniform crossover rather
    /// than copied from its first parent.
    pub crossover_probability: f64,

    /// Per-bit flip probability.
    ///
    /// `None` uses `1 / bitstring_len`.
    pub mutation_rate: Option<f64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl NsgaConfig {
    /// Creates a configuration over `search_space` with default parameters.
    pub fn new(search_space: Vec<(f64, f64)>) -> Self {
        Self {
            search_space,
            bits_per_parameter: 16,
            population_size: 100,
            max_generations: 50,
            crossover_probability: 0.98,
            mutation_rate: None,
            seed: None,
        }
    }

    /// Sets the bits per parameter.
    pub fn with_bits_per_parameter(mut self, bits: usize) -> Self {
        self.bits_per_parameter = bits;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets an explicit per-bit mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of decision parameters.
    pub fn num_parameters(&self) -> usize {
        self.search_space.len()
    }

    /// Length of every bitstring: `num_parameters * bits_per_parameter`.
    pub fn bitstring_len(&self) -> usize {
        self.num_parameters() * self.bits_per_parameter
    }

    /// The mutation rate actually applied.
    pub fn effective_mutation_rate(&self) -> f64 {
        match self.mutation_rate {
            Some(rate) => rate,
            None if self.bitstring_len() > 0 => 1.0 / self.bitstring_len() as f64,
            None => 0.0,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_space.is_empty() {
            return Err(ConfigError::EmptySearchSpace);
        }
        for (index, &(min, max)) in self.search_space.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ConfigError::InvalidBounds { index, min, max });
            }
        }
        if self.bits_per_parameter == 0 || self.bits_per_parameter > MAX_BITS_PER_PARAMETER {
            return Err(ConfigError::InvalidBitsPerParameter(self.bits_per_parameter));
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        check_probability("crossover_probability", self.crossover_probability)?;
        check_probability("mutation_rate", self.effective_mutation_rate())?;
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
