//! Error types.
//!
//! Every failure is fatal to a run: configuration problems are reported
//! before any individual is sampled, and evaluation problems abort the
//! generation in which they occur.

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("search space must contain at least one parameter")]
    EmptySearchSpace,
    #[error("invalid bounds for parameter {index}: [{min}, {max}]")]
    InvalidBounds { index: usize, min: f64, max: f64 },
    #[error("bits_per_parameter must be in 1..=52, got {0}")]
    InvalidBitsPerParameter(usize),
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("max_generations must be at least 1")]
    ZeroGenerations,
    #[error("{name} must be in [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("problem declares {problem} parameters but the search space has {search_space}")]
    ParameterCountMismatch { problem: usize, search_space: usize },
    #[error("problem must have at least one objective")]
    NoObjectives,
}

/// Failure reported by a user-supplied objective function.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ObjectiveError {
    message: String,
}

impl ObjectiveError {
    /// Creates an objective error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message passed to [`ObjectiveError::new`].
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors produced while running the optimizer.
///
/// Evaluation errors locate the failing individual by `generation` and
/// `index`. Generation 0 is the initial population; generation `g >= 1`
/// is the offspring batch merged into generation `g`'s selection, with
/// `max_generations + 1` naming the batch consumed by the final
/// truncation. `index` is the position within that batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NsgaError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("objective evaluation failed for individual {index} of generation {generation}: {source}")]
    Evaluation {
        generation: usize,
        index: usize,
        #[source]
        source: ObjectiveError,
    },
    #[error("individual {index} of generation {generation} returned {actual} objective values, expected {expected}")]
    ObjectiveCount {
        generation: usize,
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("individual {index} of generation {generation} has non-finite value {value} for objective {objective}")]
    NonFiniteObjective {
        generation: usize,
        index: usize,
        objective: usize,
        value: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NsgaError>;
