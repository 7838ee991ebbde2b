//! Core types for the NSGA-II engine.
//!
//! [`MultiObjectiveProblem`] is the contract between the engine and the
//! objective functions; [`Individual`] is the fixed-shape record the engine
//! stores for every candidate.

use crate::codec::Bitstring;
use crate::error::ObjectiveError;

use super::runner::GenerationStats;

/// Rank of an individual that has not been sorted in the current generation.
pub const UNRANKED: usize = usize::MAX;

/// A candidate solution.
///
/// `bitstring`, `vector` and `objectives` are fixed once the individual is
/// evaluated. `rank` and `crowding_distance` are transient: the engine
/// overwrites them every generation before reading them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Encoded genotype.
    pub bitstring: Bitstring,
    /// Decoded parameter vector.
    pub vector: Vec<f64>,
    /// Objective values, all minimized.
    pub objectives: Vec<f64>,
    /// Pareto rank (0 = non-dominated). [`UNRANKED`] until sorted.
    pub rank: usize,
    /// Crowding distance within the individual's front.
    pub crowding_distance: f64,
}

impl Individual {
    /// Creates an evaluated individual with unset transient fields.
    pub fn new(bitstring: Bitstring, vector: Vec<f64>, objectives: Vec<f64>) -> Self {
        Self {
            bitstring,
            vector,
            objectives,
            rank: UNRANKED,
            crowding_distance: 0.0,
        }
    }

    /// Clears rank and crowding distance.
    pub fn reset_transient(&mut self) {
        self.rank = UNRANKED;
        self.crowding_distance = 0.0;
    }

    /// Sum of the objective values.
    ///
    /// Only used to pick a representative individual for progress reports.
    pub fn aggregate(&self) -> f64 {
        self.objectives.iter().sum()
    }
}

/// A multi-objective minimization problem over a real-valued vector.
///
/// # Implementing
///
/// ```
/// use u_pareto::error::ObjectiveError;
/// use u_pareto::nsga::MultiObjectiveProblem;
///
/// struct Schaffer;
///
/// impl MultiObjectiveProblem for Schaffer {
///     fn num_objectives(&self) -> usize { 2 }
///
///     fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ObjectiveError> {
///         Ok(vec![x[0] * x[0], (x[0] - 2.0).powi(2)])
///     }
/// }
/// ```
pub trait MultiObjectiveProblem {
    /// Number of objective values [`evaluate`](Self::evaluate) returns.
    fn num_objectives(&self) -> usize;

    /// Computes the objective values of a decoded vector.
    ///
    /// Must be deterministic. A returned error aborts the run.
    fn evaluate(&self, vector: &[f64]) -> Result<Vec<f64>, ObjectiveError>;

    /// Number of decision parameters the problem expects, if fixed.
    ///
    /// When `Some`, the runner checks it against the search space.
    fn num_parameters(&self) -> Option<usize> {
        None
    }

    /// Called at the end of each generation.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}

type ObjectiveFn = Box<dyn Fn(&[f64]) -> f64>;

/// A problem assembled from independent scalar objective functions.
///
/// ```
/// use u_pareto::nsga::{MultiObjectiveProblem, ObjectiveFunctions};
///
/// let problem = ObjectiveFunctions::new()
///     .with(|x| x.iter().map(|v| v * v).sum())
///     .with(|x| x.iter().map(|v| (v - 2.0).powi(2)).sum());
///
/// assert_eq!(problem.num_objectives(), 2);
/// assert_eq!(problem.evaluate(&[1.0]).unwrap(), vec![1.0, 1.0]);
/// ```
#[derive(Default)]
pub struct ObjectiveFunctions {
    functions: Vec<ObjectiveFn>,
}

impl ObjectiveFunctions {
    /// Creates an empty set of objectives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an objective.
    pub fn with<F>(mut self, f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + 'static,
    {
        self.functions.push(Box::new(f));
        self
    }
}

impl MultiObjectiveProblem for ObjectiveFunctions {
    fn num_objectives(&self) -> usize {
        self.functions.len()
    }

    fn evaluate(&self, vector: &[f64]) -> Result<Vec<f64>, ObjectiveError> {
        Ok(self.functions.iter().map(|f| f(vector)).collect())
    }
}
