//! Multi-objective optimization with the Non-Dominated Sorting Genetic
//! Algorithm (NSGA-II).
//!
//! Candidates are fixed-width bitstrings decoded onto a bounded real search
//! space. Each generation the parent and offspring populations are merged,
//! partitioned into Pareto fronts, scored by crowding distance and truncated
//! back to the target size, so the population converges on a diverse
//! approximation of the Pareto front.
//!
//! - [`codec`]: bitstring ↔ real vector encoding
//! - [`nsga`]: dominance ranking, crowding distance, selection, reproduction
//!   and the generation loop
//! - [`problems`]: reference benchmark problems
//! - [`error`]: configuration and evaluation errors
//!
//! All randomness flows through a single seedable generator, so a run is
//! reproducible from its configuration and seed.
//!
//! # Example
//!
//! ```
//! use u_pareto::nsga::{NsgaConfig, NsgaRunner, ObjectiveFunctions};
//!
//! let problem = ObjectiveFunctions::new()
//!     .with(|x| x.iter().map(|v| v * v).sum())
//!     .with(|x| x.iter().map(|v| (v - 2.0).powi(2)).sum());
//!
//! let config = NsgaConfig::new(vec![(-10.0, 10.0)])
//!     .with_population_size(40)
//!     .with_max_generations(20)
//!     .with_seed(1);
//!
//! let result = NsgaRunner::run(&problem, &config).unwrap();
//! assert_eq!(result.population.len(), 40);
//! assert!(!result.pareto_front().is_empty());
//! ```

pub mod codec;
pub mod error;
pub mod nsga;
pub mod problems;

pub use error::{ConfigError, NsgaError, ObjectiveError, Result};

#[cfg(test)]
pub(crate) fn test_rng(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}
