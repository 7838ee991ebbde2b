//! NSGA-II over fixed-width bitstrings.
//!
//! Users describe their objectives by implementing [`MultiObjectiveProblem`]
//! (or collecting closures in [`ObjectiveFunctions`]) and run the elitist
//! generation loop with [`NsgaRunner`].
//!
//! # Key Types
//!
//! - [`NsgaConfig`]: Search space, encoding width, population and operator rates
//! - [`NsgaRunner`]: Executes the generation loop
//! - [`NsgaResult`]: Final population with per-generation statistics
//! - [`Individual`]: Evaluated candidate with rank and crowding distance
//!
//! # Submodules
//!
//! - [`dominance`]: Pareto dominance and fast non-dominated sorting
//! - [`crowding`]: Crowding distance assignment
//! - [`selection`]: Crowded comparison, binary tournament, environmental selection
//! - [`operators`]: Uniform crossover and point mutation on bitstrings
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*
//! - Srinivas & Deb (1994), *Multiobjective Optimization Using Nondominated
//!   Sorting in Genetic Algorithms*

mod config;
pub mod crowding;
pub mod dominance;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::{NsgaConfig, MAX_BITS_PER_PARAMETER};
pub use crowding::{assign_crowding_distance, crowding_distance};
pub use dominance::{
    dominance_cmp, dominates, non_dominated_sort, rank_population, Dominance,
    NondominatedSortResult,
};
pub use runner::{GenerationStats, NsgaResult, NsgaRunner};
pub use selection::{binary_tournament, better, crowded_cmp, environmental_selection};
pub use types::{Individual, MultiObjectiveProblem, ObjectiveFunctions, UNRANKED};
