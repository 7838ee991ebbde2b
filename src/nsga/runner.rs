//! NSGA-II generation loop execution.
//!
//! [`NsgaRunner`] orchestrates the complete process:
//! initialization → (rank → crowd → truncate → tournament → reproduce →
//! evaluate) × generations → final truncation.

use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::NsgaConfig;
use super::crowding::assign_crowding_distance;
use super::dominance::rank_population;
use super::operators::reproduce;
use super::selection::{binary_tournament, crowded_cmp, environmental_selection};
use super::types::{Individual, MultiObjectiveProblem};
use crate::codec::{bitstring_to_string, decode, random_bitstring, Bitstring};
use crate::error::{ConfigError, NsgaError, Result};

/// Progress snapshot taken after each generation's environmental selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based generation number.
    pub generation: usize,

    /// Number of fronts in the ranked parent/offspring union.
    pub front_count: usize,

    /// Size of the union's first (non-dominated) front.
    pub first_front_size: usize,

    /// Lowest objective sum among the selected parents.
    pub best_aggregate: f64,

    /// Decoded vector of the individual with `best_aggregate`.
    pub best_vector: Vec<f64>,

    /// Objectives of the individual with `best_aggregate`.
    pub best_objectives: Vec<f64>,
}

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaResult {
    /// Final population, ordered best first by crowded comparison.
    pub population: Vec<Individual>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Statistics for every generation.
    pub history: Vec<GenerationStats>,
}

impl NsgaResult {
    /// Members of the final population with rank 0.
    pub fn pareto_front(&self) -> Vec<&Individual> {
        self.population.iter().filter(|ind| ind.rank == 0).collect()
    }
}

/// Executes the NSGA-II generation loop.
///
/// # Usage
///
/// ```
/// use u_pareto::nsga::{NsgaConfig, NsgaRunner};
/// use u_pareto::problems::SchafferN1;
///
/// let config = NsgaConfig::new(vec![(-10.0, 10.0)])
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let result = NsgaRunner::run(&SchafferN1, &config).unwrap();
/// assert_eq!(result.population.len(), 20);
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the optimization with a generator seeded from `config.seed`.
    pub fn run<P: MultiObjectiveProblem>(problem: &P, config: &NsgaConfig) -> Result<NsgaResult> {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the optimization drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: MultiObjectiveProblem, R: Rng>(
        problem: &P,
        config: &NsgaConfig,
        rng: &mut R,
    ) -> Result<NsgaResult> {
        validate(problem, config)?;

        let n = config.population_size;
        let initial: Vec<Bitstring> = (0..n)
            .map(|_| random_bitstring(config.bitstring_len(), rng))
            .collect();
        let mut parents = evaluate_population(problem, config, 0, initial)?;
        for front in rank_population(&mut parents) {
            assign_crowding_distance(&mut parents, &front);
        }
        let offspring = breed(&parents, config, rng);
        let mut children = evaluate_population(problem, config, 1, offspring)?;
        debug!(
            "initialized {} parents and {} children ({} bits each)",
            parents.len(),
            children.len(),
            config.bitstring_len()
        );

        let mut history = Vec::with_capacity(config.max_generations);
        for gen in 0..config.max_generations {
            let (selected, fronts) = select_survivors(parents, children, n);
            parents = selected;

            let stats = generation_stats(gen + 1, &fronts, &parents);
            info!(
                "gen {}: fronts={}, best=[x: {:?}, objectives: {:?}]",
                stats.generation, stats.front_count, stats.best_vector, stats.best_objectives
            );
            problem.on_generation(&stats);
            history.push(stats);

            let offspring = breed(&parents, config, rng);
            children = evaluate_population(problem, config, gen + 2, offspring)?;
        }

        let (mut population, fronts) = select_survivors(parents, children, n);
        population.sort_by(crowded_cmp);
        debug!(
            "final selection: {} individuals, {} in first front",
            population.len(),
            fronts.first().map_or(0, Vec::len)
        );

        Ok(NsgaResult {
            population,
            generations: config.max_generations,
            history,
        })
    }
}

fn validate<P: MultiObjectiveProblem>(problem: &P, config: &NsgaConfig) -> Result<()> {
    config.validate()?;
    if problem.num_objectives() == 0 {
        return Err(ConfigError::NoObjectives.into());
    }
    if let Some(expected) = problem.num_parameters() {
        if expected != config.num_parameters() {
            return Err(ConfigError::ParameterCountMismatch {
                problem: expected,
                search_space: config.num_parameters(),
            }
            .into());
        }
    }
    Ok(())
}

/// Decodes and evaluates one batch of bitstrings, tagging failures with
/// `generation` and the position in the batch.
fn evaluate_population<P: MultiObjectiveProblem>(
    problem: &P,
    config: &NsgaConfig,
    generation: usize,
    bitstrings: Vec<Bitstring>,
) -> Result<Vec<Individual>> {
    let expected = problem.num_objectives();
    bitstrings
        .into_iter()
        .enumerate()
        .map(|(index, bits)| {
            let vector = decode(&bits, &config.search_space, config.bits_per_parameter);
            let objectives = problem
                .evaluate(&vector)
                .map_err(|source| NsgaError::Evaluation {
                    generation,
                    index,
                    source,
                });
            let objectives = objectives.and_then(|objectives| {
                check_objectives(generation, index, expected, &objectives)?;
                Ok(objectives)
            });
            match objectives {
                Ok(objectives) => Ok(Individual::new(bits, vector, objectives)),
                Err(err) => {
                    error!("aborting run on {}: {err}", bitstring_to_string(&bits));
                    Err(err)
                }
            }
        })
        .collect()
}

fn check_objectives(
    generation: usize,
    index: usize,
    expected: usize,
    objectives: &[f64],
) -> Result<()> {
    if objectives.len() != expected {
        return Err(NsgaError::ObjectiveCount {
            generation,
            index,
            expected,
            actual: objectives.len(),
        });
    }
    if let Some((objective, &value)) = objectives.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(NsgaError::NonFiniteObjective {
            generation,
            index,
            objective,
            value,
        });
    }
    Ok(())
}

/// Ranks `parents ∪ children`, assigns crowding distances, and truncates
/// back to `population_size`. Also returns the union's fronts.
fn select_survivors(
    parents: Vec<Individual>,
    children: Vec<Individual>,
    population_size: usize,
) -> (Vec<Individual>, Vec<Vec<usize>>) {
    let mut union = parents;
    union.extend(children);
    for ind in &mut union {
        ind.reset_transient();
    }

    let fronts = rank_population(&mut union);
    for front in &fronts {
        assign_crowding_distance(&mut union, front);
    }

    (environmental_selection(union, &fronts, population_size), fronts)
}

/// Tournament-selects a mating pool from `parents` and reproduces it.
fn breed<R: Rng>(parents: &[Individual], config: &NsgaConfig, rng: &mut R) -> Vec<Bitstring> {
    let pool: Vec<&[bool]> = binary_tournament(parents, config.population_size, rng)
        .into_iter()
        .map(|i| parents[i].bitstring.as_slice())
        .collect();
    reproduce(
        &pool,
        config.crossover_probability,
        config.effective_mutation_rate(),
        rng,
    )
}

fn generation_stats(
    generation: usize,
    fronts: &[Vec<usize>],
    parents: &[Individual],
) -> GenerationStats {
    let best = parents.iter().min_by(|a, b| a.aggregate().total_cmp(&b.aggregate()));
    GenerationStats {
        generation,
        front_count: fronts.len(),
        first_front_size: fronts.first().map_or(0, Vec::len),
        best_aggregate: best.map_or(f64::INFINITY, Individual::aggregate),
        best_vector: best.map(|b| b.vector.clone()).unwrap_or_default(),
        best_objectives: best.map(|b| b.objectives.clone()).unwrap_or_default(),
    }
}

// ============================================================================
// Tests
// ============================================================================
