//! Bitstring reproduction operators.
//!
//! # Crossover
//!
//! - [`uniform_crossover`]: each bit taken from either parent with equal probability
//!
//! # Mutation
//!
//! - [`point_mutation`]: independent bit flips at a fixed per-bit rate
//!
//! [`reproduce`] pairs a mating pool and applies both.

use rand::Rng;

use crate::codec::Bitstring;

/// Uniform crossover.
///
/// With probability `crossover_probability` the child takes each bit from
/// `parent1` or `parent2` with equal probability; otherwise the child is a
/// copy of `parent1`.
///
/// # Panics
///
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    crossover_probability: f64,
    rng: &mut R,
) -> Bitstring {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    if !rng.random_bool(crossover_probability) {
        return parent1.to_vec();
    }

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Point mutation: flips each bit independently with probability `rate`.
pub fn point_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) {
    for bit in bits.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
        }
    }
}

/// Produces one child per entry of `parents`.
///
/// Parents are paired sequentially: an even position `i` mates with
/// `i + 1`, an odd position with `i - 1`, and the last position always
/// mates with the first. Each child is `parents[i]` crossed with its mate,
/// then mutated.
pub fn reproduce<R: Rng>(
    parents: &[&[bool]],
    crossover_probability: f64,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<Bitstring> {
    let n = parents.len();
    (0..n)
        .map(|i| {
            let mate = if i == n - 1 {
                0
            } else if i % 2 == 0 {
                i + 1
            } else {
                i - 1
            };
            let mut child = uniform_crossover(parents[i], parents[mate], crossover_probability, rng);
            point_mutation(&mut child, mutation_rate, rng);
            child
        })
        .collect()
}
