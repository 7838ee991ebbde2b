//! Pareto dominance and fast non-dominated sorting.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::types::{Individual, UNRANKED};

/// Pareto ranks and the fronts they induce.
///
/// `ranks[i]` is the index of the front holding solution `i`, and
/// `fronts[k]` lists the solutions of rank `k` in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NondominatedSortResult {
    pub ranks: Vec<usize>,
    pub fronts: Vec<Vec<usize>>,
}

/// Outcome of comparing two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// The first vector dominates.
    Left,
    /// The second vector dominates.
    Right,
    /// Incomparable or equal.
    Neither,
}

/// Pareto comparison under minimization.
///
/// A vector dominates when it wins at least one objective and loses none,
/// so equal vectors are [`Dominance::Neither`].
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let (a_wins, b_wins) = a
        .iter()
        .zip(b)
        .fold((false, false), |(a_wins, b_wins), (&x, &y)| {
            (a_wins || x < y, b_wins || y < x)
        });

    match (a_wins, b_wins) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// `true` when `a` dominates `b`.
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    dominance_cmp(a, b) == Dominance::Left
}

/// Partitions `objectives` into Pareto fronts (minimization).
///
/// Every pair is compared once. Per-solution dominator counts and
/// dominated-solution lists live in local arrays; fronts are then peeled
/// off by releasing the solutions whose last dominator was just ranked.
/// Runs in O(m n²) for n vectors of m objectives.
///
/// # Example
///
/// ```
/// use u_pareto::nsga::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
///     vec![4.0, 4.0], // dominated by [3, 3]
/// ];
///
/// let result = non_dominated_sort(&objectives);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort<T: AsRef<[f64]>>(objectives: &[T]) -> NondominatedSortResult {
    let n = objectives.len();
    debug_assert!(
        objectives
            .windows(2)
            .all(|w| w[0].as_ref().len() == w[1].as_ref().len()),
        "all objective vectors must have the same length"
    );

    let mut dominator_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    for i in 0..n {
        for j in (i + 1)..n {
            let (winner, loser) = match dominance_cmp(objectives[i].as_ref(), objectives[j].as_ref()) {
                Dominance::Left => (i, j),
                Dominance::Right => (j, i),
                Dominance::Neither => continue,
            };
            dominated_by[winner].push(loser);
            dominator_count[loser] += 1;
        }
    }

    let mut ranks = vec![UNRANKED; n];
    let mut fronts = Vec::new();
    let mut current: Vec<usize> = (0..n).filter(|&i| dominator_count[i] == 0).collect();
    while !current.is_empty() {
        let rank = fronts.len();
        let mut next = Vec::new();
        for &i in &current {
            ranks[i] = rank;
            for &j in &dominated_by[i] {
                dominator_count[j] -= 1;
                if dominator_count[j] == 0 {
                    next.push(j);
                }
            }
        }
        // Released in dominator order; keep each front index-sorted.
        next.sort_unstable();
        fronts.push(std::mem::replace(&mut current, next));
    }

    NondominatedSortResult { ranks, fronts }
}

/// Sorts a population in place and writes each individual's `rank`.
///
/// Returns the fronts as index lists into `population`.
pub fn rank_population(population: &mut [Individual]) -> Vec<Vec<usize>> {
    let objectives: Vec<&[f64]> = population
        .iter()
        .map(|ind| ind.objectives.as_slice())
        .collect();
    let result = non_dominated_sort(&objectives);

    for (ind, &rank) in population.iter_mut().zip(&result.ranks) {
        ind.rank = rank;
    }
    result.fronts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(objs: &[[f64; 2]]) -> Vec<usize> {
        non_dominated_sort(objs).ranks
    }

    #[test]
    fn test_dominance_cmp_is_antisymmetric() {
        let cases: [(&[f64], &[f64], Dominance); 5] = [
            (&[1.0, 2.0], &[1.0, 3.0], Dominance::Left),
            (&[0.0, 0.0, 0.0], &[1.0, 0.0, 2.0], Dominance::Left),
            (&[1.0, 3.0], &[3.0, 1.0], Dominance::Neither),
            (&[2.0, 2.0], &[2.0, 2.0], Dominance::Neither),
            (&[-1.0], &[-2.0], Dominance::Right),
        ];
        for (a, b, expected) in cases {
            assert_eq!(dominance_cmp(a, b), expected, "{a:?} vs {b:?}");
            let mirrored = match expected {
                Dominance::Left => Dominance::Right,
                Dominance::Right => Dominance::Left,
                Dominance::Neither => Dominance::Neither,
            };
            assert_eq!(dominance_cmp(b, a), mirrored, "{b:?} vs {a:?}");
        }
        assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
        assert!(!dominates(&[1.0, 2.0], &[1.0, 2.0]));
    }

    #[test]
    fn test_empty_input_has_no_fronts() {
        let result = non_dominated_sort::<Vec<f64>>(&[]);
        assert!(result.ranks.is_empty());
        assert!(result.fronts.is_empty());
    }

    #[test]
    fn test_small_populations() {
        assert_eq!(non_dominated_sort(&[[4.0, 2.0]]).fronts, vec![vec![0]]);
        assert_eq!(ranks(&[[1.0, 2.0], [2.0, 1.0]]), vec![0, 0]);
        assert_eq!(
            non_dominated_sort(&[[1.0, 1.0], [2.0, 2.0]]).fronts,
            vec![vec![0], vec![1]]
        );
    }

    #[test]
    fn test_chain_is_one_front_per_solution() {
        let result = non_dominated_sort(&[[3.0, 3.0], [1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(result.ranks, vec![2, 0, 1]);
        assert_eq!(result.fronts, vec![vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn test_mixed_fronts() {
        let objs = [
            [1.0, 5.0],
            [3.0, 3.0],
            [5.0, 1.0],
            [4.0, 4.0], // behind (3, 3)
            [6.0, 6.0], // behind (4, 4)
        ];
        assert_eq!(ranks(&objs), vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_later_front_is_index_sorted() {
        // 3 is released by 0 before 2 is released by 1.
        let objs = [[0.0, 9.0], [9.0, 0.0], [10.0, 1.0], [1.0, 10.0]];
        let result = non_dominated_sort(&objs);
        assert_eq!(result.fronts, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_duplicates_are_ranked_together() {
        let result = non_dominated_sort(&[[2.0, 2.0], [2.0, 2.0], [3.0, 3.0]]);
        assert_eq!(result.ranks, vec![0, 0, 1]);
        assert_eq!(result.fronts[0], vec![0, 1]);
    }

    #[test]
    fn test_three_objective_tradeoffs() {
        let objs = vec![
            vec![1.0, 5.0, 3.0],
            vec![3.0, 1.0, 5.0],
            vec![5.0, 3.0, 1.0],
            vec![4.0, 4.0, 4.0],
        ];
        assert_eq!(non_dominated_sort(&objs).fronts, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn test_rank_population_writes_ranks() {
        let mut pop = vec![
            Individual::new(vec![], vec![], vec![2.0, 2.0]),
            Individual::new(vec![], vec![], vec![1.0, 1.0]),
        ];
        let fronts = rank_population(&mut pop);
        assert_eq!(fronts, vec![vec![1], vec![0]]);
        assert_eq!(pop[0].rank, 1);
        assert_eq!(pop[1].rank, 0);
    }
}
