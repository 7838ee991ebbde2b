//! Crowded-comparison selection.
//!
//! Both operators read `rank` and `crowding_distance`, so the pool must
//! have been ranked and crowded in the current generation.

use std::cmp::Ordering;

use rand::Rng;

use super::types::Individual;

/// Crowded-comparison order: lower rank first, then larger crowding
/// distance first.
pub fn crowded_cmp(a: &Individual, b: &Individual) -> Ordering {
    a.rank.cmp(&b.rank).then_with(|| {
        b.crowding_distance
            .partial_cmp(&a.crowding_distance)
            .unwrap_or(Ordering::Equal)
    })
}

/// Returns the crowded-comparison winner of `x` and `y`.
///
/// On a full tie the second contestant wins.
pub fn better<'a>(x: &'a Individual, y: &'a Individual) -> &'a Individual {
    if crowded_cmp(x, y) == Ordering::Less {
        x
    } else {
        y
    }
}

/// Binary tournament mating selection.
///
/// Draws `count` winners, each from two contestants sampled uniformly with
/// replacement from `pool`. Returns indices into `pool`.
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn binary_tournament<R: Rng>(pool: &[Individual], count: usize, rng: &mut R) -> Vec<usize> {
    assert!(!pool.is_empty(), "cannot select from empty population");

    let n = pool.len();
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..n);
            let y = rng.random_range(0..n);
            if crowded_cmp(&pool[x], &pool[y]) == Ordering::Less {
                x
            } else {
                y
            }
        })
        .collect()
}

/// Environmental (truncation) selection over a ranked union.
///
/// Whole fronts are taken in rank order while they fit into
/// `population_size`; the first front that would overflow is sorted by
/// [`crowded_cmp`] and cut to fill the remaining slots. The output is
/// exactly `population_size` long whenever `union.len() >= population_size`.
///
/// `fronts` are index lists into `union`, with `rank` and
/// `crowding_distance` already assigned.
pub fn environmental_selection(
    union: Vec<Individual>,
    fronts: &[Vec<usize>],
    population_size: usize,
) -> Vec<Individual> {
    let mut chosen: Vec<usize> = Vec::with_capacity(population_size);

    for front in fronts {
        let remaining = population_size - chosen.len();
        if remaining == 0 {
            break;
        }
        if front.len() <= remaining {
            chosen.extend_from_slice(front);
        } else {
            let mut last = front.clone();
            last.sort_by(|&a, &b| crowded_cmp(&union[a], &union[b]));
            chosen.extend_from_slice(&last[..remaining]);
            break;
        }
    }

    let mut slots: Vec<Option<Individual>> = union.into_iter().map(Some).collect();
    chosen
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nsga::crowding::assign_crowding_distance;
    use crate::nsga::dominance::rank_population;

    fn ind(rank: usize, dist: f64) -> Individual {
        let mut i = Individual::new(vec![], vec![], vec![]);
        i.rank = rank;
        i.crowding_distance = dist;
        i
    }

    fn from_objectives(objs: &[[f64; 2]]) -> Vec<Individual> {
        objs.iter()
            .map(|o| Individual::new(vec![], vec![], o.to_vec()))
            .collect()
    }

    #[test]
    fn test_crowded_cmp_prefers_lower_rank() {
        assert_eq!(crowded_cmp(&ind(0, 0.1), &ind(1, f64::INFINITY)), Ordering::Less);
        assert_eq!(crowded_cmp(&ind(2, 5.0), &ind(1, 0.0)), Ordering::Greater);
    }

    #[test]
    fn test_crowded_cmp_prefers_larger_distance() {
        assert_eq!(crowded_cmp(&ind(1, 3.0), &ind(1, 2.0)), Ordering::Less);
        assert_eq!(crowded_cmp(&ind(1, 2.0), &ind(1, f64::INFINITY)), Ordering::Greater);
        assert_eq!(crowded_cmp(&ind(1, 2.0), &ind(1, 2.0)), Ordering::Equal);
    }

    #[test]
    fn test_better() {
        let a = ind(0, 1.0);
        let b = ind(1, 9.0);
        assert!(std::ptr::eq(better(&a, &b), &a));
        assert!(std::ptr::eq(better(&b, &a), &a));

        let c = ind(0, 1.0);
        assert!(std::ptr::eq(better(&a, &c), &c));
    }

    #[test]
    fn test_binary_tournament_size_and_pressure() {
        let pool = vec![ind(0, f64::INFINITY), ind(1, 1.0), ind(2, 1.0), ind(3, 1.0)];
        let mut rng = crate::test_rng(42);
        let picks = binary_tournament(&pool, 10_000, &mut rng);
        assert_eq!(picks.len(), 10_000);

        let mut counts = [0u32; 4];
        for &p in &picks {
            counts[p] += 1;
        }
        // P(best wins) = 1 - (3/4)^2 = 0.4375, P(worst wins) = (1/4)^2 = 0.0625
        assert!(counts[0] > 4000, "counts: {counts:?}");
        assert!(counts[3] < 900, "counts: {counts:?}");
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_binary_tournament_empty_panics() {
        let mut rng = crate::test_rng(1);
        binary_tournament(&[], 1, &mut rng);
    }

    #[test]
    fn test_environmental_selection_partial_front() {
        // Front 0: six points on x + y = 10. Front 1: five points on x + y = 20.
        let mut union = from_objectives(&[
            [0.0, 10.0],
            [2.0, 8.0],
            [4.0, 6.0],
            [6.0, 4.0],
            [8.0, 2.0],
            [10.0, 0.0],
            [5.0, 15.0],
            [9.0, 11.0],
            [10.0, 10.0],
            [11.0, 9.0],
            [15.0, 5.0],
        ]);
        let fronts = rank_population(&mut union);
        assert_eq!(fronts.len(), 2);
        assert_eq!(fronts[0].len(), 6);
        assert_eq!(fronts[1].len(), 5);
        for front in &fronts {
            assign_crowding_distance(&mut union, front);
        }

        let selected = environmental_selection(union, &fronts, 8);
        assert_eq!(selected.len(), 8);
        assert_eq!(selected.iter().filter(|i| i.rank == 0).count(), 6);

        let from_front_1: Vec<&Individual> = selected.iter().filter(|i| i.rank == 1).collect();
        assert_eq!(from_front_1.len(), 2);
        // The two boundary points of front 1 have infinite distance.
        assert!(from_front_1.iter().all(|i| i.crowding_distance.is_infinite()));
        assert_eq!(from_front_1[0].objectives, vec![5.0, 15.0]);
        assert_eq!(from_front_1[1].objectives, vec![15.0, 5.0]);
    }

    #[test]
    fn test_environmental_selection_exact_fit() {
        let mut union = from_objectives(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0]]);
        let fronts = rank_population(&mut union);
        for front in &fronts {
            assign_crowding_distance(&mut union, front);
        }
        let selected = environmental_selection(union, &fronts, 2);
        let objs: Vec<Vec<f64>> = selected.into_iter().map(|i| i.objectives).collect();
        assert_eq!(objs, vec![vec![1.0, 1.0], vec![2.0, 2.0]]);
    }

    #[test]
    fn test_environmental_selection_small_union() {
        let mut union = from_objectives(&[[1.0, 2.0], [2.0, 1.0]]);
        let fronts = rank_population(&mut union);
        let selected = environmental_selection(union, &fronts, 5);
        assert_eq!(selected.len(), 2);
    }
}
