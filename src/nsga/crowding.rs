//! Crowding distance assignment for diversity preservation.

use std::cmp::Ordering;

use super::types::Individual;

/// Computes the crowding distance of every solution in one front.
///
/// For each objective the front is sorted ascending; the two boundary
/// solutions receive `f64::INFINITY` and each interior solution accumulates
/// `(next - prev) / (max - min)`. Objectives with zero range contribute
/// nothing. Higher distance means the solution is more isolated.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
///
/// # Example
///
/// ```
/// use u_pareto::nsga::crowding_distance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&objectives);
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance<T: AsRef<[f64]>>(objectives: &[T]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let mut distances = vec![0.0f64; n];
    let mut indices: Vec<usize> = (0..n).collect();

    for obj_idx in 0..m {
        let value = |i: usize| objectives[i].as_ref()[obj_idx];
        indices.sort_by(|&a, &b| value(a).partial_cmp(&value(b)).unwrap_or(Ordering::Equal));

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let range = value(indices[n - 1]) - value(indices[0]);
        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = value(indices[i - 1]);
                let next = value(indices[i + 1]);
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

/// Writes `crowding_distance` for the members of `front`.
///
/// `front` holds indices into `population`, as produced by
/// [`rank_population`](super::dominance::rank_population).
pub fn assign_crowding_distance(population: &mut [Individual], front: &[usize]) {
    let objectives: Vec<&[f64]> = front
        .iter()
        .map(|&i| population[i].objectives.as_slice())
        .collect();
    let distances = crowding_distance(&objectives);

    for (&i, d) in front.iter().zip(distances) {
        population[i].crowding_distance = d;
    }
}
