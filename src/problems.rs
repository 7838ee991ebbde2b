//! Reference two-objective benchmark problems.
//!
//! # References
//!
//! - Schaffer (1985), "Multiple Objective Optimization with Vector Evaluated
//!   Genetic Algorithms"
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results"

use crate::error::ObjectiveError;
use crate::nsga::MultiObjectiveProblem;

/// Schaffer's problem N.1 generalized to any dimension.
///
/// - f1(x) = Σ xᵢ²
/// - f2(x) = Σ (xᵢ − 2)²
///
/// The Pareto set is every vector with all components in `[0, 2]` moving
/// together; in one dimension it is simply `x ∈ [0, 2]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchafferN1;

impl MultiObjectiveProblem for SchafferN1 {
    fn num_objectives(&self) -> usize {
        2
    }

    fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ObjectiveError> {
        let f1 = x.iter().map(|v| v * v).sum();
        let f2 = x.iter().map(|v| (v - 2.0).powi(2)).sum();
        Ok(vec![f1, f2])
    }
}

/// ZDT1 over `dimensions` parameters in `[0, 1]`.
///
/// The Pareto front is `f2 = 1 − √f1`, reached when `x[1..]` are all zero.
#[derive(Debug, Clone, Copy)]
pub struct Zdt1 {
    /// Number of decision parameters (at least 2).
    pub dimensions: usize,
}

impl Zdt1 {
    /// The matching search space: `dimensions` copies of `(0, 1)`.
    pub fn search_space(&self) -> Vec<(f64, f64)> {
        vec![(0.0, 1.0); self.dimensions]
    }
}

impl MultiObjectiveProblem for Zdt1 {
    fn num_objectives(&self) -> usize {
        2
    }

    fn num_parameters(&self) -> Option<usize> {
        Some(self.dimensions)
    }

    fn evaluate(&self, x: &[f64]) -> Result<Vec<f64>, ObjectiveError> {
        if x.len() < 2 {
            return Err(ObjectiveError::new(format!(
                "ZDT1 needs at least 2 parameters, got {}",
                x.len()
            )));
        }
        let f1 = x[0];
        let g = 1.0 + 9.0 * x[1..].iter().sum::<f64>() / (x.len() - 1) as f64;
        let f2 = g * (1.0 - (f1 / g).sqrt());
        Ok(vec![f1, f2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schaffer_values() {
        assert_eq!(SchafferN1.evaluate(&[0.0]).unwrap(), vec![0.0, 4.0]);
        assert_eq!(SchafferN1.evaluate(&[2.0]).unwrap(), vec![4.0, 0.0]);
        assert_eq!(SchafferN1.evaluate(&[1.0, 3.0]).unwrap(), vec![10.0, 2.0]);
    }

    #[test]
    fn test_zdt1_on_front() {
        let problem = Zdt1 { dimensions: 5 };
        let f = problem.evaluate(&[0.25, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!((f[0] - 0.25).abs() < 1e-12);
        assert!((f[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zdt1_rejects_short_vector() {
        let problem = Zdt1 { dimensions: 1 };
        assert!(problem.evaluate(&[0.5]).is_err());
    }

    #[test]
    fn test_zdt1_search_space() {
        assert_eq!(Zdt1 { dimensions: 3 }.search_space(), vec![(0.0, 1.0); 3]);
    }
}
