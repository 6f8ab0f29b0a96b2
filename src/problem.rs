//! Problem definition and solving API.
//!
//! A [`Problem`] owns the design matrix and observation vector and is solved
//! against one budget at a time:
//!
//! ```ignore
//! let problem = Problem::new(x, y, n)?;
//! let solution = problem.solve_one(budget)?;
//! let sweep = problem.sweep(&[0.5, 1.0, 2.0, 4.0])?;
//! ```
//!
//! Dimension validation happens once, at construction. A solve never fails
//! because of the solver outcome; infeasible or otherwise non-optimal
//! results are reported through [`Solution::status`].

use nalgebra::{DMatrix, DVector};

use crate::error::{Result, SweepError};
use crate::metrics::norm_inf;
use crate::solution::{ConstraintDuals, Solution, SweepResult};
use crate::solver::{solve, stuff_problem, Settings};

/// A budgeted non-negative least-squares instance.
///
/// Represents the data `(X, y)` of
/// `minimize ||X theta - y||_2^2  s.t.  theta >= 0, sum(theta) <= S`,
/// with the budget `S` supplied per solve.
#[derive(Debug, Clone)]
pub struct Problem {
    x: DMatrix<f64>,
    y: DVector<f64>,
}

impl Problem {
    /// Create a problem from a design matrix, observations and the expected
    /// parameter dimension.
    ///
    /// The dimension is an explicit argument so callers state the size of
    /// theta they intend to estimate; it must equal the column count of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::DimensionMismatch`] if `x` does not have
    /// exactly `n` columns or its row count differs from the length of `y`,
    /// and [`SweepError::InvalidProblem`] if either dimension is zero.
    pub fn new(x: DMatrix<f64>, y: DVector<f64>, n: usize) -> Result<Self> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(SweepError::InvalidProblem(
                "design matrix must have at least one row and one column".into(),
            ));
        }
        if x.ncols() != n {
            return Err(SweepError::DimensionMismatch {
                expected: format!("{} columns", n),
                got: format!("{} columns", x.ncols()),
            });
        }
        if x.nrows() != y.len() {
            return Err(SweepError::DimensionMismatch {
                expected: format!("{} observations", x.nrows()),
                got: format!("{} observations", y.len()),
            });
        }

        Ok(Problem { x, y })
    }

    /// The parameter dimension n.
    pub fn num_params(&self) -> usize {
        self.x.ncols()
    }

    /// The number of observations m.
    pub fn num_observations(&self) -> usize {
        self.x.nrows()
    }

    /// The design matrix.
    pub fn design(&self) -> &DMatrix<f64> {
        &self.x
    }

    /// The observation vector.
    pub fn observations(&self) -> &DVector<f64> {
        &self.y
    }

    /// Solve for one budget with default settings (no duals).
    pub fn solve_one(&self, budget: f64) -> Result<Solution> {
        self.solve_one_with(budget, &Settings::default())
    }

    /// Solve for one budget with custom settings.
    ///
    /// With [`Settings::with_duals`] set, an optimal solution carries the
    /// dual values of the positivity and budget constraints.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::InvalidProblem`] for a non-finite budget. A
    /// solver outcome other than optimal is not an error; it is reported in
    /// the returned [`Solution`] with the numeric fields absent.
    pub fn solve_one_with(&self, budget: f64, settings: &Settings) -> Result<Solution> {
        if !budget.is_finite() {
            return Err(SweepError::InvalidProblem(format!(
                "budget must be finite, got {}",
                budget
            )));
        }

        let stuffed = stuff_problem(&self.x, &self.y, budget);
        let raw = solve(&stuffed, settings);

        let (theta, dual) = match (raw.primal, raw.dual) {
            (Some(primal), dual) => (DVector::from_vec(primal), dual),
            _ => {
                return Ok(Solution {
                    status: raw.status,
                    objective: None,
                    theta: None,
                    residuals: None,
                    theta_inf_norm: None,
                    residual_inf_norm: None,
                    duals: None,
                    solve_time: raw.solve_time,
                    iterations: raw.iterations,
                })
            }
        };

        let residuals = &self.y - &self.x * &theta;
        let objective = residuals.norm_squared();

        // Dual layout matches the stuffing row order: n positivity rows,
        // then the budget row.
        let duals = if settings.with_duals {
            dual.map(|z| {
                let n = self.num_params();
                ConstraintDuals {
                    positivity: DVector::from_column_slice(&z[..n]),
                    budget: z[n],
                }
            })
        } else {
            None
        };

        Ok(Solution {
            status: raw.status,
            objective: Some(objective),
            theta_inf_norm: Some(norm_inf(&theta)),
            residual_inf_norm: Some(norm_inf(&residuals)),
            theta: Some(theta),
            residuals: Some(residuals),
            duals,
            solve_time: raw.solve_time,
            iterations: raw.iterations,
        })
    }

    /// Solve for every budget in a grid with default settings.
    pub fn sweep(&self, grid: &[f64]) -> Result<SweepResult> {
        self.sweep_with(grid, &Settings::default())
    }

    /// Solve for every budget in a grid with custom settings.
    ///
    /// The grid is traversed sequentially in input order; the result is
    /// index-aligned with it. Each grid point is solved independently, and a
    /// non-optimal outcome at one point does not stop the sweep.
    pub fn sweep_with(&self, grid: &[f64], settings: &Settings) -> Result<SweepResult> {
        let mut solutions = Vec::with_capacity(grid.len());
        for &budget in grid {
            solutions.push(self.solve_one_with(budget, settings)?);
        }

        Ok(SweepResult {
            budgets: grid.to_vec(),
            solutions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_column_count() {
        let x = DMatrix::identity(3, 3);
        let y = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let result = Problem::new(x, y, 2);
        assert!(matches!(
            result,
            Err(SweepError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_new_validates_row_count() {
        let x = DMatrix::identity(3, 3);
        let y = DVector::from_vec(vec![1.0, 2.0]);
        let result = Problem::new(x, y, 3);
        assert!(matches!(
            result,
            Err(SweepError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_new_rejects_empty() {
        let x = DMatrix::<f64>::zeros(0, 0);
        let y = DVector::from_vec(vec![]);
        let result = Problem::new(x, y, 0);
        assert!(matches!(result, Err(SweepError::InvalidProblem(_))));
    }

    #[test]
    fn test_accessors() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let problem = Problem::new(x, y, 2).unwrap();
        assert_eq!(problem.num_params(), 2);
        assert_eq!(problem.num_observations(), 3);
    }

    #[test]
    fn test_non_finite_budget_is_invalid() {
        let x = DMatrix::identity(2, 2);
        let y = DVector::from_vec(vec![1.0, 1.0]);
        let problem = Problem::new(x, y, 2).unwrap();
        assert!(matches!(
            problem.solve_one(f64::NAN),
            Err(SweepError::InvalidProblem(_))
        ));
        assert!(matches!(
            problem.solve_one(f64::INFINITY),
            Err(SweepError::InvalidProblem(_))
        ));
    }
}
