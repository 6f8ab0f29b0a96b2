//! Solution records produced by single solves and budget sweeps.

use nalgebra::DVector;

use crate::solver::SolveStatus;

/// Dual values of the two constraint blocks at the optimum.
///
/// Duals are the shadow prices reported by the solver: how much the optimal
/// objective would improve per unit of constraint relaxation. They are only
/// populated when the solve was requested with duals and ended optimal.
#[derive(Debug, Clone)]
pub struct ConstraintDuals {
    /// Dual vector of `theta >= 0`, length n, nonnegative.
    pub positivity: DVector<f64>,
    /// Dual scalar of `sum(theta) <= S`, nonnegative.
    pub budget: f64,
}

/// Result of one budgeted least-squares solve.
///
/// All numeric fields are `None` unless `status` is
/// [`SolveStatus::Optimal`]; callers must check the status before using
/// them. A non-optimal status is data, not an error.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Solution status.
    pub status: SolveStatus,
    /// Minimized objective `||X theta - y||_2^2` (if solved).
    pub objective: Option<f64>,
    /// Estimated parameter vector (if solved).
    pub theta: Option<DVector<f64>>,
    /// Residual vector `y - X theta` (if solved).
    pub residuals: Option<DVector<f64>>,
    /// Infinity norm of the estimated parameter vector (if solved).
    pub theta_inf_norm: Option<f64>,
    /// Infinity norm of the residual vector (if solved).
    pub residual_inf_norm: Option<f64>,
    /// Constraint duals (if solved and requested).
    pub duals: Option<ConstraintDuals>,
    /// Solve time in seconds.
    pub solve_time: f64,
    /// Number of solver iterations.
    pub iterations: u32,
}

impl Solution {
    /// Check whether the solver found an optimal point.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Index-aligned results of a budget sweep.
///
/// `solutions[i]` corresponds to `budgets[i]`, in the order the grid was
/// supplied. The accessor methods expose the per-budget sequences the
/// caller typically plots against the grid.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// The budget grid, in input order.
    pub budgets: Vec<f64>,
    /// One solution per budget, index-aligned with `budgets`.
    pub solutions: Vec<Solution>,
}

impl SweepResult {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Check whether the sweep was over an empty grid.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Iterate over (budget, solution) pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Solution)> {
        self.budgets.iter().copied().zip(self.solutions.iter())
    }

    /// Per-budget solver statuses.
    pub fn statuses(&self) -> Vec<SolveStatus> {
        self.solutions.iter().map(|s| s.status).collect()
    }

    /// Per-budget minimized objective values.
    pub fn objective_values(&self) -> Vec<Option<f64>> {
        self.solutions.iter().map(|s| s.objective).collect()
    }

    /// Per-budget estimated parameter vectors.
    pub fn thetas(&self) -> Vec<Option<&DVector<f64>>> {
        self.solutions.iter().map(|s| s.theta.as_ref()).collect()
    }

    /// Per-budget infinity norms of the estimates.
    pub fn theta_inf_norms(&self) -> Vec<Option<f64>> {
        self.solutions.iter().map(|s| s.theta_inf_norm).collect()
    }

    /// Per-budget infinity norms of the residuals.
    pub fn residual_inf_norms(&self) -> Vec<Option<f64>> {
        self.solutions.iter().map(|s| s.residual_inf_norm).collect()
    }

    /// Per-budget infinity norms of the positivity dual vectors.
    pub fn dual_positivity_inf_norms(&self) -> Vec<Option<f64>> {
        self.solutions
            .iter()
            .map(|s| s.duals.as_ref().map(|d| crate::metrics::norm_inf(&d.positivity)))
            .collect()
    }

    /// Per-budget budget-constraint dual values.
    pub fn dual_budget_values(&self) -> Vec<Option<f64>> {
        self.solutions
            .iter()
            .map(|s| s.duals.as_ref().map(|d| d.budget))
            .collect()
    }
}
