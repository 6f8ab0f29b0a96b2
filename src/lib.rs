//! # nnls-sweep
//!
//! Budget-constrained non-negative least squares, solved with the Clarabel
//! interior-point solver.
//!
//! The crate estimates a parameter vector `theta` from a design matrix `X`
//! and observations `y` by solving
//!
//! ```text
//! minimize    ||X * theta - y||_2^2
//! subject to  theta >= 0        (elementwise)
//!             sum(theta) <= S   (budget)
//! ```
//!
//! for one budget `S`, or for a whole grid of budgets in a single sweep.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nnls_sweep::prelude::*;
//! use nalgebra::{DMatrix, DVector};
//!
//! let x = DMatrix::identity(2, 2);
//! let y = DVector::from_vec(vec![3.0, -1.0]);
//!
//! let problem = Problem::new(x, y, 2)?;
//! let solution = problem.solve_one(10.0)?;
//!
//! assert!(solution.is_optimal());
//! println!("theta = {}", solution.theta.unwrap());
//! ```
//!
//! ## Sweeping a budget grid
//!
//! [`Problem::sweep`] maps `solve_one` over a grid of budgets sequentially
//! and returns an index-aligned [`SweepResult`]. A grid point the solver
//! reports as infeasible (or otherwise non-optimal) is recorded with its
//! status and absent numeric fields; the sweep continues to the next point.
//!
//! ## Duals
//!
//! With [`Settings::with_duals`] set, each optimal [`Solution`] carries the
//! shadow prices of the two constraint blocks: a length-n vector for
//! `theta >= 0` and a scalar for the budget.
//!
//! ## Architecture
//!
//! - **Problem validation** up front: dimensions are checked once at
//!   construction, never defaulted.
//! - **Matrix stuffing** converts `(X, y, S)` into Clarabel's
//!   `(P, q, A, b, cones)` quadratic-program form.
//! - **Clarabel solver** does all the numerical work; this crate never
//!   implements an optimization algorithm of its own.

pub mod error;
pub mod metrics;
pub mod problem;
pub mod solution;
pub mod solver;
pub mod sparse;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use nnls_sweep::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SweepError};
    pub use crate::metrics::{norm_inf, norm_inf_difference_thetas};
    pub use crate::problem::Problem;
    pub use crate::solution::{ConstraintDuals, Solution, SweepResult};
    pub use crate::solver::{Settings, SolveStatus};
}

// Re-export main types at crate root
pub use error::{Result, SweepError};
pub use problem::Problem;
pub use solution::{ConstraintDuals, Solution, SweepResult};
pub use solver::{Settings, SolveStatus};
