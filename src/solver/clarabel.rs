//! Clarabel solver integration.
//!
//! This module provides the interface to the Clarabel conic solver.

use clarabel::algebra::CscMatrix as ClarabelCsc;
use clarabel::solver::{
    DefaultSettingsBuilder, DefaultSolver, IPSolver, SolverStatus, SupportedConeT,
};

use super::stuffing::StuffedProblem;

/// Solution status from the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Optimal solution found.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Maximum iterations reached.
    MaxIterations,
    /// Numerical difficulties.
    NumericalError,
    /// Unknown status.
    Unknown,
}

impl From<SolverStatus> for SolveStatus {
    fn from(status: SolverStatus) -> Self {
        match status {
            SolverStatus::Solved => SolveStatus::Optimal,
            SolverStatus::PrimalInfeasible => SolveStatus::Infeasible,
            SolverStatus::DualInfeasible => SolveStatus::Unbounded,
            SolverStatus::MaxIterations => SolveStatus::MaxIterations,
            SolverStatus::MaxTime => SolveStatus::MaxIterations,
            SolverStatus::NumericalError => SolveStatus::NumericalError,
            _ => SolveStatus::Unknown,
        }
    }
}

/// Solver settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Print solver output.
    pub verbose: bool,
    /// Report dual values for the two constraint blocks.
    pub with_duals: bool,
    /// Maximum iterations.
    pub max_iter: u32,
    /// Time limit in seconds.
    pub time_limit: f64,
    /// Absolute tolerance.
    pub tol_gap_abs: f64,
    /// Relative tolerance.
    pub tol_gap_rel: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            verbose: false,
            with_duals: false,
            max_iter: 100,
            time_limit: f64::INFINITY,
            tol_gap_abs: 1e-8,
            tol_gap_rel: 1e-8,
        }
    }
}

impl Settings {
    /// Settings that request dual values, otherwise defaults.
    pub fn with_duals() -> Self {
        Settings {
            with_duals: true,
            ..Settings::default()
        }
    }
}

/// Raw solver output, before assembly into a domain solution record.
#[derive(Debug, Clone)]
pub struct RawSolution {
    /// Solution status.
    pub status: SolveStatus,
    /// Primal variable values (if solved).
    pub primal: Option<Vec<f64>>,
    /// Dual values for the nonnegative cone rows (if solved).
    pub dual: Option<Vec<f64>>,
    /// Solve time in seconds.
    pub solve_time: f64,
    /// Number of iterations.
    pub iterations: u32,
}

/// Solve the stuffed problem using Clarabel.
pub fn solve(problem: &StuffedProblem, settings: &Settings) -> RawSolution {
    // Convert to Clarabel format
    let p = to_clarabel_csc(&problem.p);
    let a = to_clarabel_csc(&problem.a);
    let cones = vec![SupportedConeT::NonnegativeConeT(problem.nonneg_rows)];

    // Build Clarabel settings
    let clarabel_settings = DefaultSettingsBuilder::default()
        .verbose(settings.verbose)
        .max_iter(settings.max_iter)
        .time_limit(settings.time_limit)
        .tol_gap_abs(settings.tol_gap_abs)
        .tol_gap_rel(settings.tol_gap_rel)
        .build()
        .unwrap();

    // Create and run solver
    let mut solver = DefaultSolver::new(&p, &problem.q, &a, &problem.b, &cones, clarabel_settings);
    solver.solve();

    // Extract solution
    let status: SolveStatus = solver.solution.status.into();
    let solve_time = solver.solution.solve_time;
    let iterations = solver.info.iterations;

    if status == SolveStatus::Optimal {
        RawSolution {
            status,
            primal: Some(solver.solution.x.clone()),
            dual: Some(solver.solution.z.clone()),
            solve_time,
            iterations,
        }
    } else {
        RawSolution {
            status,
            primal: None,
            dual: None,
            solve_time,
            iterations,
        }
    }
}

/// Convert nalgebra CSC to Clarabel CSC.
fn to_clarabel_csc(m: &nalgebra_sparse::CscMatrix<f64>) -> ClarabelCsc<f64> {
    ClarabelCsc::new(
        m.nrows(),
        m.ncols(),
        m.col_offsets().to_vec(),
        m.row_indices().to_vec(),
        m.values().to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(!settings.verbose);
        assert!(!settings.with_duals);
        assert_eq!(settings.max_iter, 100);
    }

    #[test]
    fn test_with_duals_settings() {
        let settings = Settings::with_duals();
        assert!(settings.with_duals);
        assert_eq!(settings.max_iter, 100);
    }

    #[test]
    fn test_status_conversion() {
        assert_eq!(SolveStatus::from(SolverStatus::Solved), SolveStatus::Optimal);
        assert_eq!(
            SolveStatus::from(SolverStatus::PrimalInfeasible),
            SolveStatus::Infeasible
        );
        assert_eq!(
            SolveStatus::from(SolverStatus::MaxTime),
            SolveStatus::MaxIterations
        );
    }
}
