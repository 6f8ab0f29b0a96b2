//! Solver interface for nnls-sweep.
//!
//! This module provides:
//! - Matrix stuffing to convert a budgeted least-squares instance to
//!   Clarabel's quadratic-program format
//! - Clarabel solver integration

pub mod clarabel;
pub mod stuffing;

pub use self::clarabel::{solve, RawSolution, Settings, SolveStatus};
pub use stuffing::{stuff_problem, StuffedProblem};
