//! Matrix stuffing: converts a budgeted least-squares instance to solver
//! format.
//!
//! This module builds the matrices (P, q, A, b) and cone specification
//! required by Clarabel from the problem data (X, y, S).
//!
//! Clarabel solves `min (1/2) x' P x + q' x  s.t.  A x + s = b, s in K`.
//! The objective `||X theta - y||_2^2` expands to
//! `theta' (X'X) theta - 2 y' X theta + y'y`, so P = 2 X'X, q = -2 X'y and
//! the constant `y'y` is carried as an offset to be added back to the
//! reported value. The constraints `theta >= 0` and `sum(theta) <= S`
//! become a single nonnegative cone of size n + 1 with
//! `A = [-I; 1']` and `b = [0, ..., 0, S]`.

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::CscMatrix;

use crate::sparse::csc_from_triplets;

/// Stuffed problem ready for Clarabel.
#[derive(Debug)]
pub struct StuffedProblem {
    /// Quadratic cost matrix P (n x n, upper triangle).
    pub p: CscMatrix<f64>,
    /// Linear cost vector q (n).
    pub q: Vec<f64>,
    /// Constraint matrix A ((n + 1) x n).
    pub a: CscMatrix<f64>,
    /// Constraint vector b (n + 1).
    pub b: Vec<f64>,
    /// Number of nonnegative cone rows (always n + 1).
    pub nonneg_rows: usize,
    /// Constant offset in objective (y'y).
    pub objective_offset: f64,
}

/// Build the stuffed problem from the design matrix, observations and budget.
///
/// The dual vector returned by Clarabel for the stuffed problem is laid out
/// as `z[0..n]` for the positivity block and `z[n]` for the budget row.
pub fn stuff_problem(x: &DMatrix<f64>, y: &DVector<f64>, budget: f64) -> StuffedProblem {
    let n = x.ncols();

    let (p, q) = stuff_objective(x, y);
    let (a, b) = stuff_constraints(n, budget);

    StuffedProblem {
        p,
        q,
        a,
        b,
        nonneg_rows: n + 1,
        objective_offset: y.dot(y),
    }
}

/// Stuff the objective into P and q.
fn stuff_objective(x: &DMatrix<f64>, y: &DVector<f64>) -> (CscMatrix<f64>, Vec<f64>) {
    let n = x.ncols();

    // P = 2 X'X. Clarabel expects the upper triangle of a symmetric P only.
    let gram = x.transpose() * x;
    let mut p_rows = Vec::new();
    let mut p_cols = Vec::new();
    let mut p_vals = Vec::new();

    for col in 0..n {
        for row in 0..=col {
            let v = 2.0 * gram[(row, col)];
            if v.abs() > 1e-15 {
                p_rows.push(row);
                p_cols.push(col);
                p_vals.push(v);
            }
        }
    }

    let p = csc_from_triplets(n, n, p_rows, p_cols, p_vals);

    // q = -2 X'y
    let xty = x.transpose() * y;
    let q: Vec<f64> = xty.iter().map(|v| -2.0 * v).collect();

    (p, q)
}

/// Stuff the constraints into A and b.
///
/// Row layout:
/// - rows 0..n: `-theta_i + s_i = 0, s_i >= 0` (positivity)
/// - row n: `sum(theta) + s = S, s >= 0` (budget)
fn stuff_constraints(n: usize, budget: f64) -> (CscMatrix<f64>, Vec<f64>) {
    let total_rows = n + 1;

    let mut a_rows = Vec::with_capacity(2 * n);
    let mut a_cols = Vec::with_capacity(2 * n);
    let mut a_vals = Vec::with_capacity(2 * n);

    for i in 0..n {
        a_rows.push(i);
        a_cols.push(i);
        a_vals.push(-1.0);
    }
    for j in 0..n {
        a_rows.push(n);
        a_cols.push(j);
        a_vals.push(1.0);
    }

    let a = csc_from_triplets(total_rows, n, a_rows, a_cols, a_vals);

    let mut b = vec![0.0; total_rows];
    b[n] = budget;

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stuffed_dimensions() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let y = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let stuffed = stuff_problem(&x, &y, 5.0);

        assert_eq!(stuffed.p.nrows(), 2);
        assert_eq!(stuffed.p.ncols(), 2);
        assert_eq!(stuffed.q.len(), 2);
        assert_eq!(stuffed.a.nrows(), 3);
        assert_eq!(stuffed.a.ncols(), 2);
        assert_eq!(stuffed.b, vec![0.0, 0.0, 5.0]);
        assert_eq!(stuffed.nonneg_rows, 3);
    }

    #[test]
    fn test_objective_terms_identity_design() {
        // X = I gives P = 2I (upper triangle = diagonal) and q = -2y.
        let x = DMatrix::identity(2, 2);
        let y = DVector::from_vec(vec![3.0, -1.0]);
        let stuffed = stuff_problem(&x, &y, 1.0);

        let diag: Vec<f64> = stuffed
            .p
            .triplet_iter()
            .filter(|(r, c, _)| r == c)
            .map(|(_, _, v)| *v)
            .collect();
        assert_eq!(diag, vec![2.0, 2.0]);
        assert_eq!(stuffed.q, vec![-6.0, 2.0]);
        assert_eq!(stuffed.objective_offset, 10.0);
    }

    #[test]
    fn test_p_is_upper_triangular() {
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let y = DVector::from_vec(vec![1.0, 1.0]);
        let stuffed = stuff_problem(&x, &y, 1.0);

        assert!(stuffed.p.triplet_iter().all(|(r, c, _)| r <= c));
    }
}
