//! Budget Sweep Example
//!
//! This example estimates a sparse nonnegative coefficient vector under a
//! sum budget:
//!
//! minimize    ||X * theta - y||_2^2
//! subject to  theta >= 0, sum(theta) <= S
//!
//! and sweeps S over a grid to show how the budget trades fit quality
//! against the size of the estimate.

use nalgebra::{DMatrix, DVector};
use nnls_sweep::prelude::*;

fn main() {
    println!("=== Budgeted Non-Negative Least Squares ===\n");

    // Regression problem: only 2 of the 5 coefficients are active.
    #[rustfmt::skip]
    let x = DMatrix::from_row_slice(6, 5, &[
        1.0, 0.5, 0.2, 0.8, 0.1,
        0.8, 0.3, 0.1, 0.9, 0.2,
        0.6, 0.4, 0.3, 0.7, 0.3,
        0.9, 0.2, 0.4, 0.6, 0.1,
        0.7, 0.6, 0.2, 0.5, 0.4,
        0.5, 0.1, 0.5, 0.4, 0.2,
    ]);

    // True model: y = 3*x1 + 2*x4
    let theta_true = DVector::from_vec(vec![3.0, 0.0, 0.0, 2.0, 0.0]);
    let y = &x * &theta_true;

    println!("Problem: 6 samples, 5 features, true theta = 3*x1 + 2*x4");
    println!("Sum of true theta: {}\n", theta_true.sum());

    let problem = Problem::new(x, y, 5).expect("valid problem");

    // Sweep the budget from far below to above sum(theta_true) = 5.
    let grid = [0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 8.0];
    let result = problem
        .sweep_with(&grid, &Settings::with_duals())
        .expect("sweep failed");

    println!("{:>6}  {:>10}  {:>12}  {:>12}  {:>12}", "S", "status", "objective", "||th||_inf", "budget dual");
    for (budget, solution) in result.iter() {
        match (solution.objective, solution.theta_inf_norm, &solution.duals) {
            (Some(obj), Some(norm), Some(duals)) => {
                println!(
                    "{:>6.1}  {:>10}  {:>12.6}  {:>12.6}  {:>12.6}",
                    budget, "optimal", obj, norm, duals.budget
                );
            }
            _ => println!("{:>6.1}  {:>10?}", budget, solution.status),
        }
    }

    // How far is each estimate from the truth?
    let thetas: Vec<DVector<f64>> = result
        .thetas()
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    let errors = norm_inf_difference_thetas(&thetas, &theta_true).expect("dimension match");

    println!("\nDistance to true theta (infinity norm):");
    for (budget, err) in grid.iter().zip(&errors) {
        println!("  S = {:>4.1}: {:.6}", budget, err);
    }

    println!("\nConclusion: once S reaches sum(theta_true), the estimate");
    println!("recovers the true coefficients and the budget dual drops to 0.");
}
