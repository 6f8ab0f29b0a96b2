//! Vector metrics used for solution comparison.

use nalgebra::DVector;

use crate::error::{Result, SweepError};

/// Infinity norm: the maximum absolute entry of a vector.
///
/// Returns 0 for an empty vector.
pub fn norm_inf(v: &DVector<f64>) -> f64 {
    v.iter().fold(0.0, |acc, x| acc.max(x.abs()))
}

/// Infinity norm of `theta - reference`, for each theta in a sequence.
///
/// Length-preserving map: the output is index-aligned with `thetas`. Every
/// theta must have the same dimension as the reference vector.
pub fn norm_inf_difference_thetas(
    thetas: &[DVector<f64>],
    reference: &DVector<f64>,
) -> Result<Vec<f64>> {
    for theta in thetas {
        if theta.len() != reference.len() {
            return Err(SweepError::DimensionMismatch {
                expected: format!("theta of length {}", reference.len()),
                got: format!("theta of length {}", theta.len()),
            });
        }
    }

    Ok(thetas
        .iter()
        .map(|theta| norm_inf(&(theta - reference)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_inf() {
        let v = DVector::from_vec(vec![1.0, -4.0, 2.5]);
        assert_eq!(norm_inf(&v), 4.0);
    }

    #[test]
    fn test_norm_inf_empty() {
        let v = DVector::from_vec(vec![]);
        assert_eq!(norm_inf(&v), 0.0);
    }

    #[test]
    fn test_self_difference_is_zero() {
        let theta = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let result = norm_inf_difference_thetas(&[theta.clone()], &theta).unwrap();
        assert_eq!(result, vec![0.0]);
    }

    #[test]
    fn test_difference_values() {
        let reference = DVector::from_vec(vec![1.0, 1.0]);
        let thetas = vec![
            DVector::from_vec(vec![3.0, 0.0]),
            DVector::from_vec(vec![1.0, -2.0]),
        ];
        let result = norm_inf_difference_thetas(&thetas, &reference).unwrap();
        assert_eq!(result, vec![2.0, 3.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let reference = DVector::from_vec(vec![1.0, 1.0]);
        let thetas = vec![DVector::from_vec(vec![1.0, 2.0, 3.0])];
        let result = norm_inf_difference_thetas(&thetas, &reference);
        assert!(matches!(
            result,
            Err(SweepError::DimensionMismatch { .. })
        ));
    }
}
