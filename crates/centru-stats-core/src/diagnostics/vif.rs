//! Variance inflation factors.

use crate::errors::{StatsError, StatsResult};
use crate::regression::ols::fit_ols;
use crate::types::OlsOptions;

/// Highest auxiliary R-squared still reported as a finite factor
const R_SQUARED_CAP: f64 = 0.9999;

/// Computes the variance inflation factor for each predictor column.
///
/// Each factor is 1 / (1 - R_k^2), where R_k^2 comes from regressing
/// column k on the remaining columns with an intercept. Factors from
/// auxiliary fits at or beyond an R-squared of 0.9999, and from singular
/// auxiliary fits, are reported as infinite.
///
/// # Arguments
/// * `x` - Predictor columns, all equally long
pub fn compute_vif(x: &[Vec<f64>]) -> StatsResult<Vec<f64>> {
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    let n_features = x.len();
    if n_features == 1 {
        return Ok(vec![1.0]);
    }
    let n_rows = x[0].len();
    for column in x {
        if column.len() != n_rows {
            return Err(StatsError::DimensionMismatch {
                expected: n_rows,
                got: column.len(),
            });
        }
    }
    if n_rows <= n_features {
        return Err(StatsError::InsufficientData {
            rows: n_rows,
            cols: n_features,
        });
    }

    let options = OlsOptions {
        fit_intercept: true,
        compute_inference: false,
        confidence_level: 0.95,
    };
    let mut factors = Vec::with_capacity(n_features);
    for k in 0..n_features {
        let others: Vec<Vec<f64>> = x
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != k)
            .map(|(_, col)| col.clone())
            .collect();
        let factor = match fit_ols(&x[k], &others, &options) {
            Ok(fit) if fit.r_squared < R_SQUARED_CAP => 1.0 / (1.0 - fit.r_squared),
            // Singular or near-perfect auxiliary fit
            _ => f64::INFINITY,
        };
        factors.push(factor);
    }
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_predictor() {
        let vif = compute_vif(&[vec![1.0, 2.0, 3.0, 4.0]]).unwrap();
        assert_eq!(vif, vec![1.0]);
    }

    #[test]
    fn test_orthogonal_predictors() {
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x2 = vec![1.0, -1.0, -1.0, 1.0, 1.0, -1.0, -1.0, 1.0];
        let vif = compute_vif(&[x1, x2]).unwrap();
        assert_relative_eq!(vif[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(vif[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_strongly_collinear_predictors() {
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let x2: Vec<f64> = x1
            .iter()
            .enumerate()
            .map(|(i, v)| 2.0 * v + if i % 2 == 0 { 0.1 } else { -0.1 })
            .collect();
        let vif = compute_vif(&[x1, x2]).unwrap();
        assert!(vif[0] > 100.0 && vif[0].is_finite());
        assert!(vif[1] > 100.0 && vif[1].is_finite());
    }

    #[test]
    fn test_perfectly_collinear_predictors() {
        let x1 = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let x2: Vec<f64> = x1.iter().map(|v| 2.0 * v).collect();
        let vif = compute_vif(&[x1, x2]).unwrap();
        assert!(vif[0].is_infinite());
        assert!(vif[1].is_infinite());
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            compute_vif(&[]),
            Err(StatsError::EmptyInput { field: "x" })
        ));
    }

    #[test]
    fn test_too_few_rows() {
        let x = vec![vec![1.0, 2.0], vec![2.0, 1.0]];
        assert!(matches!(
            compute_vif(&x),
            Err(StatsError::InsufficientData { rows: 2, cols: 2 })
        ));
    }
}
