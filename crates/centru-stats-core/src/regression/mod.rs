//! Regression engine over reconciled frames.
//!
//! `fit_frame` turns frame columns into a complete-case estimation sample,
//! standardizes the predictors, fits OLS with an intercept and attaches
//! collinearity and residual diagnostics. The low-level [`ols`] fit and
//! [`standardize`] scaling are exposed for direct use.

pub mod ols;
pub mod standardize;

pub use ols::fit_ols;
pub use standardize::zscore;

use log::debug;

use crate::catalog::Indicator;
use crate::diagnostics;
use crate::errors::{StatsError, StatsResult};
use crate::frame::AnalysisFrame;
use crate::types::{OlsFit, OlsInference, OlsOptions, RegressionOptions, RegressionResult};

/// Fits a standardized OLS model on frame columns.
///
/// Rows with a missing value in the dependent or any predictor column are
/// excluded before fitting (complete-case analysis). Predictors are
/// z-score standardized on the estimation sample, so coefficients are in
/// comparable units; the dependent stays on its original scale.
///
/// # Arguments
/// * `frame` - Reconciled analysis frame
/// * `dependent` - Column to explain
/// * `predictors` - Explanatory columns, at least one
/// * `options` - Confidence level for coefficient intervals
///
/// # Returns
/// Regression result with inference, variance inflation factors and
/// residual series, or an error when the frame cannot support the model
pub fn fit_frame(
    frame: &AnalysisFrame,
    dependent: Indicator,
    predictors: &[Indicator],
    options: &RegressionOptions,
) -> StatsResult<RegressionResult> {
    if predictors.is_empty() {
        return Err(StatsError::EmptyInput {
            field: "predictors",
        });
    }

    let y_col = frame.column(dependent)?;
    let x_cols: Vec<Vec<Option<f64>>> = predictors
        .iter()
        .map(|p| frame.column(*p))
        .collect::<StatsResult<_>>()?;

    let keep: Vec<usize> = (0..y_col.len())
        .filter(|&i| y_col[i].is_some() && x_cols.iter().all(|col| col[i].is_some()))
        .collect();
    let n = keep.len();
    if n < predictors.len() + 2 {
        return Err(StatsError::InsufficientData {
            rows: n,
            cols: predictors.len(),
        });
    }
    if n < y_col.len() {
        debug!(
            "fit_frame: {} of {} entities are complete cases",
            n,
            y_col.len()
        );
    }

    let y: Vec<f64> = keep.iter().filter_map(|&i| y_col[i]).collect();
    if y.iter().all(|v| *v == y[0]) {
        return Err(StatsError::DependentVarianceZero);
    }

    let mut z_cols = Vec::with_capacity(predictors.len());
    for col in &x_cols {
        let values: Vec<f64> = keep.iter().filter_map(|&i| col[i]).collect();
        z_cols.push(zscore(&values)?.values);
    }

    let ols_options = OlsOptions {
        fit_intercept: true,
        compute_inference: true,
        confidence_level: options.confidence_level,
    };
    let fit = fit_ols(&y, &z_cols, &ols_options)?;
    let series = diagnostics::residual_series(&y, &fit.fitted, fit.residual_std_error)?;
    let vif = diagnostics::compute_vif(&z_cols)?;

    let entities: Vec<String> = frame
        .entities()
        .enumerate()
        .filter(|(i, _)| keep.contains(i))
        .map(|(_, key)| key.to_string())
        .collect();

    let OlsFit {
        coefficients,
        intercept,
        r_squared,
        adj_r_squared,
        residual_std_error,
        n_observations,
        fitted,
        inference,
        ..
    } = fit;
    let OlsInference {
        std_errors,
        t_values,
        p_values,
        ci_lower,
        ci_upper,
        confidence_level,
        f_statistic,
        f_pvalue,
    } = inference.ok_or_else(|| StatsError::Numeric("missing inference statistics".to_string()))?;

    Ok(RegressionResult {
        dependent: dependent.to_string(),
        predictors: predictors.iter().map(|p| p.to_string()).collect(),
        entities,
        n_observations,
        intercept: intercept.unwrap_or(0.0),
        coefficients,
        std_errors,
        t_values,
        p_values,
        ci_lower,
        ci_upper,
        confidence_level,
        r_squared,
        adj_r_squared,
        residual_std_error,
        f_statistic,
        f_pvalue,
        vif,
        fitted,
        residuals: series.raw,
        standardized_residuals: series.standardized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::canonicalize;
    use approx::assert_relative_eq;
    use std::collections::BTreeMap;

    const COUNTIES: [&str; 6] = ["Alba", "Brasov", "Covasna", "Harghita", "Mures", "Sibiu"];

    fn frame_with(columns: &[(Indicator, [Option<f64>; 6])]) -> AnalysisFrame {
        let mut rows: BTreeMap<_, Vec<Option<f64>>> = BTreeMap::new();
        for (i, county) in COUNTIES.iter().enumerate() {
            rows.insert(
                canonicalize(county),
                columns.iter().map(|(_, values)| values[i]).collect(),
            );
        }
        AnalysisFrame {
            year: "2021".to_string(),
            indicators: columns.iter().map(|(ind, _)| *ind).collect(),
            rows,
        }
    }

    #[test]
    fn test_near_collinear_predictors() {
        // Both predictors are affine in the dependent, the second with a
        // small alternating perturbation
        let y = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let p1 = y.map(|v| 2.0 * v);
        let p2 = [2.05, 3.95, 6.05, 7.95, 10.05, 11.95];
        let frame = frame_with(&[
            (Indicator::UnemploymentRate, y.map(Some)),
            (Indicator::AverageWage, p1.map(Some)),
            (Indicator::Graduates, p2.map(Some)),
        ]);

        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage, Indicator::Graduates],
            &RegressionOptions::default(),
        )
        .unwrap();

        assert_relative_eq!(result.r_squared, 1.0, epsilon = 1e-9);
        assert!(result.vif[0] > 100.0);
        assert!(result.vif[1] > 100.0);
        assert_eq!(result.n_observations, 6);
        assert_eq!(result.entities.len(), 6);
        assert_eq!(result.dependent, "unemployment_rate");
    }

    #[test]
    fn test_constant_dependent_rejected() {
        let frame = frame_with(&[
            (Indicator::UnemploymentRate, [Some(3.0); 6]),
            (Indicator::AverageWage, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].map(Some)),
        ]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage],
            &RegressionOptions::default(),
        );
        assert!(matches!(result, Err(StatsError::DependentVarianceZero)));
    }

    #[test]
    fn test_constant_predictor_is_rank_deficient() {
        let frame = frame_with(&[
            (Indicator::UnemploymentRate, [5.0, 7.0, 6.0, 8.0, 4.0, 9.0].map(Some)),
            (Indicator::AverageWage, [2.0; 6].map(Some)),
        ]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage],
            &RegressionOptions::default(),
        );
        assert!(matches!(result, Err(StatsError::RankDeficient)));
    }

    #[test]
    fn test_complete_case_exclusion() {
        let frame = frame_with(&[
            (
                Indicator::UnemploymentRate,
                [Some(5.0), Some(7.0), Some(6.0), Some(8.0), Some(4.0), Some(9.0)],
            ),
            (
                Indicator::AverageWage,
                [Some(3.1), Some(4.0), None, Some(5.2), Some(2.8), Some(6.1)],
            ),
        ]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage],
            &RegressionOptions::default(),
        )
        .unwrap();
        assert_eq!(result.n_observations, 5);
        assert!(!result.entities.contains(&"Covasna".to_string()));
        assert_eq!(result.fitted.len(), 5);
        assert_eq!(result.standardized_residuals.len(), 5);
    }

    #[test]
    fn test_standardization_changes_scale_not_fit() {
        let y = [5.0, 7.0, 6.0, 8.0, 4.0, 9.0];
        let wage = [310.0, 400.0, 350.0, 520.0, 280.0, 610.0];
        let frame = frame_with(&[
            (Indicator::UnemploymentRate, y.map(Some)),
            (Indicator::AverageWage, wage.map(Some)),
        ]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage],
            &RegressionOptions::default(),
        )
        .unwrap();

        let z = zscore(&wage).unwrap();
        let direct = fit_ols(&y, &[wage.to_vec()], &OlsOptions::default()).unwrap();
        // Same r-squared; the coefficient absorbs the predictor scale
        assert_relative_eq!(result.r_squared, direct.r_squared, epsilon = 1e-9);
        assert_relative_eq!(
            result.coefficients[0],
            direct.coefficients[0] * z.std_dev,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_missing_predictor_column() {
        let frame = frame_with(&[(
            Indicator::UnemploymentRate,
            [5.0, 7.0, 6.0, 8.0, 4.0, 9.0].map(Some),
        )]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[Indicator::AverageWage],
            &RegressionOptions::default(),
        );
        assert!(matches!(result, Err(StatsError::UnknownColumn(_))));
    }

    #[test]
    fn test_no_predictors_rejected() {
        let frame = frame_with(&[(
            Indicator::UnemploymentRate,
            [5.0, 7.0, 6.0, 8.0, 4.0, 9.0].map(Some),
        )]);
        let result = fit_frame(
            &frame,
            Indicator::UnemploymentRate,
            &[],
            &RegressionOptions::default(),
        );
        assert!(matches!(result, Err(StatsError::EmptyInput { .. })));
    }
}
