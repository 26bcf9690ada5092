//! Ordinary least squares with inference statistics.
//!
//! Coefficients come from the normal equations solved through an explicit
//! (X'X)^-1, whose diagonal also feeds the coefficient standard errors.
//! A singular cross-product matrix is reported as rank deficiency instead
//! of being regularized away.

use nalgebra::{DMatrix, DVector};
use statrs::distribution::ContinuousCDF;

use crate::errors::{StatsError, StatsResult};
use crate::tests::{fisher_snedecor, students_t};
use crate::types::{OlsFit, OlsInference, OlsOptions};

/// Fits an ordinary least squares model.
///
/// # Arguments
/// * `y` - Dependent values
/// * `x` - Predictor columns, each as long as `y`
/// * `options` - Intercept, inference and confidence level settings
///
/// # Returns
/// Fit with coefficients, goodness of fit and, when requested, inference
/// statistics. Rows with a non-finite value in `y` or any predictor are
/// dropped before fitting.
pub fn fit_ols(y: &[f64], x: &[Vec<f64>], options: &OlsOptions) -> StatsResult<OlsFit> {
    if y.is_empty() {
        return Err(StatsError::EmptyInput { field: "y" });
    }
    if x.is_empty() {
        return Err(StatsError::EmptyInput { field: "x" });
    }
    for column in x {
        if column.len() != y.len() {
            return Err(StatsError::DimensionMismatch {
                expected: y.len(),
                got: column.len(),
            });
        }
    }

    let valid: Vec<usize> = (0..y.len())
        .filter(|&i| y[i].is_finite() && x.iter().all(|col| col[i].is_finite()))
        .collect();
    let n = valid.len();
    let p = x.len();
    let k = p + usize::from(options.fit_intercept);
    if n <= k {
        return Err(StatsError::InsufficientData { rows: n, cols: p });
    }
    let nf = n as f64;

    let design = DMatrix::from_fn(n, k, |r, c| {
        let row = valid[r];
        if options.fit_intercept {
            if c == 0 {
                1.0
            } else {
                x[c - 1][row]
            }
        } else {
            x[c][row]
        }
    });
    let y_vec = DVector::from_iterator(n, valid.iter().map(|&i| y[i]));

    let xtx = design.transpose() * &design;
    let xtx_inv = xtx.try_inverse().ok_or(StatsError::RankDeficient)?;
    let beta = &xtx_inv * (design.transpose() * &y_vec);

    let fitted_vec = &design * &beta;
    let residuals_vec = &y_vec - &fitted_vec;
    let rss = residuals_vec.iter().map(|e| e * e).sum::<f64>().max(0.0);
    let tss = if options.fit_intercept {
        let y_mean = y_vec.iter().sum::<f64>() / nf;
        y_vec.iter().map(|v| (v - y_mean).powi(2)).sum::<f64>()
    } else {
        y_vec.iter().map(|v| v * v).sum::<f64>()
    };
    let r_squared = if tss > 0.0 { 1.0 - rss / tss } else { 0.0 };

    let df = (n - k) as f64;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (nf - 1.0) / df;
    let sigma2 = rss / df;
    let residual_std_error = sigma2.sqrt();

    let offset = usize::from(options.fit_intercept);
    let coefficients: Vec<f64> = (0..p).map(|j| beta[offset + j]).collect();
    let intercept = options.fit_intercept.then(|| beta[0]);

    let inference = if options.compute_inference {
        Some(inference_statistics(
            &coefficients,
            &xtx_inv,
            offset,
            sigma2,
            rss,
            tss,
            p,
            df,
            options.confidence_level,
        )?)
    } else {
        None
    };

    Ok(OlsFit {
        coefficients,
        intercept,
        r_squared,
        adj_r_squared,
        residual_std_error,
        n_observations: n,
        fitted: fitted_vec.iter().copied().collect(),
        residuals: residuals_vec.iter().copied().collect(),
        inference,
    })
}

#[allow(clippy::too_many_arguments)]
fn inference_statistics(
    coefficients: &[f64],
    xtx_inv: &DMatrix<f64>,
    offset: usize,
    sigma2: f64,
    rss: f64,
    tss: f64,
    p: usize,
    df: f64,
    confidence_level: f64,
) -> StatsResult<OlsInference> {
    let dist = students_t(df)?;
    let t_crit = dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);

    let mut std_errors = Vec::with_capacity(p);
    let mut t_values = Vec::with_capacity(p);
    let mut p_values = Vec::with_capacity(p);
    let mut ci_lower = Vec::with_capacity(p);
    let mut ci_upper = Vec::with_capacity(p);
    for (j, &coef) in coefficients.iter().enumerate() {
        let idx = offset + j;
        let se = (sigma2 * xtx_inv[(idx, idx)]).max(0.0).sqrt();
        let (t, p_value) = if se > 0.0 {
            let t = coef / se;
            (t, (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0))
        } else if coef == 0.0 {
            (0.0, 1.0)
        } else {
            // Exact fit: the coefficient is known without uncertainty
            (f64::INFINITY * coef.signum(), 0.0)
        };
        std_errors.push(se);
        t_values.push(t);
        p_values.push(p_value);
        ci_lower.push(coef - t_crit * se);
        ci_upper.push(coef + t_crit * se);
    }

    let df_model = p as f64;
    let (f_statistic, f_pvalue) = if rss > 0.0 && tss > rss {
        let f = ((tss - rss) / df_model) / (rss / df);
        let f_dist = fisher_snedecor(df_model, df)?;
        (f, (1.0 - f_dist.cdf(f)).clamp(0.0, 1.0))
    } else if rss == 0.0 && tss > 0.0 {
        (f64::INFINITY, 0.0)
    } else {
        // No explained variance
        (0.0, 1.0)
    };

    Ok(OlsInference {
        std_errors,
        t_values,
        p_values,
        ci_lower,
        ci_upper,
        confidence_level,
        f_statistic,
        f_pvalue,
    })
}
