//! Descriptive statistics engine.
//!
//! One parametrized profile for every indicator sample: location, spread,
//! shape, a size-selected normality test, t-based mean intervals, the
//! historical chi-squared variance diagnostic and a Tukey fence outlier
//! report. Samples with fewer than two usable observations are rejected;
//! degenerate samples (zero variance) produce a profile with the
//! undefined pieces reported as NaN or `None` rather than an error.

use log::debug;

use crate::errors::{StatsError, StatsResult};
use crate::tests::{self, TestResult};
use crate::types::{DescribeOptions, DescriptiveResult, OutlierReport};

/// Reference variance of the historical chi-squared diagnostic.
///
/// Early reports scaled every indicator against a variance of 1; the value
/// is kept so their numbers remain reproducible.
const LEGACY_REFERENCE_VARIANCE: f64 = 1.0;

/// Computes the descriptive profile of a sample.
///
/// # Arguments
/// * `values` - Sample observations; non-finite values are dropped
/// * `options` - Normality threshold, confidence levels and fence multiplier
///
/// # Returns
/// The full profile, or `InsufficientSample` when fewer than two usable
/// observations remain
pub fn describe(values: &[f64], options: &DescribeOptions) -> StatsResult<DescriptiveResult> {
    let data = tests::filter_finite(values);
    let n = data.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { needed: 2, got: n });
    }
    if n < values.len() {
        debug!("describe: dropped {} non-finite observations", values.len() - n);
    }

    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    let variance = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    let std_dev = variance.sqrt();

    let mut sorted = data.clone();
    sorted.sort_by(f64::total_cmp);
    let min = sorted[0];
    let max = sorted[n - 1];
    let median = quantile(&sorted, 0.5);

    let coefficient_of_variation = if mean == 0.0 {
        None
    } else {
        Some(std_dev / mean * 100.0)
    };

    // Population central moments for the shape statistics
    let m2 = data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / nf;
    let (skewness, kurtosis) = if m2 > 0.0 {
        let m3 = data.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / nf;
        let m4 = data.iter().map(|v| (v - mean).powi(4)).sum::<f64>() / nf;
        (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
    } else {
        (f64::NAN, f64::NAN)
    };

    let normality = normality_outcome(&data, variance, options.normality_threshold)?;

    let (level_a, level_b) = options.confidence_levels;
    let mean_ci = [
        tests::mean_confidence_interval(&data, level_a)?,
        tests::mean_confidence_interval(&data, level_b)?,
    ];
    let t_vs_zero = tests::one_sample_t(&data, 0.0)?;
    let variance_diagnostic = tests::chi_square_variance(&data, LEGACY_REFERENCE_VARIANCE)?;
    let outliers = tukey_outliers(&data, &sorted, options.iqr_multiplier);

    Ok(DescriptiveResult {
        n,
        mean,
        median,
        variance,
        std_dev,
        min,
        max,
        range: max - min,
        coefficient_of_variation,
        skewness,
        kurtosis,
        normality,
        mean_ci,
        t_vs_zero,
        variance_diagnostic,
        outliers,
    })
}

/// Runs the normality test selected by sample size.
///
/// Samples of up to `threshold` observations use Shapiro-Wilk, larger ones
/// Kolmogorov-Smirnov. Degenerate samples (zero variance or fewer than
/// three observations) report NaN statistics under the selected method.
fn normality_outcome(data: &[f64], variance: f64, threshold: usize) -> StatsResult<TestResult> {
    let n = data.len();
    let shapiro_selected = n <= threshold;
    if variance == 0.0 || n < 3 {
        let method = if shapiro_selected {
            "Shapiro-Wilk"
        } else {
            "Kolmogorov-Smirnov"
        };
        return Ok(TestResult {
            statistic: f64::NAN,
            p_value: f64::NAN,
            df: f64::NAN,
            n,
            method: method.to_string(),
        });
    }
    if shapiro_selected {
        tests::shapiro_wilk(data)
    } else {
        tests::kolmogorov_smirnov(data)
    }
}

/// Flags values outside the Tukey fences; flagged values stay in the sample
fn tukey_outliers(data: &[f64], sorted: &[f64], multiplier: f64) -> OutlierReport {
    let q1 = quantile(sorted, 0.25);
    let q3 = quantile(sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - multiplier * iqr;
    let upper_fence = q3 + multiplier * iqr;
    let values = data
        .iter()
        .filter(|v| **v < lower_fence || **v > upper_fence)
        .copied()
        .collect();
    OutlierReport {
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        values,
    }
}

/// Linear-interpolation quantile of an ascending sample
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let pos = q * (n - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
