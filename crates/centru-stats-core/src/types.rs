//! Options and result value objects shared across the statistical engines.

use serde::Serialize;

use crate::tests::{ChiSquareResult, TestResult};

/// Options for the descriptive statistics engine
#[derive(Debug, Clone)]
pub struct DescribeOptions {
    /// Largest sample size still tested with Shapiro-Wilk; larger samples
    /// fall back to Kolmogorov-Smirnov
    pub normality_threshold: usize,
    /// Confidence levels for the two reported mean intervals
    pub confidence_levels: (f64, f64),
    /// Multiplier applied to the interquartile range when placing outlier fences
    pub iqr_multiplier: f64,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            normality_threshold: 50,
            confidence_levels: (0.95, 0.99),
            iqr_multiplier: 1.5,
        }
    }
}

/// Options for the frame-level regression engine
#[derive(Debug, Clone)]
pub struct RegressionOptions {
    /// Confidence level for coefficient intervals
    pub confidence_level: f64,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Options for OLS regression
#[derive(Debug, Clone)]
pub struct OlsOptions {
    /// Whether to include an intercept term
    pub fit_intercept: bool,
    /// Whether to compute standard errors, t-statistics, p-values and
    /// confidence intervals alongside the coefficients
    pub compute_inference: bool,
    /// Confidence level for coefficient intervals (e.g. 0.95)
    pub confidence_level: f64,
}

impl Default for OlsOptions {
    fn default() -> Self {
        Self {
            fit_intercept: true,
            compute_inference: true,
            confidence_level: 0.95,
        }
    }
}

/// Confidence interval for a mean at a single level
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceInterval {
    /// Confidence level (e.g. 0.95)
    pub level: f64,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

/// Tukey fence outlier report.
///
/// Flagged values are reported only; they are never removed from the sample.
#[derive(Debug, Clone, Serialize)]
pub struct OutlierReport {
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Interquartile range
    pub iqr: f64,
    /// Lower fence (q1 - multiplier * iqr)
    pub lower_fence: f64,
    /// Upper fence (q3 + multiplier * iqr)
    pub upper_fence: f64,
    /// Values outside the fences, in sample order
    pub values: Vec<f64>,
}

/// Full descriptive profile of a single indicator sample
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveResult {
    /// Number of usable observations
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (interpolated quantile)
    pub median: f64,
    /// Sample variance (n-1 denominator)
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
    /// Minimum
    pub min: f64,
    /// Maximum
    pub max: f64,
    /// Max minus min
    pub range: f64,
    /// Coefficient of variation in percent; `None` when the mean is zero
    pub coefficient_of_variation: Option<f64>,
    /// Sample skewness
    pub skewness: f64,
    /// Excess kurtosis
    pub kurtosis: f64,
    /// Normality test selected by sample size (Shapiro-Wilk or Kolmogorov-Smirnov)
    pub normality: TestResult,
    /// Confidence intervals for the mean at the two configured levels
    pub mean_ci: [ConfidenceInterval; 2],
    /// One-sample t-test of the mean against zero
    pub t_vs_zero: TestResult,
    /// Chi-squared variance diagnostic against a fixed reference variance of 1.
    /// Kept for continuity with historical reports; the reference is arbitrary
    /// for most indicators, so read it as a scale descriptor, not a test.
    pub variance_diagnostic: ChiSquareResult,
    /// Tukey fence outlier report
    pub outliers: OutlierReport,
}

/// Result of an OLS fit
#[derive(Debug, Clone, Serialize)]
pub struct OlsFit {
    /// Coefficients for the predictor columns, in input order
    pub coefficients: Vec<f64>,
    /// Intercept, when one was fitted
    pub intercept: Option<f64>,
    /// Coefficient of determination
    pub r_squared: f64,
    /// R-squared adjusted for the number of predictors
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// Number of observations used in the fit
    pub n_observations: usize,
    /// Fitted values, aligned with the estimation sample
    pub fitted: Vec<f64>,
    /// Raw residuals, aligned with the estimation sample
    pub residuals: Vec<f64>,
    /// Inference statistics, present when requested in the options
    pub inference: Option<OlsInference>,
}

/// Inference statistics for an OLS fit
#[derive(Debug, Clone, Serialize)]
pub struct OlsInference {
    /// Standard errors of the predictor coefficients
    pub std_errors: Vec<f64>,
    /// t-statistics of the predictor coefficients
    pub t_values: Vec<f64>,
    /// Two-sided p-values of the predictor coefficients
    pub p_values: Vec<f64>,
    /// Lower confidence bounds of the predictor coefficients
    pub ci_lower: Vec<f64>,
    /// Upper confidence bounds of the predictor coefficients
    pub ci_upper: Vec<f64>,
    /// Confidence level the bounds were computed at
    pub confidence_level: f64,
    /// F-statistic for overall model significance
    pub f_statistic: f64,
    /// p-value of the F-statistic
    pub f_pvalue: f64,
}

/// Result of a frame-level regression
#[derive(Debug, Clone, Serialize)]
pub struct RegressionResult {
    /// Name of the dependent indicator
    pub dependent: String,
    /// Names of the predictor indicators, in input order
    pub predictors: Vec<String>,
    /// Canonical keys of the entities the model was fitted on
    pub entities: Vec<String>,
    /// Number of complete-case observations
    pub n_observations: usize,
    /// Fitted intercept
    pub intercept: f64,
    /// Coefficients on the standardized predictors, aligned with `predictors`
    pub coefficients: Vec<f64>,
    /// Standard errors of the coefficients
    pub std_errors: Vec<f64>,
    /// t-statistics of the coefficients
    pub t_values: Vec<f64>,
    /// Two-sided p-values of the coefficients
    pub p_values: Vec<f64>,
    /// Lower confidence bounds of the coefficients
    pub ci_lower: Vec<f64>,
    /// Upper confidence bounds of the coefficients
    pub ci_upper: Vec<f64>,
    /// Confidence level of the coefficient bounds
    pub confidence_level: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Adjusted R-squared
    pub adj_r_squared: f64,
    /// Residual standard error
    pub residual_std_error: f64,
    /// F-statistic for overall significance
    pub f_statistic: f64,
    /// p-value of the F-statistic
    pub f_pvalue: f64,
    /// Variance inflation factor per predictor
    pub vif: Vec<f64>,
    /// Fitted values, aligned with `entities`
    pub fitted: Vec<f64>,
    /// Raw residuals, aligned with `entities`
    pub residuals: Vec<f64>,
    /// Residuals scaled by the residual standard error
    pub standardized_residuals: Vec<f64>,
}
