//! Statistical hypothesis tests.
//!
//! The descriptive engine composes these tests into its profile:
//! - Normality: Shapiro-Wilk and Kolmogorov-Smirnov ([`normality`])
//! - Location: one-sample t-test and mean confidence intervals ([`parametric`])
//! - Scale: chi-squared variance diagnostic ([`variance`])
//! - Association: Pearson correlation ([`correlation`])
//!
//! All tests drop non-finite observations before computing and report
//! two-sided p-values.


pub use correlation::pearson;
pub use normality::{kolmogorov_smirnov, shapiro_wilk};
pub use parametric::{mean_confidence_interval, one_sample_t};
pub use variance::chi_square_variance;

use serde::Serialize;
use statrs::distribution::{ChiSquared, FisherSnedecor, Normal, StudentsT};

use crate::errors::{StatsError, StatsResult};

/// Result of a statistical test
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Test statistic
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Degrees of freedom, NaN where the test has none
    pub df: f64,
    /// Number of observations used
    pub n: usize,
    /// Name of the test
    pub method: String,
}

/// Result of a chi-squared test
#[derive(Debug, Clone, Serialize)]
pub struct ChiSquareResult {
    /// Chi-squared statistic
    pub statistic: f64,
    /// Upper-tail p-value
    pub p_value: f64,
    /// Degrees of freedom
    pub df: usize,
    /// Reference variance the sample was scaled against
    pub reference_variance: f64,
    /// Name of the test
    pub method: String,
}

/// Result of a correlation estimate
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationResult {
    /// Correlation coefficient
    pub r: f64,
    /// t-statistic of the coefficient
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Number of pairs used
    pub n: usize,
    /// Name of the estimator
    pub method: String,
}

/// Drops non-finite observations
pub(crate) fn filter_finite(data: &[f64]) -> Vec<f64> {
    data.iter().filter(|v| v.is_finite()).copied().collect()
}

pub(crate) fn std_normal() -> StatsResult<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| StatsError::Numeric(e.to_string()))
}

pub(crate) fn students_t(df: f64) -> StatsResult<StudentsT> {
    StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Numeric(e.to_string()))
}

pub(crate) fn chi_squared(df: f64) -> StatsResult<ChiSquared> {
    ChiSquared::new(df).map_err(|e| StatsError::Numeric(e.to_string()))
}

pub(crate) fn fisher_snedecor(df1: f64, df2: f64) -> StatsResult<FisherSnedecor> {
    FisherSnedecor::new(df1, df2).map_err(|e| StatsError::Numeric(e.to_string()))
}
