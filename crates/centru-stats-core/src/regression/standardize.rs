//! Z-score standardization of predictor columns.
//!
//! Predictors enter the regression standardized so coefficient magnitudes
//! are comparable across indicators measured on very different scales
//! (rates in percent next to head counts in thousands).

use crate::errors::{StatsError, StatsResult};

/// A standardized column together with the moments used to scale it
#[derive(Debug, Clone)]
pub struct Standardized {
    /// Values scaled to zero mean and unit variance
    pub values: Vec<f64>,
    /// Mean of the original column
    pub mean: f64,
    /// Sample standard deviation of the original column
    pub std_dev: f64,
}

/// Standardizes a column to zero mean and unit sample variance.
///
/// # Arguments
/// * `values` - Column values, already restricted to the estimation sample
///
/// # Returns
/// The scaled column, or `RankDeficient` for a constant column which
/// cannot enter a design matrix
pub fn zscore(values: &[f64]) -> StatsResult<Standardized> {
    let n = values.len();
    if n < 2 {
        return Err(StatsError::InsufficientSample { needed: 2, got: n });
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    if variance <= 0.0 {
        return Err(StatsError::RankDeficient);
    }
    let std_dev = variance.sqrt();
    Ok(Standardized {
        values: values.iter().map(|v| (v - mean) / std_dev).collect(),
        mean,
        std_dev,
    })
}
