//! Residual series for fitted models.

use crate::errors::{StatsError, StatsResult};

/// Raw and scaled residuals of a fit
#[derive(Debug, Clone)]
pub struct ResidualSeries {
    /// Observed minus fitted, in sample order
    pub raw: Vec<f64>,
    /// Raw residuals divided by the residual standard error; equal to the
    /// raw residuals when the fit is exact and the error is zero
    pub standardized: Vec<f64>,
}

/// Computes raw and standardized residuals.
///
/// # Arguments
/// * `observed` - Observed dependent values
/// * `fitted` - Fitted values, same length as `observed`
/// * `residual_std_error` - Scale for the standardized series
pub fn residual_series(
    observed: &[f64],
    fitted: &[f64],
    residual_std_error: f64,
) -> StatsResult<ResidualSeries> {
    if observed.len() != fitted.len() {
        return Err(StatsError::DimensionMismatch {
            expected: observed.len(),
            got: fitted.len(),
        });
    }
    if observed.is_empty() {
        return Err(StatsError::EmptyInput { field: "observed" });
    }
    let raw: Vec<f64> = observed.iter().zip(fitted).map(|(o, f)| o - f).collect();
    let standardized = if residual_std_error > 0.0 {
        raw.iter().map(|e| e / residual_std_error).collect()
    } else {
        raw.clone()
    };
    Ok(ResidualSeries { raw, standardized })
}
