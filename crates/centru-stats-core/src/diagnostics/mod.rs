//! Model diagnostics.
//!
//! - Collinearity: variance inflation factors ([`vif`])
//! - Fit quality: raw and standardized residual series ([`residuals`])

pub mod residuals;
pub mod vif;

pub use residuals::{residual_series, ResidualSeries};
pub use vif::compute_vif;
