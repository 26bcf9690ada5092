//! Reconciliation and statistical inference engine for yearly Romanian
//! regional labor-market indicators.
//!
//! The crate is organized along the analysis pipeline:
//!
//! - [`table`]: column-typed source tables with tolerant numeric coercion
//! - [`entity`]: canonical entity keys for counties and the national aggregate
//! - [`catalog`]: the closed catalog of supported indicators
//! - [`frame`]: year selection, stratum filtering and entity joins
//! - [`describe`]: descriptive profiles with significance diagnostics
//! - [`regression`]: standardized OLS over frame columns
//! - [`tests`]: the underlying hypothesis tests
//! - [`diagnostics`]: collinearity and residual diagnostics
//!
//! # Example
//!
//! ```
//! use centru_stats_core::catalog::Indicator;
//! use centru_stats_core::frame::{build_frame, FrameRequest, FrameSource};
//! use centru_stats_core::table::IndicatorTable;
//! use centru_stats_core::{describe, DescribeOptions};
//!
//! # fn main() -> centru_stats_core::StatsResult<()> {
//! let table = IndicatorTable::new(
//!     "Somaj",
//!     vec![
//!         (
//!             "Judete".to_string(),
//!             vec!["Alba".into(), "Brașov".into(), "Covasna".into(),
//!                  "Harghita".into(), "Mureș".into(), "Sibiu".into()],
//!         ),
//!         ("Sexe".to_string(), vec!["Total".into(); 6]),
//!         (
//!             "Anul 2021".to_string(),
//!             vec![5.0.into(), 7.0.into(), 6.0.into(),
//!                  8.0.into(), 4.0.into(), 9.0.into()],
//!         ),
//!     ],
//! )?;
//!
//! let sources = [FrameSource::with_stratum(
//!     Indicator::UnemploymentRate,
//!     &table,
//!     "Total",
//! )];
//! let frame = build_frame(&sources, &FrameRequest::new("2021"))?;
//!
//! let values = frame.numeric_column(Indicator::UnemploymentRate)?;
//! let profile = describe(&values, &DescribeOptions::default())?;
//! assert_eq!(profile.n, 6);
//! assert!((profile.mean - 6.5).abs() < 1e-12);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod describe;
pub mod diagnostics;
pub mod entity;
pub mod errors;
pub mod frame;
pub mod regression;
pub mod table;
pub mod tests;
pub mod types;

pub use describe::describe;
pub use errors::{StatsError, StatsResult};
pub use types::{
    ConfidenceInterval, DescribeOptions, DescriptiveResult, OlsFit, OlsInference, OlsOptions,
    OutlierReport, RegressionOptions, RegressionResult,
};
