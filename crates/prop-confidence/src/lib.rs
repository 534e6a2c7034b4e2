//! Confidence intervals for binomial proportions
//!
//! This crate is the interval engine of the prop-stats workspace. For each
//! input proportion it computes:
//!
//! - **Binomial interval**: exact, Jeffreys-type, from Beta-distribution
//!   quantiles with half-shifted shape parameters, well-defined even for a
//!   zero or full numerator
//! - **Poisson interval**: from Chi-squared quantiles, with a one-sided
//!   collapse of the lower bound to zero when the numerator is zero
//! - **Difference interval**: pooled-variance normal approximation of each
//!   proportion's difference from the first ("reference") proportion
//!
//! The engine is a pure function: no retained state, and one batched
//! request to the quantile provider per run.
//!
//! # Example
//!
//! ```rust
//! use prop_core::{ProportionRow, RunConfiguration, StatrsProvider};
//! use prop_confidence::compute;
//!
//! let rows = vec![
//!     ProportionRow::new(52.0, 100.0),
//!     ProportionRow::new(55.0, 100.0),
//! ];
//! let config = RunConfiguration::default();
//! let report = compute(&rows, &config, &StatrsProvider).unwrap();
//!
//! assert!(report.results[0].binomial.contains(0.52));
//! assert!(report.results[0].difference.is_none());
//! ```

mod engine;
mod types;

// Re-exports
pub use engine::compute;
pub use types::{Interval, ProportionReport, ProportionResult, ReferenceDifference};

use prop_core::{ProportionRow, Result, RunConfiguration, StatrsProvider};

/// Convenience: compute intervals at the given alpha with the default
/// `statrs`-backed provider
pub fn proportion_intervals(rows: &[ProportionRow], alpha: f64) -> Result<ProportionReport> {
    let config = RunConfiguration::new(alpha)?;
    compute(rows, &config, &StatrsProvider)
}
