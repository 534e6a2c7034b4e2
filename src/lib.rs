//! Confidence intervals for proportions and differences in proportions
//!
//! Given one or more proportions, each a numerator/denominator count pair,
//! this library computes, per proportion:
//!
//! - an exact **Binomial** interval (Jeffreys-type, via Beta quantiles)
//! - an exact **Poisson-based** interval (via Chi-squared quantiles)
//! - for every proportion after the first, a pooled-variance normal
//!   approximation interval for the **difference from the first
//!   ("reference") proportion**
//!
//! The workspace splits the work the way the data flows:
//!
//! - [`prop_input`] resolves numerator/denominator/identifier
//!   specifications against a [`VectorSource`] and pairs them into rows
//! - [`prop_confidence`] is the interval engine, issuing one batched
//!   request per run to a [`QuantileProvider`]
//! - [`prop_core`] holds the shared types, the error taxonomy and the
//!   default `statrs`-backed provider
//!
//! # Example
//!
//! ```rust
//! use prop_stats::{run, AnalysisOutcome, AnalysisRequest, MemorySource, ValueSpec};
//!
//! let request = AnalysisRequest::new(
//!     ValueSpec::literals([52.0, 55.0]),
//!     ValueSpec::literals([100.0, 100.0]),
//! );
//! let outcome = run(&request, &MemorySource::new()).unwrap();
//!
//! let AnalysisOutcome::Report(report) = outcome else { unreachable!() };
//! assert_eq!(report.results.len(), 2);
//! assert!(report.results[0].difference.is_none());
//! println!("{report}");
//! ```

mod api;

// Re-exports
pub use api::{run, run_or_message, AnalysisOutcome, AnalysisRequest, HELP_TEXT};
pub use prop_confidence::{
    compute, proportion_intervals, Interval, ProportionReport, ProportionResult,
    ReferenceDifference,
};
pub use prop_core::{
    Adjustment, Error, MemorySource, ProportionRow, QuantileProvider, QuantileRequest, Result,
    RunConfiguration, StatrsProvider, VectorSource,
};
pub use prop_input::{resolve, ResolvedInput, ValueSpec};
