//! Core types and numeric boundaries for proportion interval analysis
//!
//! This crate provides the shared foundation for the prop-stats workspace:
//!
//! - A unified [`Error`] type with the full input/computation taxonomy
//! - Input value objects ([`ProportionRow`], [`RunConfiguration`])
//! - The [`VectorSource`] boundary for reading named data vectors
//! - The [`QuantileProvider`] boundary for batched inverse-CDF evaluation,
//!   with a `statrs`-backed default implementation
//!
//! Both boundaries are traits so that callers can substitute their own data
//! access or numeric backend; the interval engine in `prop-confidence`
//! depends only on the traits.

mod error;
mod quantile;
mod source;
mod types;

// Re-exports
pub use error::{Error, Result};
pub use quantile::{QuantileProvider, QuantileRequest, StatrsProvider};
pub use source::{MemorySource, VectorSource};
pub use types::{Adjustment, ProportionRow, RunConfiguration};
