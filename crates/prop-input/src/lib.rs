//! Input resolution and pairing for proportion interval analysis
//!
//! This crate is the input assembler of the prop-stats workspace: it takes
//! numerator, denominator and optional identifier specifications (inline
//! literals or names of vectors held by a [`prop_core::VectorSource`]) and
//! resolves them into equal-length, validated [`prop_core::ProportionRow`]s
//! for the interval engine.
//!
//! # Example
//!
//! ```rust
//! use prop_core::MemorySource;
//! use prop_input::{resolve, ValueSpec};
//!
//! let source = MemorySource::new()
//!     .with_values("n", vec![52.0, 55.0])
//!     .with_values("d", vec![100.0, 100.0]);
//!
//! let resolved = resolve(
//!     &ValueSpec::variable("n"),
//!     &ValueSpec::variable("d"),
//!     None,
//!     &source,
//! ).unwrap();
//! assert_eq!(resolved.rows.len(), 2);
//! ```

mod assembler;
mod spec;

// Re-exports
pub use assembler::{resolve, ResolvedInput};
pub use spec::ValueSpec;
