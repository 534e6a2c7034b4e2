//! Invocation boundary for command-style front ends
//!
//! A front end builds an [`AnalysisRequest`], hands it to [`run`] together
//! with a vector source, and receives either a report or the help text. The
//! [`run_or_message`] variant is the quiet user-facing edge: every error in
//! the taxonomy becomes a single printable message. Callers that want the
//! full typed failure use [`run`] directly.

use prop_confidence::{compute, ProportionReport};
use prop_core::{Adjustment, Result, RunConfiguration, StatrsProvider, VectorSource};
use prop_input::{resolve, ValueSpec};

/// Help text for interactive front ends
pub const HELP_TEXT: &str = "\
Confidence intervals for proportions and differences in proportions.

A request pairs numerator and denominator count vectors and produces, for
each proportion, an exact Binomial interval and a Poisson-based interval,
plus a normal-approximation interval for the difference of each proportion
from the first one.

Numerators and denominators are given either as literal numbers or as the
name of a vector held by the source. Both must resolve to the same number
of values, except that a single value is repeated as many times as needed.
An identifier may name a vector whose values label the output rows;
otherwise rows are labelled by position.

Alpha defaults to 0.05. Rows with a missing numerator or denominator are
dropped; their count is reported. The adjust keyword is accepted but
currently performs no multiple-comparison adjustment.

A help request displays this text and computes nothing.";

/// A complete request: what to analyze and at what level
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    /// Numerator counts
    pub numerators: ValueSpec,
    /// Denominator counts
    pub denominators: ValueSpec,
    /// Name of a source vector labelling the rows
    pub identifier: Option<String>,
    /// Two-sided significance level
    pub alpha: f64,
    /// Reserved multiple-comparison keyword
    pub adjustment: Adjustment,
    /// When set, short-circuit to the help text
    pub help: bool,
}

impl AnalysisRequest {
    /// Create a request with the default alpha level
    pub fn new(numerators: ValueSpec, denominators: ValueSpec) -> Self {
        Self {
            numerators,
            denominators,
            identifier: None,
            alpha: RunConfiguration::DEFAULT_ALPHA,
            adjustment: Adjustment::default(),
            help: false,
        }
    }

    /// Name a source vector whose values label the output rows
    pub fn with_identifier(mut self, name: impl Into<String>) -> Self {
        self.identifier = Some(name.into());
        self
    }

    /// Set the two-sided significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the (reserved) adjustment keyword
    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// Ask for the help text instead of a computation
    pub fn help() -> Self {
        Self {
            numerators: ValueSpec::Literals(Vec::new()),
            denominators: ValueSpec::Literals(Vec::new()),
            identifier: None,
            alpha: RunConfiguration::DEFAULT_ALPHA,
            adjustment: Adjustment::default(),
            help: true,
        }
    }
}

/// What one invocation produced
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// A computed result set
    Report(ProportionReport),
    /// The help text; nothing was computed
    Help(&'static str),
}

/// Execute a request against a vector source
///
/// A help request returns [`AnalysisOutcome::Help`] without touching the
/// source or the quantile provider. Everything else flows through the
/// assembler into the engine; the first error aborts the run and no
/// partial report is produced.
pub fn run<S: VectorSource>(request: &AnalysisRequest, source: &S) -> Result<AnalysisOutcome> {
    if request.help {
        return Ok(AnalysisOutcome::Help(HELP_TEXT));
    }
    let config = RunConfiguration::new(request.alpha)?.with_adjustment(request.adjustment);
    let resolved = resolve(
        &request.numerators,
        &request.denominators,
        request.identifier.as_deref(),
        source,
    )?;
    let report = compute(&resolved.rows, &config, &StatrsProvider)?
        .with_dropped_rows(resolved.dropped_rows);
    Ok(AnalysisOutcome::Report(report))
}

/// Quiet boundary: any failure becomes one printable message
pub fn run_or_message<S: VectorSource>(
    request: &AnalysisRequest,
    source: &S,
) -> std::result::Result<AnalysisOutcome, String> {
    run(request, source).map_err(|e| e.to_string())
}
