//! Input-side value types shared across the prop-stats crates

use crate::{Error, Result};

/// One observed proportion: a count out of a total
///
/// Rows are constructed once by the input assembler and are immutable
/// thereafter. The engine validates each row before computing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionRow {
    /// Observed count (≥ 0)
    pub numerator: f64,
    /// Total count (> 0)
    pub denominator: f64,
    /// Display label; the 1-based row position is used when absent
    pub label: Option<String>,
}

impl ProportionRow {
    /// Create a row without a label
    pub fn new(numerator: f64, denominator: f64) -> Self {
        Self {
            numerator,
            denominator,
            label: None,
        }
    }

    /// Attach a display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Point estimate `numerator / denominator`
    pub fn estimate(&self) -> f64 {
        self.numerator / self.denominator
    }

    /// Check that the counts form a proportion
    ///
    /// The numerator must not exceed the denominator, the denominator must
    /// be positive, and both counts must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let valid = self.numerator.is_finite()
            && self.denominator.is_finite()
            && self.numerator >= 0.0
            && self.denominator > 0.0
            && self.numerator <= self.denominator;
        if valid {
            Ok(())
        } else {
            Err(Error::invalid_proportion(self.numerator, self.denominator))
        }
    }
}

/// Multiple-comparison adjustment keyword
///
/// Accepted for compatibility with the original command surface; no
/// adjustment is currently applied to the computed intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Adjustment {
    /// Bonferroni correction (reserved)
    #[default]
    Bonferroni,
    /// No correction
    None,
}

/// Configuration for one computation run
///
/// Immutable for the duration of an invocation. The alpha level is
/// validated at construction so that no out-of-range probability can reach
/// the quantile provider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfiguration {
    alpha: f64,
    adjustment: Adjustment,
}

impl RunConfiguration {
    /// Default two-sided significance level
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Create a configuration with the given alpha level
    ///
    /// # Errors
    /// Returns `InvalidParameter` if alpha is not strictly inside (0, 1).
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(Error::invalid_alpha(alpha));
        }
        Ok(Self {
            alpha,
            adjustment: Adjustment::default(),
        })
    }

    /// Set the (reserved) adjustment keyword
    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = adjustment;
        self
    }

    /// The two-sided significance level
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The adjustment keyword this run was configured with
    pub fn adjustment(&self) -> Adjustment {
        self.adjustment
    }

    /// Lower tail probability `alpha / 2`
    pub fn lower_tail(&self) -> f64 {
        self.alpha / 2.0
    }

    /// Upper tail probability `1 - alpha / 2`
    pub fn upper_tail(&self) -> f64 {
        1.0 - self.alpha / 2.0
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            alpha: Self::DEFAULT_ALPHA,
            adjustment: Adjustment::default(),
        }
    }
}
