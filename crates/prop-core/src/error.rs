//! Error types for proportion interval analysis
//!
//! Provides a unified error type for all prop-stats crates.

use thiserror::Error;

/// Core error type for proportion interval operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed NUM/DENOM/ID specification
    #[error("Invalid specification: {0}")]
    InvalidSpec(String),

    /// A named vector is absent from the source
    #[error("An undefined variable name was specified: {0}")]
    UnknownVariable(String),

    /// Resolved vectors cannot be reconciled to a common length
    #[error("Shape mismatch: {context} has {actual} values, expected {expected}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// A row has a numerator above its denominator, or a non-positive denominator
    #[error("Invalid proportion: numerator {numerator} with denominator {denominator}")]
    InvalidProportion { numerator: f64, denominator: f64 },

    /// No valid rows remain after dropping missing values
    #[error("No valid proportions were found to analyze")]
    EmptyInput,

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The quantile provider could not evaluate a required quantile
    #[error("Quantile evaluation failed: {0}")]
    ExternalComputation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a malformed specification
    pub fn invalid_spec(message: impl Into<String>) -> Self {
        Self::InvalidSpec(message.into())
    }

    /// Create an error for a name absent from the source
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        Self::UnknownVariable(name.into())
    }

    /// Create an error for vectors that cannot be reconciled to one length
    pub fn shape_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for an invalid numerator/denominator pair
    pub fn invalid_proportion(numerator: f64, denominator: f64) -> Self {
        Self::InvalidProportion {
            numerator,
            denominator,
        }
    }

    /// Create an error for an alpha level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Alpha {alpha} must be in (0, 1)"))
    }

    /// Create an error for a failed quantile evaluation
    pub fn external(message: impl Into<String>) -> Self {
        Self::ExternalComputation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSpec("only one variable may be named".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid specification: only one variable may be named"
        );

        let err = Error::UnknownVariable("region".to_string());
        assert_eq!(
            err.to_string(),
            "An undefined variable name was specified: region"
        );

        let err = Error::shape_mismatch("DENOM", 3, 2);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: DENOM has 2 values, expected 3"
        );

        let err = Error::invalid_proportion(10.0, 5.0);
        assert_eq!(
            err.to_string(),
            "Invalid proportion: numerator 10 with denominator 5"
        );

        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "No valid proportions were found to analyze");

        let err = Error::ExternalComputation("probability 1.5 outside (0, 1)".to_string());
        assert_eq!(
            err.to_string(),
            "Quantile evaluation failed: probability 1.5 outside (0, 1)"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_alpha(1.2);
        assert_eq!(err.to_string(), "Invalid parameter: Alpha 1.2 must be in (0, 1)");

        let err = Error::external("Beta(0, 1): shape must be positive");
        match err {
            Error::ExternalComputation(msg) => {
                assert!(msg.contains("Beta"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_anyhow() {
        let anyhow_err = anyhow::anyhow!("custom error message");
        let err: Error = anyhow_err.into();

        match err {
            Error::Other(_) => {
                assert!(err.to_string().contains("custom error message"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn check_alpha(alpha: f64) -> Result<f64> {
            if alpha > 0.0 && alpha < 1.0 {
                Ok(alpha)
            } else {
                Err(Error::invalid_alpha(alpha))
            }
        }

        assert_eq!(check_alpha(0.05).unwrap(), 0.05);
        assert!(check_alpha(1.5).is_err());
    }
}
