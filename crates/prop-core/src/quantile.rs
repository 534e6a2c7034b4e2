//! Inverse-CDF evaluation behind a provider boundary
//!
//! The interval engine never talks to a distribution library directly. It
//! collects every inverse-CDF evaluation a run needs into a single batch
//! and hands that batch to a [`QuantileProvider`]. This keeps the numeric
//! dependency swappable: production code uses [`StatrsProvider`], tests can
//! substitute a stub returning deterministic fixtures.

use crate::{Error, Result};
use statrs::distribution::{Beta, ChiSquared, ContinuousCDF, Normal};
use tracing::debug;

/// A single inverse-CDF evaluation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantileRequest {
    /// Inverse Beta CDF at probability `p` with the given shape parameters
    Beta { p: f64, shape_a: f64, shape_b: f64 },
    /// Inverse Chi-squared CDF at probability `p` with `freedom` degrees of freedom
    ChiSquared { p: f64, freedom: f64 },
    /// Inverse Normal CDF at probability `p`
    Normal { p: f64, mean: f64, std_dev: f64 },
}

impl QuantileRequest {
    /// The probability argument of this request
    pub fn probability(&self) -> f64 {
        match *self {
            Self::Beta { p, .. } => p,
            Self::ChiSquared { p, .. } => p,
            Self::Normal { p, .. } => p,
        }
    }
}

/// Provider of inverse-CDF evaluations
///
/// Implementations must preserve request order and fail the whole batch on
/// the first request they cannot evaluate; callers treat any failure as
/// fatal for the run.
pub trait QuantileProvider {
    /// Evaluate every request in one batch
    fn inverse_cdf_batch(&self, requests: &[QuantileRequest]) -> Result<Vec<f64>>;
}

/// Default quantile provider backed by `statrs` distributions
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsProvider;

impl StatrsProvider {
    fn evaluate(&self, request: &QuantileRequest) -> Result<f64> {
        let p = request.probability();
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::external(format!("probability {p} outside (0, 1)")));
        }
        let value = match *request {
            QuantileRequest::Beta {
                p,
                shape_a,
                shape_b,
            } => Beta::new(shape_a, shape_b)
                .map_err(|e| Error::external(format!("Beta({shape_a}, {shape_b}): {e}")))?
                .inverse_cdf(p),
            QuantileRequest::ChiSquared { p, freedom } => ChiSquared::new(freedom)
                .map_err(|e| Error::external(format!("ChiSquared({freedom}): {e}")))?
                .inverse_cdf(p),
            QuantileRequest::Normal { p, mean, std_dev } => Normal::new(mean, std_dev)
                .map_err(|e| Error::external(format!("Normal({mean}, {std_dev}): {e}")))?
                .inverse_cdf(p),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Error::external(format!(
                "non-finite quantile for {request:?}"
            )))
        }
    }
}

impl QuantileProvider for StatrsProvider {
    fn inverse_cdf_batch(&self, requests: &[QuantileRequest]) -> Result<Vec<f64>> {
        debug!("evaluating {} inverse-CDF requests", requests.len());
        requests.iter().map(|r| self.evaluate(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_tail_quantile() {
        let provider = StatrsProvider;
        let values = provider
            .inverse_cdf_batch(&[QuantileRequest::Normal {
                p: 0.975,
                mean: 0.0,
                std_dev: 1.0,
            }])
            .unwrap();
        assert_relative_eq!(values[0], 1.959964, epsilon = 1e-5);
    }

    #[test]
    fn test_symmetric_beta_median() {
        let provider = StatrsProvider;
        let values = provider
            .inverse_cdf_batch(&[QuantileRequest::Beta {
                p: 0.5,
                shape_a: 3.5,
                shape_b: 3.5,
            }])
            .unwrap();
        assert_relative_eq!(values[0], 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_chi_squared_two_degrees() {
        // ChiSq⁻¹(p; 2) = -2 ln(1 - p)
        let provider = StatrsProvider;
        let values = provider
            .inverse_cdf_batch(&[QuantileRequest::ChiSquared { p: 0.975, freedom: 2.0 }])
            .unwrap();
        assert_relative_eq!(values[0], 7.377759, epsilon = 1e-3);
    }

    #[test]
    fn test_batch_preserves_order() {
        let provider = StatrsProvider;
        let requests = [
            QuantileRequest::Normal {
                p: 0.975,
                mean: 0.0,
                std_dev: 1.0,
            },
            QuantileRequest::Normal {
                p: 0.025,
                mean: 0.0,
                std_dev: 1.0,
            },
        ];
        let values = provider.inverse_cdf_batch(&requests).unwrap();
        assert!(values[0] > 0.0);
        assert!(values[1] < 0.0);
        assert_relative_eq!(values[0], -values[1], epsilon = 1e-8);
    }

    #[test]
    fn test_probability_out_of_range_fails_batch() {
        let provider = StatrsProvider;
        let requests = [
            QuantileRequest::Normal {
                p: 0.5,
                mean: 0.0,
                std_dev: 1.0,
            },
            QuantileRequest::Beta {
                p: 1.5,
                shape_a: 2.0,
                shape_b: 2.0,
            },
        ];
        let result = provider.inverse_cdf_batch(&requests);
        assert!(matches!(result, Err(Error::ExternalComputation(_))));
    }

    #[test]
    fn test_invalid_shape_parameters_fail() {
        let provider = StatrsProvider;
        let result = provider.inverse_cdf_batch(&[QuantileRequest::ChiSquared {
            p: 0.5,
            freedom: 0.0,
        }]);
        assert!(result.is_err());
    }
}
