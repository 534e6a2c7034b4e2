//! The interval engine
//!
//! A pure function of its inputs: validated rows and a run configuration in,
//! an ordered [`ProportionReport`] out. Every inverse-CDF evaluation the run
//! needs is collected into a single batch and issued to the quantile
//! provider in one call, so the number of cross-boundary requests stays
//! constant regardless of row count.

use crate::types::{Interval, ProportionReport, ProportionResult, ReferenceDifference};
use prop_core::{Error, ProportionRow, QuantileProvider, QuantileRequest, Result, RunConfiguration};
use tracing::debug;

/// Index layout of one row's entries in the batched quantile request
struct RowPlan {
    binomial_lower: usize,
    binomial_upper: usize,
    /// Absent when the numerator is zero; the Poisson lower bound then
    /// collapses one-sided to zero without an evaluation
    poisson_lower: Option<usize>,
    poisson_upper: usize,
}

fn push(requests: &mut Vec<QuantileRequest>, request: QuantileRequest) -> usize {
    requests.push(request);
    requests.len() - 1
}

/// Compute Binomial, Poisson and difference-from-reference intervals for
/// every row
///
/// Row 0 is the reference row regardless of its magnitude; its difference
/// field stays `None`. Result order matches input order.
///
/// # Errors
/// - `EmptyInput` when `rows` is empty
/// - `InvalidProportion` when a row fails [`ProportionRow::validate`]
/// - `ExternalComputation` when the provider fails or returns a malformed
///   batch
pub fn compute<Q: QuantileProvider>(
    rows: &[ProportionRow],
    config: &RunConfiguration,
    provider: &Q,
) -> Result<ProportionReport> {
    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }
    for row in rows {
        row.validate()?;
    }

    let lower_tail = config.lower_tail();
    let upper_tail = config.upper_tail();

    // Jeffreys-type Beta shapes and Poisson Chi-squared degrees per row,
    // then the single shared Normal tail quantile.
    let mut requests = Vec::with_capacity(4 * rows.len() + 1);
    let mut plans = Vec::with_capacity(rows.len());
    for row in rows {
        let shape_a = row.numerator + 0.5;
        let shape_b = row.denominator - row.numerator + 0.5;
        plans.push(RowPlan {
            binomial_lower: push(
                &mut requests,
                QuantileRequest::Beta {
                    p: lower_tail,
                    shape_a,
                    shape_b,
                },
            ),
            binomial_upper: push(
                &mut requests,
                QuantileRequest::Beta {
                    p: upper_tail,
                    shape_a,
                    shape_b,
                },
            ),
            poisson_lower: (row.numerator > 0.0).then(|| {
                push(
                    &mut requests,
                    QuantileRequest::ChiSquared {
                        p: lower_tail,
                        freedom: 2.0 * row.numerator,
                    },
                )
            }),
            poisson_upper: push(
                &mut requests,
                QuantileRequest::ChiSquared {
                    p: upper_tail,
                    freedom: 2.0 * (row.numerator + 1.0),
                },
            ),
        });
    }
    let z_index = push(
        &mut requests,
        QuantileRequest::Normal {
            p: upper_tail,
            mean: 0.0,
            std_dev: 1.0,
        },
    );

    debug!(
        "issuing {} quantile evaluations for {} rows in one batch",
        requests.len(),
        rows.len()
    );
    let values = provider.inverse_cdf_batch(&requests)?;
    if values.len() != requests.len() {
        return Err(Error::external(format!(
            "provider returned {} values for {} requests",
            values.len(),
            requests.len()
        )));
    }

    let z = values[z_index];
    let reference = &rows[0];
    let p0 = reference.estimate();

    let results = rows
        .iter()
        .zip(&plans)
        .enumerate()
        .map(|(i, (row, plan))| {
            let p = row.estimate();
            let half_denom = 2.0 * row.denominator;
            let poisson_lower = match plan.poisson_lower {
                Some(index) => values[index] / half_denom,
                None => 0.0,
            };
            let difference = (i > 0).then(|| {
                let sd = (p0 * (1.0 - p0) / reference.denominator
                    + p * (1.0 - p) / row.denominator)
                    .sqrt();
                let estimate = p - p0;
                ReferenceDifference {
                    estimate,
                    interval: Interval::new(estimate - sd * z, estimate + sd * z),
                }
            });
            ProportionResult {
                label: row
                    .label
                    .clone()
                    .unwrap_or_else(|| (i + 1).to_string()),
                p,
                binomial: Interval::new(values[plan.binomial_lower], values[plan.binomial_upper]),
                poisson: Interval::new(poisson_lower, values[plan.poisson_upper] / half_denom),
                difference,
            }
        })
        .collect();

    Ok(ProportionReport {
        results,
        alpha: config.alpha(),
        zero_adjusted: rows.iter().any(|r| r.numerator == 0.0),
        dropped_rows: 0,
    })
}
