//! Resolution of NUM/DENOM/ID specifications into paired rows
//!
//! The assembler turns three parallel specifications into one vector of
//! [`ProportionRow`]s: it fetches named vectors from the source, broadcasts
//! single values to the common length, prunes rows with missing counts, and
//! fails fast on anything that cannot be reconciled. All statistical work
//! happens downstream in the engine.

use crate::ValueSpec;
use prop_core::{Error, ProportionRow, Result, VectorSource};
use tracing::debug;

/// Outcome of input resolution: rows ready for the interval engine
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInput {
    /// Rows with both counts present, in input order
    pub rows: Vec<ProportionRow>,
    /// Rows discarded because the numerator or denominator was missing
    pub dropped_rows: usize,
}

/// Resolve numerator, denominator and optional identifier specifications
/// against a source
///
/// The identifier, when given, must be the name of a source vector; literal
/// identifier lists are not accepted, which the `Option<&str>` shape
/// enforces by construction.
///
/// # Errors
/// - `InvalidSpec` for an empty literal list or a non-numeric named vector
/// - `UnknownVariable` when a name is absent from the source
/// - `ShapeMismatch` when vectors cannot be reconciled by broadcasting
/// - `EmptyInput` when no row survives the missing-value prune
pub fn resolve<S: VectorSource>(
    num: &ValueSpec,
    denom: &ValueSpec,
    id: Option<&str>,
    source: &S,
) -> Result<ResolvedInput> {
    let numerators = resolve_numeric(num, "NUM", source)?;
    let denominators = resolve_numeric(denom, "DENOM", source)?;
    let identifiers = match id {
        Some(name) => Some(resolve_labels(name, source)?),
        None => None,
    };

    let target = numerators
        .len()
        .max(denominators.len())
        .max(identifiers.as_ref().map_or(0, Vec::len));

    let numerators = broadcast(numerators, target, "NUM")?;
    let denominators = broadcast(denominators, target, "DENOM")?;
    let identifiers = match identifiers {
        Some(labels) => broadcast(labels, target, "ID")?,
        None => vec![None; target],
    };

    // prune rows with a missing count; identifier-only gaps keep the row
    let mut rows = Vec::with_capacity(target);
    let mut dropped_rows = 0;
    for ((numerator, denominator), label) in numerators
        .into_iter()
        .zip(denominators)
        .zip(identifiers)
    {
        match (numerator, denominator) {
            (Some(numerator), Some(denominator)) => {
                let mut row = ProportionRow::new(numerator, denominator);
                if let Some(label) = label {
                    row = row.with_label(label);
                }
                rows.push(row);
            }
            _ => dropped_rows += 1,
        }
    }

    if rows.is_empty() {
        return Err(Error::EmptyInput);
    }
    debug!(
        "resolved {} proportion rows ({} dropped for missing counts)",
        rows.len(),
        dropped_rows
    );
    Ok(ResolvedInput { rows, dropped_rows })
}

fn resolve_numeric<S: VectorSource>(
    spec: &ValueSpec,
    context: &str,
    source: &S,
) -> Result<Vec<Option<f64>>> {
    match spec {
        ValueSpec::Literals(values) => {
            if values.is_empty() {
                return Err(Error::invalid_spec(format!(
                    "{context} requires at least one value"
                )));
            }
            Ok(values.iter().copied().map(Some).collect())
        }
        ValueSpec::Variable(name) => {
            if !source.contains(name) {
                return Err(Error::unknown_variable(name.clone()));
            }
            source.numeric(name).ok_or_else(|| {
                Error::invalid_spec(format!("{context} variable {name} is not numeric"))
            })
        }
    }
}

fn resolve_labels<S: VectorSource>(name: &str, source: &S) -> Result<Vec<Option<String>>> {
    source
        .labels(name)
        .ok_or_else(|| Error::unknown_variable(name.to_string()))
}

fn broadcast<T: Clone>(values: Vec<T>, target: usize, context: &str) -> Result<Vec<T>> {
    if values.len() == target {
        Ok(values)
    } else if values.len() == 1 {
        Ok(vec![values[0].clone(); target])
    } else {
        Err(Error::shape_mismatch(context, target, values.len()))
    }
}
