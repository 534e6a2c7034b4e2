//! NUM/DENOM specification forms
//!
//! A count vector is specified either as inline numbers or as the name of a
//! vector held by the source. The two forms are an explicit union decided
//! by the caller; nothing downstream re-guesses which one was meant.

use prop_core::{Error, Result};

/// How a count vector is specified
#[derive(Debug, Clone, PartialEq)]
pub enum ValueSpec {
    /// Literal numeric values given inline
    Literals(Vec<f64>),
    /// Name of a vector to fetch from the source
    Variable(String),
}

impl ValueSpec {
    /// A single literal value
    pub fn literal(value: f64) -> Self {
        Self::Literals(vec![value])
    }

    /// A list of literal values
    pub fn literals(values: impl Into<Vec<f64>>) -> Self {
        Self::Literals(values.into())
    }

    /// A named vector
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Classify raw tokens from a command front end
    ///
    /// A token that parses as a number is a literal; anything else names a
    /// vector, and only a single name is allowed. A vector whose name
    /// itself parses as a number (say `1e5`) therefore cannot be referenced
    /// through this heuristic; callers that know which form they mean
    /// should construct the variant directly.
    pub fn from_tokens(tokens: &[&str]) -> Result<Self> {
        if tokens.is_empty() {
            return Err(Error::invalid_spec("at least one value or name is required"));
        }
        let parsed: std::result::Result<Vec<f64>, _> =
            tokens.iter().map(|t| t.parse::<f64>()).collect();
        match parsed {
            Ok(values) => Ok(Self::Literals(values)),
            Err(_) if tokens.len() == 1 => Ok(Self::Variable(tokens[0].to_string())),
            Err(_) => Err(Error::invalid_spec(format!(
                "only one variable may be named, and a variable may not be combined with a value: {}",
                tokens.join(" ")
            ))),
        }
    }
}
