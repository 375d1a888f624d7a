//! Error types for specification evaluation.

use thiserror::Error;

/// Errors raised while building or evaluating specifications.
///
/// Both are recoverable: the caller decides whether to skip the item or
/// abort the filter pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The item lacks an attribute the specification compares against
    #[error("{item} has no {attribute} attribute")]
    MissingAttribute { item: String, attribute: &'static str },

    /// An unsupported boolean combinator was requested
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;
