//! Error types for bin calculations.
use thiserror::Error;

/// Errors raised while creating calculators or setting their inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculatorError {
    /// The identifier does not name one of the known development types.
    #[error("Unknown development type: {id}")]
    UnknownType {
        /// The identifier which was not recognised
        id: String,
    },

    /// An input value was rejected.
    #[error("Invalid value for {field}: {message}")]
    InvalidInput {
        /// The name of the input
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },
}

impl CalculatorError {
    /// Shorthand for constructing an [`CalculatorError::InvalidInput`]
    pub(crate) fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
