//! Machine error types.

use thiserror::Error;

/// Errors from machine construction and encoding.
///
/// Neither kind is transient. Both are returned to the caller as soon as they
/// are detected and never retried or logged inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Symbol is not a member of the alphabet.
    #[error("invalid symbol: {symbol:?} is not in A-Z")]
    InvalidSymbol {
        /// The rejected symbol.
        symbol: char,
    },

    /// Machine or component configuration violates a structural invariant.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the violated invariant.
        reason: String,
    },
}

impl EnigmaError {
    /// Shorthand for an [`EnigmaError::InvalidConfiguration`].
    pub fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Returns true if this error was raised while building a machine.
    ///
    /// Configuration errors mean the machine (or one of its parts) was never
    /// constructed. Symbol errors leave an existing machine untouched.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidConfiguration { .. } => true,
            Self::InvalidSymbol { .. } => false,
        }
    }
}
