//! Error types for the truth-table pipeline
//!
//! All errors surface synchronously to the caller and are recoverable:
//! a failed request leaves nothing half-built.

use crate::expression::SyntaxError;
use std::fmt;
use std::io;
use std::sync::Arc;

/// The main error type for the truth-table pipeline
///
/// Covers everything that can go wrong between formula text and the
/// derived results, with programmatically distinguishable variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    /// The tokenizer or parser rejected the formula text
    Syntax(SyntaxError),

    /// An evaluation was attempted with an assignment missing a variable
    ///
    /// Table generation always supplies a total assignment, so seeing this
    /// after a successful parse means the caller built the assignment by
    /// hand and left a variable out.
    UnboundVariable {
        /// The variable the assignment does not cover
        name: Arc<str>,
    },

    /// A Karnaugh map was requested for a formula without exactly two
    /// variables
    UnsupportedArity {
        /// How many distinct variables the formula actually has
        found: usize,
    },
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicError::Syntax(err) => write!(f, "{}", err),
            LogicError::UnboundVariable { name } => {
                write!(f, "No value assigned to variable {:?}", name)
            }
            LogicError::UnsupportedArity { found } => {
                write!(
                    f,
                    "Karnaugh maps require exactly 2 variables, formula has {}",
                    found
                )
            }
        }
    }
}

impl std::error::Error for LogicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogicError::Syntax(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SyntaxError> for LogicError {
    fn from(err: SyntaxError) -> Self {
        LogicError::Syntax(err)
    }
}

impl From<LogicError> for io::Error {
    fn from(err: LogicError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_wraps_and_sources() {
        use std::error::Error as _;

        let syntax = SyntaxError::UnexpectedEnd { position: 3 };
        let err: LogicError = syntax.clone().into();
        assert_eq!(err, LogicError::Syntax(syntax));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unbound_variable_message() {
        let err = LogicError::UnboundVariable {
            name: Arc::from("B"),
        };
        assert!(err.to_string().contains("\"B\""));
    }

    #[test]
    fn test_unsupported_arity_message() {
        let err = LogicError::UnsupportedArity { found: 3 };
        let msg = err.to_string();
        assert!(msg.contains("exactly 2"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_logic_error_to_io_error() {
        let err = LogicError::UnsupportedArity { found: 1 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
