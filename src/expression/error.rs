//! Error types for formula tokenization and parsing

use std::fmt;
use std::io;

/// Errors raised while turning formula text into an expression tree
///
/// Every variant carries the byte offset into the input where the problem
/// was detected, so a caller can point at the offending spot when reporting
/// the error to a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character outside the recognized alphabet (letters, digits,
    /// underscores, parentheses, connective symbols, whitespace)
    UnknownCharacter {
        /// The character that was rejected
        character: char,
        /// Byte offset of the character in the input
        position: usize,
    },

    /// A token appeared where an operand cannot go,
    /// e.g. a connective with a missing operand
    UnexpectedToken {
        /// Source text of the offending token
        found: String,
        /// Byte offset of the token in the input
        position: usize,
    },

    /// The input ended while an operand was still expected
    UnexpectedEnd {
        /// Byte offset of the end of input
        position: usize,
    },

    /// A parenthesis without a matching partner
    UnmatchedParenthesis {
        /// Byte offset of the unmatched parenthesis
        position: usize,
    },

    /// A complete formula was parsed but tokens remain,
    /// e.g. two atoms with no connective between them
    TrailingInput {
        /// Source text of the first leftover token
        found: String,
        /// Byte offset of the leftover token
        position: usize,
    },
}

impl SyntaxError {
    /// Byte offset into the input at which the error was detected
    pub fn position(&self) -> usize {
        match self {
            SyntaxError::UnknownCharacter { position, .. }
            | SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::UnexpectedEnd { position }
            | SyntaxError::UnmatchedParenthesis { position }
            | SyntaxError::TrailingInput { position, .. } => *position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnknownCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unrecognized character {:?} at position {}",
                    character, position
                )
            }
            SyntaxError::UnexpectedToken { found, position } => {
                write!(f, "Unexpected {:?} at position {}", found, position)
            }
            SyntaxError::UnexpectedEnd { position } => {
                write!(
                    f,
                    "Unexpected end of input at position {}: expected an operand",
                    position
                )
            }
            SyntaxError::UnmatchedParenthesis { position } => {
                write!(f, "Unmatched parenthesis at position {}", position)
            }
            SyntaxError::TrailingInput { found, position } => {
                write!(
                    f,
                    "Trailing input {:?} at position {}: expected a connective or end of formula",
                    found, position
                )
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

impl From<SyntaxError> for io::Error {
    fn from(err: SyntaxError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_character_message() {
        let err = SyntaxError::UnknownCharacter {
            character: '#',
            position: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("'#'"));
        assert!(msg.contains("position 4"));
    }

    #[test]
    fn test_unmatched_parenthesis_message() {
        let err = SyntaxError::UnmatchedParenthesis { position: 6 };
        assert!(err.to_string().contains("position 6"));
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn test_trailing_input_message() {
        let err = SyntaxError::TrailingInput {
            found: "B".to_string(),
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"B\""));
        assert!(msg.contains("position 2"));
    }

    #[test]
    fn test_syntax_error_to_io_error() {
        let err = SyntaxError::UnexpectedEnd { position: 8 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
