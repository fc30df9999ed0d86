//! Tokenization of formula text
//!
//! The scanner walks the input once, character class by character class,
//! and produces a flat token sequence terminated by [`TokenKind::End`].
//! Connective spellings are fixed and documented on [`tokenize`]; the
//! scanner never guesses beyond that table.

use super::error::SyntaxError;
use std::fmt;

/// The kind of a single token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A variable name
    Variable,
    /// Conjunction connective
    And,
    /// Disjunction connective
    Or,
    /// Negation connective
    Not,
    /// Implication connective
    Implies,
    /// Biconditional connective
    Iff,
    /// Opening parenthesis
    LParen,
    /// Closing parenthesis
    RParen,
    /// End of input marker, always the last token of a sequence
    End,
}

/// A single token produced by [`tokenize`]
///
/// Tokens are produced once per parse and discarded after the expression
/// tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// The source text of the token; the variable name for
    /// [`TokenKind::Variable`], empty for [`TokenKind::End`]
    pub text: String,
    /// Byte offset of the token's first character in the input
    pub position: usize,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == TokenKind::End {
            write!(f, "end of input")
        } else {
            write!(f, "{:?}", self.text)
        }
    }
}

/// Split formula text into a token sequence
///
/// Recognized spellings, applied in this fixed order:
///
/// | Connective | Word form (case-insensitive) | Symbols      |
/// |------------|------------------------------|--------------|
/// | AND        | `AND`                        | `&`, `∧`     |
/// | OR         | `OR`                         | `\|`, `∨`    |
/// | NOT        | `NOT`                        | `!`, `~`, `¬`|
/// | IMPLIES    | `IMPLIES`                    | `->`, `→`    |
/// | IFF        | `IFF`                        | `<->`, `↔`   |
///
/// Variable names are a letter followed by letters, digits or underscores;
/// a name spelling a connective word in any case is always the connective.
/// Whitespace is skipped. Anything else fails with
/// [`SyntaxError::UnknownCharacter`] carrying the byte offset.
///
/// The returned sequence always ends with a single [`TokenKind::End`] token
/// positioned at the end of the input.
///
/// # Examples
///
/// ```
/// use truth_tables::{tokenize, TokenKind};
///
/// let tokens = tokenize("A and !B").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Variable,
///         TokenKind::And,
///         TokenKind::Not,
///         TokenKind::Variable,
///         TokenKind::End,
///     ]
/// );
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };

        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        // Multi-character symbols first so "->" is not read as a bare '-'
        let (kind, len) = if rest.starts_with("<->") {
            (TokenKind::Iff, 3)
        } else if rest.starts_with("->") {
            (TokenKind::Implies, 2)
        } else {
            match ch {
                '(' => (TokenKind::LParen, 1),
                ')' => (TokenKind::RParen, 1),
                '&' => (TokenKind::And, 1),
                '|' => (TokenKind::Or, 1),
                '!' | '~' => (TokenKind::Not, 1),
                '∧' => (TokenKind::And, ch.len_utf8()),
                '∨' => (TokenKind::Or, ch.len_utf8()),
                '¬' => (TokenKind::Not, ch.len_utf8()),
                '→' => (TokenKind::Implies, ch.len_utf8()),
                '↔' => (TokenKind::Iff, ch.len_utf8()),
                c if c.is_ascii_alphabetic() => {
                    let end = rest
                        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                        .unwrap_or(rest.len());
                    (keyword_or_variable(&rest[..end]), end)
                }
                _ => {
                    return Err(SyntaxError::UnknownCharacter {
                        character: ch,
                        position: pos,
                    });
                }
            }
        };

        tokens.push(Token {
            kind,
            text: input[pos..pos + len].to_string(),
            position: pos,
        });
        pos += len;
    }

    tokens.push(Token {
        kind: TokenKind::End,
        text: String::new(),
        position: input.len(),
    });
    Ok(tokens)
}

fn keyword_or_variable(word: &str) -> TokenKind {
    if word.eq_ignore_ascii_case("and") {
        TokenKind::And
    } else if word.eq_ignore_ascii_case("or") {
        TokenKind::Or
    } else if word.eq_ignore_ascii_case("not") {
        TokenKind::Not
    } else if word.eq_ignore_ascii_case("implies") {
        TokenKind::Implies
    } else if word.eq_ignore_ascii_case("iff") {
        TokenKind::Iff
    } else {
        TokenKind::Variable
    }
}
