//! Recursive-descent parser over the token sequence
//!
//! One function per precedence level, loosest first: `iff`, `implies`,
//! `or`, `and`, `unary`, `atom`. The binary levels either loop (left
//! associative AND/OR) or recurse on their own level to the right (right
//! associative IMPLIES/IFF). All syntactic validation happens here; the
//! parser is purely functional over its input and only builds the tree.

use super::error::SyntaxError;
use super::token::{Token, TokenKind};
use super::Expr;
use std::sync::Arc;

/// Parse a tokenized formula into an expression tree
///
/// The token sequence must be terminated by a [`TokenKind::End`] token, as
/// produced by [`tokenize`](super::tokenize). Fails when tokens remain
/// after a complete formula.
pub(super) fn parse(tokens: Vec<Token>) -> Result<Expr, SyntaxError> {
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.iff()?;
    let leftover = parser.peek();
    match leftover.kind {
        TokenKind::End => Ok(expr),
        TokenKind::RParen => Err(SyntaxError::UnmatchedParenthesis {
            position: leftover.position,
        }),
        _ => Err(SyntaxError::TrailingInput {
            found: leftover.text.clone(),
            position: leftover.position,
        }),
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        // The End token is never consumed, so pos stays in bounds
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::End {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    fn iff(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.implies()?;
        if self.eat(TokenKind::Iff) {
            let right = self.iff()?;
            Ok(left.iff(right))
        } else {
            Ok(left)
        }
    }

    fn implies(&mut self) -> Result<Expr, SyntaxError> {
        let left = self.or()?;
        if self.eat(TokenKind::Implies) {
            let right = self.implies()?;
            Ok(left.implies(right))
        } else {
            Ok(left)
        }
    }

    fn or(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.and()?;
        while self.eat(TokenKind::Or) {
            expr = expr.or(self.and()?);
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.unary()?;
        while self.eat(TokenKind::And) {
            expr = expr.and(self.unary()?);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if self.eat(TokenKind::Not) {
            Ok(self.unary()?.not())
        } else {
            self.atom()
        }
    }

    fn atom(&mut self) -> Result<Expr, SyntaxError> {
        match self.peek().kind {
            TokenKind::Variable => {
                let token = self.advance();
                Ok(Expr::Variable(Arc::from(token.text.as_str())))
            }
            TokenKind::LParen => {
                let open = self.advance();
                let expr = self.iff()?;
                if self.eat(TokenKind::RParen) {
                    Ok(expr)
                } else if self.peek().kind == TokenKind::End {
                    Err(SyntaxError::UnmatchedParenthesis {
                        position: open.position,
                    })
                } else {
                    let found = self.peek();
                    Err(SyntaxError::UnexpectedToken {
                        found: found.text.clone(),
                        position: found.position,
                    })
                }
            }
            TokenKind::End => Err(SyntaxError::UnexpectedEnd {
                position: self.peek().position,
            }),
            _ => {
                let found = self.peek();
                Err(SyntaxError::UnexpectedToken {
                    found: found.text.clone(),
                    position: found.position,
                })
            }
        }
    }
}
