//! Propositional formula representation and parsing
//!
//! This module provides [`Expr`], a strict expression tree over the five
//! connectives AND, OR, NOT, IMPLIES and IFF, together with the tokenizer
//! and recursive-descent parser that build one from text.
//!
//! # Quick Start
//!
//! ```
//! use truth_tables::Expr;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), truth_tables::LogicError> {
//! let expr = Expr::parse("A AND (B OR NOT A)")?;
//!
//! let mut assignment = HashMap::new();
//! assignment.insert(Arc::from("A"), true);
//! assignment.insert(Arc::from("B"), false);
//! assert_eq!(expr.evaluate(&assignment)?, false);
//! # Ok(())
//! # }
//! ```
//!
//! Precedence from loosest to tightest binding: IFF, IMPLIES, OR, AND, NOT.
//! IMPLIES and IFF associate to the right, AND and OR to the left, so
//! `A -> B -> C` reads as `A -> (B -> C)` and `A & B & C` as `(A & B) & C`.

mod display;
pub mod error;
mod eval;
mod parser;
mod token;

pub use error::SyntaxError;
pub use eval::Assignment;
pub use token::{tokenize, Token, TokenKind};

use std::sync::Arc;

/// A propositional formula as an owned expression tree
///
/// Each node owns its children outright; the tree is immutable after
/// parsing, so it can be shared freely across threads for evaluation.
/// Variable names are interned as `Arc<str>` so tables and normal-form
/// terms can reference them without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A named variable
    Variable(Arc<str>),
    /// Negation of a subformula
    Not(Box<Expr>),
    /// Conjunction of two subformulas
    And(Box<Expr>, Box<Expr>),
    /// Disjunction of two subformulas
    Or(Box<Expr>, Box<Expr>),
    /// Implication, antecedent then consequent
    Implies(Box<Expr>, Box<Expr>),
    /// Biconditional of two subformulas
    Iff(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Parse formula text into an expression tree
    ///
    /// Tokenizes the input and runs the recursive-descent parser over the
    /// token sequence. See [`tokenize`] for the accepted connective
    /// spellings and the module docs for precedence and associativity.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::Expr;
    ///
    /// let expr = Expr::parse("A -> B -> C").unwrap();
    /// assert_eq!(expr.to_string(), "A -> B -> C");
    ///
    /// assert!(Expr::parse("A AND (B").is_err());
    /// assert!(Expr::parse("A B").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        let tokens = token::tokenize(input)?;
        parser::parse(tokens)
    }

    /// Create a variable expression with the given name
    pub fn variable(name: &str) -> Self {
        Expr::Variable(Arc::from(name))
    }

    /// Negate this expression
    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Conjoin this expression with another
    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    /// Disjoin this expression with another
    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    /// Build the implication from this expression to another
    pub fn implies(self, rhs: Expr) -> Self {
        Expr::Implies(Box::new(self), Box::new(rhs))
    }

    /// Build the biconditional of this expression and another
    pub fn iff(self, rhs: Expr) -> Self {
        Expr::Iff(Box::new(self), Box::new(rhs))
    }

    /// Collect the distinct variable names in first-occurrence order
    ///
    /// The same order is used everywhere a variable order matters: truth
    /// table columns and row enumeration, normal-form literals, and the
    /// Karnaugh map axes.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::Expr;
    ///
    /// let expr = Expr::parse("B AND A OR B").unwrap();
    /// let names: Vec<_> = expr.variables().iter().map(|v| v.to_string()).collect();
    /// assert_eq!(names, vec!["B", "A"]);
    /// ```
    pub fn variables(&self) -> Vec<Arc<str>> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<Arc<str>>) {
        match self {
            Expr::Variable(name) => {
                if !names.iter().any(|n| n == name) {
                    names.push(Arc::clone(name));
                }
            }
            Expr::Not(inner) => inner.collect_variables(names),
            Expr::And(left, right)
            | Expr::Or(left, right)
            | Expr::Implies(left, right)
            | Expr::Iff(left, right) => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}
