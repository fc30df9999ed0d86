//! # Truth Tables
//!
//! A small engine for propositional logic: parse a formula, enumerate its
//! truth table, classify it, and read canonical normal forms and a
//! 2-variable Karnaugh map straight off the table.
//!
//! ## Overview
//!
//! The pipeline runs text → tokens → expression tree → truth table, and
//! every further result is derived from the table:
//!
//! - [`Expr::parse`] — tokenizer and recursive-descent parser
//! - [`TruthTable::generate`] — all 2^n assignments in a fixed counter
//!   order, first variable most significant
//! - [`TruthTable::classify`] — tautology / contradiction / contingent
//! - [`NormalForm::dnf`] / [`NormalForm::cnf`] — minterms of true rows,
//!   maxterms of false rows
//! - [`KMap::build`] — 2×2 grid plus maximal adjacent-true groupings,
//!   exactly two variables only
//!
//! [`Analysis::run`] drives the whole pipeline for one submission and
//! keeps the results together. All types are plain values: nothing is
//! cached across submissions, nothing mutates after construction, and a
//! parsed tree can be evaluated from many threads at once.
//!
//! ## Quick Start
//!
//! ```
//! use truth_tables::{Analysis, Classification};
//!
//! # fn main() -> Result<(), truth_tables::LogicError> {
//! let analysis = Analysis::run("(A -> B) AND A")?;
//!
//! println!("{}", analysis.table());
//! assert_eq!(analysis.classification(), Classification::Contingent);
//! assert_eq!(analysis.dnf().to_string(), "(A & B)");
//!
//! let kmap = analysis.kmap()?;
//! assert!(kmap.cell(true, true));
//! # Ok(())
//! # }
//! ```
//!
//! ## Formula Syntax
//!
//! Connectives, loosest to tightest binding: `IFF` (`<->`, `↔`),
//! `IMPLIES` (`->`, `→`), `OR` (`|`, `∨`), `AND` (`&`, `∧`), `NOT` (`!`,
//! `~`, `¬`). Word forms are case-insensitive; `IMPLIES` and `IFF`
//! associate to the right, `AND` and `OR` to the left. Variables are a
//! letter followed by letters, digits or underscores, and parentheses
//! group as usual. See [`tokenize`] for the full alias table.
//!
//! ## Errors
//!
//! Everything fallible returns [`LogicError`]: a syntax error with the
//! offending position, an unbound variable during evaluation, or a
//! Karnaugh map request for a formula without exactly two variables. All
//! are recoverable; a failed request never corrupts earlier results.
//!
//! ## Cargo Features
//!
//! - `serde` — `Serialize` impls on the result types for presentation
//!   layers that ship structured data
//! - `cli` — the `truthtab` binary (text, CSV and JSON output)

mod analysis;
mod error;
mod expression;
mod kmap;
mod normal_form;
mod table;

pub use analysis::Analysis;
pub use error::LogicError;
pub use expression::{tokenize, Assignment, Expr, SyntaxError, Token, TokenKind};
pub use kmap::{KMap, KMapGroup};
pub use normal_form::{Literal, NormalForm, NormalFormKind, Term};
pub use table::{Classification, Row, TruthTable};
