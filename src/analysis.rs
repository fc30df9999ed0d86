//! One-shot analysis of a formula submission
//!
//! [`Analysis`] runs the whole pipeline once per submission and holds the
//! results so a presentation layer can replay them for each of its views
//! without recomputing. Everything is rebuilt from scratch for the next
//! submission; nothing mutates after construction.

use crate::error::LogicError;
use crate::expression::Expr;
use crate::kmap::KMap;
use crate::normal_form::NormalForm;
use crate::table::{Classification, TruthTable};
use std::sync::Arc;

/// The derived results of one formula submission
///
/// # Examples
///
/// ```
/// use truth_tables::{Analysis, Classification};
///
/// # fn main() -> Result<(), truth_tables::LogicError> {
/// let analysis = Analysis::run("A -> B")?;
///
/// assert_eq!(analysis.table().rows().len(), 4);
/// assert_eq!(analysis.classification(), Classification::Contingent);
/// assert_eq!(analysis.dnf().to_string(), "(!A & !B) | (!A & B) | (A & B)");
/// assert_eq!(analysis.cnf().to_string(), "(!A | B)");
/// assert!(analysis.kmap()?.cell(false, true));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    formula: String,
    expr: Expr,
    table: TruthTable,
    classification: Classification,
    dnf: NormalForm,
    cnf: NormalForm,
}

impl Analysis {
    /// Parse a formula and derive its table, classification and normal
    /// forms
    ///
    /// The Karnaugh map is not built here because it is only defined for
    /// 2-variable formulas; request it with [`Analysis::kmap`].
    pub fn run(formula: &str) -> Result<Self, LogicError> {
        let expr = Expr::parse(formula)?;
        let table = TruthTable::generate(&expr)?;
        let classification = table.classify();
        let dnf = NormalForm::dnf(&table);
        let cnf = NormalForm::cnf(&table);
        Ok(Analysis {
            formula: formula.to_string(),
            expr,
            table,
            classification,
            dnf,
            cnf,
        })
    }

    /// The formula text as submitted
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The parsed expression tree
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The distinct variables in first-occurrence order
    pub fn variables(&self) -> &[Arc<str>] {
        self.table.variables()
    }

    /// The full truth table
    pub fn table(&self) -> &TruthTable {
        &self.table
    }

    /// Tautology, contradiction or contingent
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// True under every assignment
    pub fn is_tautology(&self) -> bool {
        self.classification == Classification::Tautology
    }

    /// False under every assignment
    pub fn is_contradiction(&self) -> bool {
        self.classification == Classification::Contradiction
    }

    /// The canonical disjunctive normal form
    pub fn dnf(&self) -> &NormalForm {
        &self.dnf
    }

    /// The canonical conjunctive normal form
    pub fn cnf(&self) -> &NormalForm {
        &self.cnf
    }

    /// Build the 2-variable Karnaugh map on demand
    ///
    /// Fails with [`LogicError::UnsupportedArity`] unless the formula has
    /// exactly two variables.
    pub fn kmap(&self) -> Result<KMap, LogicError> {
        KMap::build(&self.table)
    }
}
