//! Canonical normal forms extracted from a truth table
//!
//! DNF collects a minterm for every true row, CNF a maxterm for every
//! false row, both in row order. These are the literal table readouts, not
//! minimized forms; the only minimization in this crate is the fixed
//! 2-variable case analysis in [`KMap`](crate::KMap).

use crate::error::LogicError;
use crate::expression::Assignment;
use crate::table::TruthTable;
use std::fmt;
use std::sync::Arc;

/// A possibly negated variable occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Literal {
    /// The variable name
    pub name: Arc<str>,
    /// True for the plain variable, false for its negation
    pub positive: bool,
}

/// One term of a normal form, with one literal per table variable
///
/// In a DNF the literals are conjoined (a minterm); in a CNF they are
/// disjoined (a maxterm).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// The literals in table variable order
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }
}

/// Whether a normal form joins its terms with OR (DNF) or AND (CNF)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NormalFormKind {
    /// Disjunctive normal form, a disjunction of minterms
    Dnf,
    /// Conjunctive normal form, a conjunction of maxterms
    Cnf,
}

/// A canonical normal form read off a truth table
///
/// Degenerate cases follow the usual conventions: the DNF of a
/// contradiction is the empty disjunction and renders as `0`, the CNF of a
/// tautology is the empty conjunction and renders as `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NormalForm {
    kind: NormalFormKind,
    terms: Vec<Term>,
}

impl NormalForm {
    /// Build the disjunctive normal form of a table
    ///
    /// Every row with a true result contributes the minterm that matches
    /// exactly that row: each variable appears positively where the row
    /// assigns it true, negatively otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{Expr, NormalForm, TruthTable};
    ///
    /// let expr = Expr::parse("A IFF B").unwrap();
    /// let table = TruthTable::generate(&expr).unwrap();
    /// let dnf = NormalForm::dnf(&table);
    /// assert_eq!(dnf.to_string(), "(!A & !B) | (A & B)");
    /// ```
    pub fn dnf(table: &TruthTable) -> Self {
        let terms = table
            .rows()
            .iter()
            .filter(|row| row.result)
            .map(|row| Term {
                literals: table
                    .variables()
                    .iter()
                    .zip(&row.values)
                    .map(|(name, value)| Literal {
                        name: Arc::clone(name),
                        positive: *value,
                    })
                    .collect(),
            })
            .collect();
        NormalForm {
            kind: NormalFormKind::Dnf,
            terms,
        }
    }

    /// Build the conjunctive normal form of a table
    ///
    /// Every row with a false result contributes the maxterm that excludes
    /// exactly that row: each variable appears negatively where the row
    /// assigns it true, positively otherwise (the De Morgan dual of the
    /// row's minterm).
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{Expr, NormalForm, TruthTable};
    ///
    /// let expr = Expr::parse("A AND B").unwrap();
    /// let table = TruthTable::generate(&expr).unwrap();
    /// let cnf = NormalForm::cnf(&table);
    /// assert_eq!(cnf.to_string(), "(A | B) & (A | !B) & (!A | B)");
    /// ```
    pub fn cnf(table: &TruthTable) -> Self {
        let terms = table
            .rows()
            .iter()
            .filter(|row| !row.result)
            .map(|row| Term {
                literals: table
                    .variables()
                    .iter()
                    .zip(&row.values)
                    .map(|(name, value)| Literal {
                        name: Arc::clone(name),
                        positive: !*value,
                    })
                    .collect(),
            })
            .collect();
        NormalForm {
            kind: NormalFormKind::Cnf,
            terms,
        }
    }

    /// Whether this is a DNF or a CNF
    pub fn kind(&self) -> NormalFormKind {
        self.kind
    }

    /// The terms in table row order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// True when no row contributed a term
    ///
    /// An empty DNF is the constant false, an empty CNF the constant true.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate the normal form under an assignment
    ///
    /// A DNF is true when some term has all its literals satisfied; a CNF
    /// is true when every term has at least one literal satisfied. The
    /// empty DNF is false, the empty CNF true. Evaluating a formula's
    /// normal form under each of its table assignments reproduces the
    /// table's result column exactly.
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        let mut term_values = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let mut hit = match self.kind {
                NormalFormKind::Dnf => true,
                NormalFormKind::Cnf => false,
            };
            for literal in &term.literals {
                let value = assignment.get(&literal.name).copied().ok_or_else(|| {
                    LogicError::UnboundVariable {
                        name: Arc::clone(&literal.name),
                    }
                })?;
                let satisfied = value == literal.positive;
                hit = match self.kind {
                    NormalFormKind::Dnf => hit && satisfied,
                    NormalFormKind::Cnf => hit || satisfied,
                };
            }
            term_values.push(hit);
        }
        Ok(match self.kind {
            NormalFormKind::Dnf => term_values.iter().any(|v| *v),
            NormalFormKind::Cnf => term_values.iter().all(|v| *v),
        })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.name)
        } else {
            write!(f, "!{}", self.name)
        }
    }
}

/// Renders each term parenthesized, literals joined by the inner
/// connective, terms joined by the outer one: `(!A & B) | (A & !B)` for a
/// DNF, `(A | B) & (!A | !B)` for a CNF. Empty forms render `0` and `1`.
impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (inner, outer, empty) = match self.kind {
            NormalFormKind::Dnf => (" & ", " | ", "0"),
            NormalFormKind::Cnf => (" | ", " & ", "1"),
        };
        if self.terms.is_empty() {
            return write!(f, "{}", empty);
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", outer)?;
            }
            write!(f, "(")?;
            for (j, literal) in term.literals.iter().enumerate() {
                if j > 0 {
                    write!(f, "{}", inner)?;
                }
                write!(f, "{}", literal)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expr;

    fn table_for(formula: &str) -> TruthTable {
        let expr = Expr::parse(formula).unwrap();
        TruthTable::generate(&expr).unwrap()
    }

    #[test]
    fn test_dnf_collects_true_rows_in_order() {
        let table = table_for("A OR B");
        let dnf = NormalForm::dnf(&table);
        assert_eq!(dnf.terms().len(), 3);
        assert_eq!(dnf.to_string(), "(!A & B) | (A & !B) | (A & B)");
    }

    #[test]
    fn test_cnf_collects_false_rows_in_order() {
        let table = table_for("A OR B");
        let cnf = NormalForm::cnf(&table);
        assert_eq!(cnf.terms().len(), 1);
        assert_eq!(cnf.to_string(), "(A | B)");
    }

    #[test]
    fn test_degenerate_forms() {
        let tautology = table_for("A OR NOT A");
        assert!(NormalForm::cnf(&tautology).is_empty());
        assert_eq!(NormalForm::cnf(&tautology).to_string(), "1");
        // The DNF of a tautology covers every row
        assert_eq!(NormalForm::dnf(&tautology).terms().len(), 2);

        let contradiction = table_for("A AND NOT A");
        assert!(NormalForm::dnf(&contradiction).is_empty());
        assert_eq!(NormalForm::dnf(&contradiction).to_string(), "0");
    }

    #[test]
    fn test_round_trip_reproduces_table() {
        for formula in ["A -> B", "A IFF B OR C", "NOT (A AND B) OR C"] {
            let table = table_for(formula);
            let dnf = NormalForm::dnf(&table);
            let cnf = NormalForm::cnf(&table);
            for (i, row) in table.rows().iter().enumerate() {
                let assignment = table.assignment(i);
                assert_eq!(dnf.evaluate(&assignment).unwrap(), row.result);
                assert_eq!(cnf.evaluate(&assignment).unwrap(), row.result);
            }
        }
    }

    #[test]
    fn test_evaluate_rejects_partial_assignment() {
        let table = table_for("A AND B");
        let dnf = NormalForm::dnf(&table);
        let err = dnf.evaluate(&Assignment::new()).unwrap_err();
        assert!(matches!(err, LogicError::UnboundVariable { .. }));
    }
}
