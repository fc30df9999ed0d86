//! Truth table generation and classification
//!
//! A [`TruthTable`] enumerates every assignment over a formula's variables
//! in a fixed binary-counter order and records the formula's value for
//! each. Classification and the normal-form builders read the table, never
//! the formula, so they stay in lock step with what was actually computed.

use crate::error::LogicError;
use crate::expression::{Assignment, Expr};
use std::fmt;
use std::sync::Arc;

/// One row of a truth table: an assignment and the formula's value under it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    /// Truth values, aligned index-for-index with the table's variables
    pub values: Vec<bool>,
    /// The formula's value under this row's assignment
    pub result: bool,
}

/// The full truth table of a formula
///
/// Rows are ordered as a binary counter over the variables in
/// first-occurrence order, first variable most significant: row 0 assigns
/// every variable false, the last row assigns every variable true, and row
/// `i` assigns variable `k` bit `n-1-k` of `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TruthTable {
    variables: Vec<Arc<str>>,
    rows: Vec<Row>,
}

/// Where a formula sits on the tautology/contradiction spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Classification {
    /// True under every assignment
    Tautology,
    /// False under every assignment
    Contradiction,
    /// True under some assignments and false under others
    Contingent,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Tautology => write!(f, "tautology"),
            Classification::Contradiction => write!(f, "contradiction"),
            Classification::Contingent => write!(f, "contingent"),
        }
    }
}

impl TruthTable {
    /// Generate the truth table of an expression
    ///
    /// Enumerates all 2^n assignments over the n distinct variables and
    /// evaluates each row independently. A formula with no variables gets
    /// exactly one row. The caller is expected to keep n small enough to
    /// render; 2^n rows are materialized.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{Expr, TruthTable};
    ///
    /// let expr = Expr::parse("A AND B").unwrap();
    /// let table = TruthTable::generate(&expr).unwrap();
    ///
    /// assert_eq!(table.rows().len(), 4);
    /// // Rows count up in binary: FF, FT, TF, TT
    /// let results: Vec<_> = table.rows().iter().map(|r| r.result).collect();
    /// assert_eq!(results, vec![false, false, false, true]);
    /// ```
    pub fn generate(expr: &Expr) -> Result<Self, LogicError> {
        let variables = expr.variables();
        let n = variables.len();
        let mut rows = Vec::with_capacity(1 << n);

        for i in 0..1usize << n {
            let mut values = Vec::with_capacity(n);
            let mut assignment = Assignment::with_capacity(n);
            for (k, name) in variables.iter().enumerate() {
                let value = (i >> (n - 1 - k)) & 1 == 1;
                values.push(value);
                assignment.insert(Arc::clone(name), value);
            }
            let result = expr.evaluate(&assignment)?;
            rows.push(Row { values, result });
        }

        Ok(TruthTable { variables, rows })
    }

    /// The distinct variables of the formula, in first-occurrence order
    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    /// The rows in enumeration order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rebuild the full assignment of one row
    pub fn assignment(&self, index: usize) -> Assignment {
        self.variables
            .iter()
            .zip(&self.rows[index].values)
            .map(|(name, value)| (Arc::clone(name), *value))
            .collect()
    }

    /// Classify the formula from the result column
    ///
    /// All results true means tautology, all false means contradiction,
    /// anything else is contingent. Derived on demand so it can never go
    /// stale against the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{Classification, Expr, TruthTable};
    ///
    /// let expr = Expr::parse("A OR NOT A").unwrap();
    /// let table = TruthTable::generate(&expr).unwrap();
    /// assert_eq!(table.classify(), Classification::Tautology);
    /// ```
    pub fn classify(&self) -> Classification {
        if self.rows.iter().all(|row| row.result) {
            Classification::Tautology
        } else if self.rows.iter().all(|row| !row.result) {
            Classification::Contradiction
        } else {
            Classification::Contingent
        }
    }

    /// Render the table as CSV with a header row and 0/1 cells
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for name in &self.variables {
            out.push_str(name);
            out.push(',');
        }
        out.push_str("Result\n");
        for row in &self.rows {
            for value in &row.values {
                out.push(if *value { '1' } else { '0' });
                out.push(',');
            }
            out.push(if row.result { '1' } else { '0' });
            out.push('\n');
        }
        out
    }
}

/// Text rendering as an aligned grid with 0/1 cells
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.variables.iter().map(|name| name.len()).collect();
        for (name, width) in self.variables.iter().zip(widths.iter().copied()) {
            write!(f, "{:>width$}  ", name, width = width)?;
        }
        writeln!(f, "Result")?;
        for row in &self.rows {
            for (value, width) in row.values.iter().zip(widths.iter().copied()) {
                write!(f, "{:>width$}  ", u8::from(*value), width = width)?;
            }
            writeln!(f, "{:>6}", u8::from(row.result))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(formula: &str) -> TruthTable {
        let expr = Expr::parse(formula).unwrap();
        TruthTable::generate(&expr).unwrap()
    }

    #[test]
    fn test_row_count_is_power_of_two() {
        assert_eq!(table_for("A").rows().len(), 2);
        assert_eq!(table_for("A AND B").rows().len(), 4);
        assert_eq!(table_for("A AND B OR C").rows().len(), 8);
    }

    #[test]
    fn test_counter_order_first_variable_most_significant() {
        let table = table_for("A OR B");
        let values: Vec<_> = table.rows().iter().map(|r| r.values.clone()).collect();
        assert_eq!(
            values,
            vec![
                vec![false, false],
                vec![false, true],
                vec![true, false],
                vec![true, true],
            ]
        );
    }

    #[test]
    fn test_assignments_are_distinct_and_total() {
        let table = table_for("A AND B AND C");
        let mut seen = std::collections::HashSet::new();
        for (i, row) in table.rows().iter().enumerate() {
            assert_eq!(row.values.len(), 3);
            assert!(seen.insert(row.values.clone()));
            assert_eq!(table.assignment(i).len(), 3);
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_classify() {
        assert_eq!(table_for("A OR NOT A").classify(), Classification::Tautology);
        assert_eq!(
            table_for("A AND NOT A").classify(),
            Classification::Contradiction
        );
        assert_eq!(table_for("A -> B").classify(), Classification::Contingent);
    }

    #[test]
    fn test_csv_rendering() {
        let csv = table_for("A AND B").to_csv();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec!["A,B,Result", "0,0,0", "0,1,0", "1,0,0", "1,1,1"]
        );
    }
}
