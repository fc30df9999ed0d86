//! 2-variable Karnaugh maps
//!
//! A [`KMap`] lays the four rows of a 2-variable truth table out as a 2×2
//! grid and reports the maximal groupings of adjacent true cells. With
//! only four cells the candidate rectangles are fixed (the whole grid, two
//! rows, two columns, four single cells), so grouping is a case analysis
//! rather than a general covering algorithm; that is why maps are
//! restricted to exactly two variables here.

use crate::error::LogicError;
use crate::table::TruthTable;
use std::fmt;
use std::sync::Arc;

/// A maximal rectangle of true cells in the 2×2 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum KMapGroup {
    /// All four cells are true
    All,
    /// A full grid row: both cells where the row variable has this value
    Row(bool),
    /// A full grid column: both cells where the column variable has this
    /// value
    Col(bool),
    /// A lone true cell at (row value, column value)
    Cell(bool, bool),
}

/// A 2×2 Karnaugh map with its grouping report
///
/// The formula's first variable indexes the grid rows and the second the
/// columns. Rebuilt from the table on each request, never cached across
/// formula submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KMap {
    row_variable: Arc<str>,
    col_variable: Arc<str>,
    cells: [[bool; 2]; 2],
    groups: Vec<KMapGroup>,
}

impl KMap {
    /// Arrange a 2-variable truth table as a Karnaugh map
    ///
    /// Fails with [`LogicError::UnsupportedArity`] unless the table has
    /// exactly two variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::{Expr, KMap, KMapGroup, TruthTable};
    ///
    /// let expr = Expr::parse("A AND B").unwrap();
    /// let table = TruthTable::generate(&expr).unwrap();
    /// let kmap = KMap::build(&table).unwrap();
    ///
    /// assert!(kmap.cell(true, true));
    /// assert_eq!(kmap.groups(), &[KMapGroup::Cell(true, true)]);
    ///
    /// let three = Expr::parse("A AND B AND C").unwrap();
    /// let table = TruthTable::generate(&three).unwrap();
    /// assert!(KMap::build(&table).is_err());
    /// ```
    pub fn build(table: &TruthTable) -> Result<Self, LogicError> {
        let variables = table.variables();
        if variables.len() != 2 {
            return Err(LogicError::UnsupportedArity {
                found: variables.len(),
            });
        }

        let mut cells = [[false; 2]; 2];
        for row in table.rows() {
            cells[usize::from(row.values[0])][usize::from(row.values[1])] = row.result;
        }

        Ok(KMap {
            row_variable: Arc::clone(&variables[0]),
            col_variable: Arc::clone(&variables[1]),
            groups: groups_of(&cells),
            cells,
        })
    }

    /// The variable labeling the grid rows (the formula's first variable)
    pub fn row_variable(&self) -> &Arc<str> {
        &self.row_variable
    }

    /// The variable labeling the grid columns (the formula's second
    /// variable)
    pub fn col_variable(&self) -> &Arc<str> {
        &self.col_variable
    }

    /// The cell value at (row variable value, column variable value)
    pub fn cell(&self, row_value: bool, col_value: bool) -> bool {
        self.cells[usize::from(row_value)][usize::from(col_value)]
    }

    /// The maximal adjacent-true groupings
    ///
    /// Exactly the maximal all-true rectangles of the grid: `All` when
    /// every cell is true; otherwise each fully-true row and column, plus
    /// a `Cell` for each true cell not covered by one of those. A true
    /// cell covered by both a row and a column is reported through both,
    /// so e.g. `A OR B` yields the row `A=1` and the column `B=1`, which
    /// together cover its three true cells; no single rectangle does.
    pub fn groups(&self) -> &[KMapGroup] {
        &self.groups
    }
}

fn groups_of(cells: &[[bool; 2]; 2]) -> Vec<KMapGroup> {
    if cells.iter().flatten().all(|cell| *cell) {
        return vec![KMapGroup::All];
    }

    let mut groups = Vec::new();
    let full_row = |r: usize| cells[r][0] && cells[r][1];
    let full_col = |c: usize| cells[0][c] && cells[1][c];

    for r in 0..2 {
        if full_row(r) {
            groups.push(KMapGroup::Row(r == 1));
        }
    }
    for c in 0..2 {
        if full_col(c) {
            groups.push(KMapGroup::Col(c == 1));
        }
    }
    for r in 0..2 {
        for c in 0..2 {
            if cells[r][c] && !full_row(r) && !full_col(c) {
                groups.push(KMapGroup::Cell(r == 1, c == 1));
            }
        }
    }
    groups
}

/// Text rendering as a labeled grid:
///
/// ```text
///      B=0  B=1
/// A=0    0    1
/// A=1    0    1
/// ```
impl fmt::Display for KMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row_width = self.row_variable.len() + 2;
        let col_width = self.col_variable.len() + 2;
        write!(f, "{:row_width$}", "", row_width = row_width)?;
        for value in 0..2 {
            write!(
                f,
                "  {}={}",
                self.col_variable, value
            )?;
        }
        writeln!(f)?;
        for row_value in 0..2 {
            write!(f, "{}={}", self.row_variable, row_value)?;
            for col_value in 0..2 {
                write!(
                    f,
                    "  {:>col_width$}",
                    u8::from(self.cells[row_value][col_value]),
                    col_width = col_width
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
