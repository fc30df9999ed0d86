//! Evaluation of expression trees under a variable assignment

use super::Expr;
use crate::error::LogicError;
use std::collections::HashMap;
use std::sync::Arc;

/// A total mapping from variable name to truth value
///
/// Every evaluation call must supply a value for each variable referenced
/// by the expression being evaluated.
pub type Assignment = HashMap<Arc<str>, bool>;

impl Expr {
    /// Evaluate the expression under the given assignment
    ///
    /// Connective semantics:
    ///
    /// - `NOT x` is `¬x`
    /// - `AND` and `OR` are the standard binary boolean operators
    /// - `a IMPLIES b` is `¬a ∨ b`
    /// - `a IFF b` is `(a ∧ b) ∨ (¬a ∧ ¬b)`
    ///
    /// Both operands of a binary connective are always evaluated, so a
    /// missing variable is reported wherever it hides in the tree. Fails
    /// with [`LogicError::UnboundVariable`] naming the first variable the
    /// assignment does not cover.
    ///
    /// The expression is read-only here; evaluating the same tree under
    /// different assignments from different threads is safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use truth_tables::Expr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = Expr::parse("A -> B").unwrap();
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("A"), true);
    /// assignment.insert(Arc::from("B"), false);
    /// assert_eq!(expr.evaluate(&assignment).unwrap(), false);
    ///
    /// assignment.insert(Arc::from("A"), false);
    /// assert_eq!(expr.evaluate(&assignment).unwrap(), true);
    /// ```
    pub fn evaluate(&self, assignment: &Assignment) -> Result<bool, LogicError> {
        match self {
            Expr::Variable(name) => {
                assignment
                    .get(name)
                    .copied()
                    .ok_or_else(|| LogicError::UnboundVariable {
                        name: Arc::clone(name),
                    })
            }
            Expr::Not(inner) => Ok(!inner.evaluate(assignment)?),
            Expr::And(left, right) => {
                let left = left.evaluate(assignment)?;
                let right = right.evaluate(assignment)?;
                Ok(left && right)
            }
            Expr::Or(left, right) => {
                let left = left.evaluate(assignment)?;
                let right = right.evaluate(assignment)?;
                Ok(left || right)
            }
            Expr::Implies(antecedent, consequent) => {
                let antecedent = antecedent.evaluate(assignment)?;
                let consequent = consequent.evaluate(assignment)?;
                Ok(!antecedent || consequent)
            }
            Expr::Iff(left, right) => {
                let left = left.evaluate(assignment)?;
                let right = right.evaluate(assignment)?;
                Ok(left == right)
            }
        }
    }
}
