//! Display formatting for expression trees
//!
//! Formats with minimal parentheses based on binding strength. Uses the
//! symbolic spellings `!`, `&`, `|`, `->` and `<->`, all of which the
//! tokenizer accepts back, so `Expr::parse(&expr.to_string())`
//! reconstructs the same tree.

use super::Expr;
use std::fmt;

impl Expr {
    /// Binding strength, higher binds tighter
    fn binding(&self) -> u8 {
        match self {
            Expr::Variable(_) => 6,
            Expr::Not(_) => 5,
            Expr::And(_, _) => 4,
            Expr::Or(_, _) => 3,
            Expr::Implies(_, _) => 2,
            Expr::Iff(_, _) => 1,
        }
    }

    /// Format in a context that requires binding strength of at least `min`
    ///
    /// A node weaker than its context is parenthesized. The operand on the
    /// non-associating side of a binary connective is formatted one level
    /// tighter, which re-parenthesizes e.g. `(A -> B) -> C` but not
    /// `A -> B -> C`.
    fn fmt_binding(&self, f: &mut fmt::Formatter<'_>, min: u8) -> fmt::Result {
        let binding = self.binding();
        let parens = binding < min;
        if parens {
            write!(f, "(")?;
        }
        match self {
            Expr::Variable(name) => write!(f, "{}", name)?,
            Expr::Not(inner) => {
                write!(f, "!")?;
                inner.fmt_binding(f, binding)?;
            }
            Expr::And(left, right) => {
                left.fmt_binding(f, binding)?;
                write!(f, " & ")?;
                right.fmt_binding(f, binding + 1)?;
            }
            Expr::Or(left, right) => {
                left.fmt_binding(f, binding)?;
                write!(f, " | ")?;
                right.fmt_binding(f, binding + 1)?;
            }
            Expr::Implies(antecedent, consequent) => {
                antecedent.fmt_binding(f, binding + 1)?;
                write!(f, " -> ")?;
                consequent.fmt_binding(f, binding)?;
            }
            Expr::Iff(left, right) => {
                left.fmt_binding(f, binding + 1)?;
                write!(f, " <-> ")?;
                right.fmt_binding(f, binding)?;
            }
        }
        if parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Display formatting with minimal parentheses
///
/// # Examples
///
/// ```
/// use truth_tables::Expr;
///
/// let expr = Expr::parse("(A OR B) AND NOT C").unwrap();
/// assert_eq!(expr.to_string(), "(A | B) & !C");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_binding(f, 0)
    }
}
