//! Algebraic simplification of expression trees.
//!
//! The simplifier performs exactly one bottom-up pass:
//! - Constant folding (e.g. 2 + 3 → 5, sin(0) → 0), which takes priority over every rule below
//! - Additive identity (e.g. x + 0 → x, 0 + x → x)
//! - Multiplicative zero (e.g. x * 0 → 0), checked before the identity rule
//! - Multiplicative identity (e.g. x * 1 → x, 1 * x → x)
//!
//! The pass is not repeated until a fixed point is reached.

use crate::{expr::Expr, types::Environment};

impl Expr {
    /// Simplifies the expression using constant folding and identity rules.
    ///
    /// Operands are simplified first. If the rebuilt node is exact it is evaluated with
    /// an empty environment and replaced by a number. Otherwise the identity rules of
    /// its operator are applied to the simplified operands.
    ///
    /// # Returns
    /// A new, semantically equivalent expression tree
    ///
    /// # Example
    /// ```
    /// # use symexpr::expr::Expr;
    /// let expr = Expr::multiply(
    ///     Expr::add(Expr::number(2.0), Expr::number(-1.0)),
    ///     Expr::variable("x"),
    /// );
    /// assert_eq!(expr.simplify(), Expr::variable("x"));
    /// ```
    pub fn simplify(&self) -> Expr {
        let node = match self {
            Expr::Number(_) | Expr::Variable(_) => return self.clone(),
            Expr::Negation(operand) => Expr::negate(operand.simplify()),
            Expr::Sine(operand) => Expr::sine(operand.simplify()),
            Expr::Cosine(operand) => Expr::cosine(operand.simplify()),
            Expr::Addition(left, right) => Expr::add(left.simplify(), right.simplify()),
            Expr::Multiplication(left, right) => Expr::multiply(left.simplify(), right.simplify()),
        };

        // Fold constants: an exact tree never references a variable
        if node.is_exact() {
            if let Ok(value) = node.evaluate(&Environment::new()) {
                return Expr::Number(value);
            }
        }

        match node {
            Expr::Addition(left, right) => {
                if left.is_number(0.0) {
                    *right
                } else if right.is_number(0.0) {
                    *left
                } else {
                    Expr::Addition(left, right)
                }
            }
            Expr::Multiplication(left, right) => {
                if left.is_number(0.0) || right.is_number(0.0) {
                    Expr::Number(0.0)
                } else if left.is_number(1.0) {
                    *right
                } else if right.is_number(1.0) {
                    *left
                } else {
                    Expr::Multiplication(left, right)
                }
            }
            other => other,
        }
    }
}
