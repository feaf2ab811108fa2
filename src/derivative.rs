//! Symbolic differentiation of expression trees.
//!
//! Every derivative is passed through [`Expr::simplify`] before it is returned, so the
//! intermediate trees produced by the sum and product rules never pile up unreduced terms.

use crate::expr::Expr;

impl Expr {
    /// Computes the symbolic derivative of this expression with respect to a variable.
    ///
    /// Recursively applies the rules of differentiation to build a new expression tree
    /// representing the derivative. The rules implemented are:
    /// - d/dx(c) = 0 for constants
    /// - d/dx(x) = 1 for the variable we're differentiating with respect to
    /// - d/dx(y) = 0 for other variables
    /// - Negation: d/dx(-f) = -(df/dx)
    /// - Chain rule for sin: d/dx(sin(f)) = df/dx * cos(f)
    /// - Chain rule for cos: d/dx(cos(f)) = df/dx * -(sin(f))
    /// - Sum rule: d/dx(f + g) = df/dx + dg/dx
    /// - Product rule: d/dx(f * g) = df/dx * g + f * dg/dx
    ///
    /// # Arguments
    /// * `with_respect_to` - The name of the variable to differentiate with respect to
    ///
    /// # Returns
    /// A new, simplified expression tree representing the derivative
    ///
    /// # Example
    /// ```
    /// # use symexpr::expr::Expr;
    /// let expr = Expr::sine(Expr::variable("x"));
    /// assert_eq!(expr.derive("x"), Expr::cosine(Expr::variable("x")));
    /// ```
    pub fn derive(&self, with_respect_to: &str) -> Expr {
        match self {
            Expr::Number(_) => Expr::Number(0.0),

            Expr::Variable(name) => {
                if name == with_respect_to {
                    Expr::Number(1.0)
                } else {
                    Expr::Number(0.0)
                }
            }

            Expr::Negation(operand) => Expr::negate(operand.derive(with_respect_to)).simplify(),

            Expr::Sine(operand) => Expr::multiply(
                operand.derive(with_respect_to),
                Expr::Cosine(operand.clone()),
            )
            .simplify(),

            Expr::Cosine(operand) => Expr::multiply(
                operand.derive(with_respect_to),
                Expr::negate(Expr::Sine(operand.clone())),
            )
            .simplify(),

            Expr::Addition(left, right) => {
                Expr::add(left.derive(with_respect_to), right.derive(with_respect_to)).simplify()
            }

            Expr::Multiplication(left, right) => Expr::add(
                Expr::Multiplication(Box::new(left.derive(with_respect_to)), right.clone()),
                Expr::Multiplication(left.clone(), Box::new(right.derive(with_respect_to))),
            )
            .simplify(),
        }
    }
}
